//! # Render Tier Tests (T0-T3)
//!
//! End-to-end checks of the render flow against a real directory tree.
//!
//! ## Tiers
//! - T0: Catalog enumeration
//! - T1: Asset resolution
//! - T2: Present / absent behavior on disk
//! - T3: Startup artifacts

use pdp_core::{
    ArtifactSet, AssetResolver, Catalogs, DashboardError, FeatureId, FsProbe, RenderBlock,
    Renderer, Stakeholder,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Dashboard root with the default layout and the given PDP files.
fn dashboard_root(images: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let resolver = AssetResolver::under_root(dir.path());
    fs::create_dir_all(resolver.dir()).expect("mkdir");
    for image in images {
        fs::write(resolver.dir().join(image), b"\x89PNG").expect("write");
    }
    dir
}

fn renderer(root: &Path) -> Renderer {
    Renderer::new(Catalogs::builtin(), AssetResolver::under_root(root))
}

// =============================================================================
// TIER T0: CATALOG ENUMERATION
// =============================================================================

mod t0_catalog_enumeration {
    use super::*;

    /// T0.1: Every stakeholder enumerates exactly its configured features.
    #[test]
    fn every_stakeholder_enumerates_its_features() {
        let root = dashboard_root(&[]);
        let renderer = renderer(root.path());
        let catalogs = Catalogs::builtin();

        for stakeholder in Stakeholder::ALL {
            let plan = renderer.render(stakeholder, &FsProbe).expect("render");
            let expected = catalogs.features.features(stakeholder).expect("configured");
            let enumerated: Vec<&FeatureId> = plan.missing_features().collect();
            assert_eq!(enumerated, expected.iter().collect::<Vec<_>>());
        }
    }

    /// T0.2: Selector options follow display order.
    #[test]
    fn selector_options_in_display_order() {
        let root = dashboard_root(&[]);
        assert_eq!(renderer(root.path()).stakeholders(), Stakeholder::ALL.to_vec());
    }
}

// =============================================================================
// TIER T1: ASSET RESOLUTION
// =============================================================================

mod t1_asset_resolution {
    use super::*;

    /// T1.1: A feature with a space resolves to the underscored file.
    #[test]
    fn spaced_feature_resolves_to_underscored_file() {
        let root = dashboard_root(&["dau_bin_Very_High.png"]);
        let plan = renderer(root.path())
            .render(Stakeholder::PMs, &FsProbe)
            .expect("render");

        assert!(plan.headings().any(|h| h == "PMs – Very High DAU Tier: Saturation or Scale?"));
        assert!(
            !plan
                .missing_features()
                .any(|f| f.as_str() == "dau_bin_Very High")
        );
    }

    /// T1.2: The raw spelling on disk is not found.
    #[test]
    fn raw_spelling_on_disk_is_not_found() {
        let root = dashboard_root(&["dau_bin_Very High.png"]);
        let plan = renderer(root.path())
            .render(Stakeholder::PMs, &FsProbe)
            .expect("render");

        assert!(
            plan.missing_features()
                .any(|f| f.as_str() == "dau_bin_Very High")
        );
    }
}

// =============================================================================
// TIER T2: PRESENT / ABSENT
// =============================================================================

mod t2_present_absent {
    use super::*;

    /// T2.1: The designers example renders three titled sections in order.
    #[test]
    fn designers_render_three_sections_in_order() {
        let root = dashboard_root(&[
            "dau_x_duration.png",
            "scaled_session_duration_minutes.png",
            "engagement_level_High.png",
        ]);
        let plan = renderer(root.path())
            .render(Stakeholder::Designers, &FsProbe)
            .expect("render");

        assert_eq!(
            plan.headings().collect::<Vec<_>>(),
            vec![
                "Designers – Session Intensity",
                "Designers – Session Length Influence on Revenue",
                "Designers – High Engagement User Segment Impact",
            ]
        );
        assert_eq!(plan.missing, 0);
        assert!(!plan.blocks.iter().any(RenderBlock::is_warning));
    }

    /// T2.2: One missing image yields exactly one warning, others still render.
    #[test]
    fn one_missing_image_one_warning() {
        let root = dashboard_root(&["dau_x_duration.png", "engagement_level_High.png"]);
        let plan = renderer(root.path())
            .render(Stakeholder::Designers, &FsProbe)
            .expect("render");

        let warnings: Vec<_> = plan.blocks.iter().filter(|b| b.is_warning()).collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            &RenderBlock::Warning {
                feature: FeatureId::new("scaled_session_duration_minutes"),
                message: "No PDP found for feature: scaled_session_duration_minutes".to_string(),
            }
        );
        assert_eq!(plan.shown, 2);
    }

    /// T2.3: Image blocks point at files that exist.
    #[test]
    fn image_paths_exist() {
        let root = dashboard_root(&["platform_freq.png", "top_genre_freq.png"]);
        let plan = renderer(root.path())
            .render(Stakeholder::Publishers, &FsProbe)
            .expect("render");

        for block in &plan.blocks {
            if let RenderBlock::Image { path, .. } = block {
                assert!(path.is_file(), "{} should exist", path.display());
            }
        }
        assert_eq!(plan.shown, 2);
        assert_eq!(plan.missing, 1);
    }
}

// =============================================================================
// TIER T3: STARTUP ARTIFACTS
// =============================================================================

mod t3_startup_artifacts {
    use super::*;

    /// T3.1: A root without the model fails verification.
    #[test]
    fn empty_root_fails_on_model() {
        let root = dashboard_root(&[]);
        let result = ArtifactSet::under_root(root.path()).verify();
        assert!(matches!(
            result,
            Err(DashboardError::MissingArtifact { kind: "model", .. })
        ));
    }

    /// T3.2: With both artifacts present, verification succeeds.
    #[test]
    fn complete_root_verifies() {
        let root = dashboard_root(&[]);
        let set = ArtifactSet::under_root(root.path());
        for path in [&set.model, &set.dataset] {
            fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        }
        fs::write(&set.model, b"joblib").expect("model");
        fs::write(&set.dataset, "revenue,dau\n1,2\n").expect("dataset");

        let summary = set.verify().expect("verify");
        assert_eq!(summary.dataset_columns, vec!["revenue", "dau"]);
        assert_eq!(summary.dataset_rows, 1);
    }
}
