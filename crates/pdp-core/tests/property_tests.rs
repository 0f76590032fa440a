//! # Property-Based Tests
//!
//! Sanitization and render invariants checked with proptest.

use pdp_core::{
    AssetResolver, Catalogs, FeatureCatalog, FeatureId, KnownAssets, RenderBlock, Renderer,
    Stakeholder, TitleCatalog, sanitize_feature,
};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

fn feature_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ /:.-]{1,24}"
}

proptest! {
    /// Only spaces and slashes change, each into exactly one underscore.
    #[test]
    fn sanitize_replaces_only_spaces_and_slashes(feature in ".{0,40}") {
        let sanitized = sanitize_feature(&feature);

        prop_assert_eq!(sanitized.chars().count(), feature.chars().count());
        prop_assert!(!sanitized.contains(' '));
        prop_assert!(!sanitized.contains('/'));

        for (original, clean) in feature.chars().zip(sanitized.chars()) {
            if original == ' ' || original == '/' {
                prop_assert_eq!(clean, '_');
            } else {
                prop_assert_eq!(clean, original);
            }
        }
    }

    /// Sanitizing twice is the same as sanitizing once.
    #[test]
    fn sanitize_is_idempotent(feature in ".{0,40}") {
        let once = sanitize_feature(&feature);
        prop_assert_eq!(sanitize_feature(&once), once.clone());
    }

    /// Each feature yields one warning or one heading-image-separator triple,
    /// in catalog order.
    #[test]
    fn render_enumerates_features_in_order(
        features in vec(feature_strategy(), 0..12),
        present_mask in vec(any::<bool>(), 12)
    ) {
        let resolver = AssetResolver::new("pdps", "png");
        let mut catalog = FeatureCatalog::new();
        catalog.set(Stakeholder::Marketers, features.iter().map(String::as_str));

        let probe: KnownAssets = features
            .iter()
            .zip(&present_mask)
            .filter(|(_, present)| **present)
            .map(|(f, _)| resolver.resolve(&FeatureId::new(f.as_str())))
            .collect();

        let renderer = Renderer::new(Catalogs::new(catalog, TitleCatalog::new()), resolver);
        let plan = renderer.render(Stakeholder::Marketers, &probe).expect("render");

        let mut enumerated = Vec::new();
        for block in &plan.blocks {
            match block {
                RenderBlock::Image { feature, .. } | RenderBlock::Warning { feature, .. } => {
                    enumerated.push(feature.as_str().to_string());
                }
                RenderBlock::Heading { .. } | RenderBlock::Separator => {}
            }
        }
        prop_assert_eq!(enumerated, features.clone());
        prop_assert_eq!(plan.shown + plan.missing, features.len());
        prop_assert_eq!(plan.blocks.len(), plan.shown * 3 + plan.missing);
    }

    /// A feature never gets both an image and a warning.
    #[test]
    fn image_and_warning_are_exclusive(
        features in btree_set(feature_strategy(), 1..10)
    ) {
        let features: Vec<String> = features.into_iter().collect();
        let resolver = AssetResolver::new("pdps", "png");
        let probe: KnownAssets = features
            .iter()
            .step_by(2)
            .map(|f| resolver.resolve(&FeatureId::new(f.as_str())))
            .collect();

        let mut catalog = FeatureCatalog::new();
        catalog.set(Stakeholder::PMs, features.iter().map(String::as_str));
        let renderer = Renderer::new(Catalogs::new(catalog, TitleCatalog::new()), resolver);
        let plan = renderer.render(Stakeholder::PMs, &probe).expect("render");

        let warned: Vec<&FeatureId> = plan.missing_features().collect();
        for block in &plan.blocks {
            if let RenderBlock::Image { feature, .. } = block {
                prop_assert!(!warned.contains(&feature));
            }
        }
    }
}
