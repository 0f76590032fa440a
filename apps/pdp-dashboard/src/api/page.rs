//! # HTML Dashboard
//!
//! Draws a [`RenderPlan`] as a single HTML page: a sidebar with the
//! stakeholder selector and a main column with one section per PDP.
//!
//! Images are served from [`ASSET_ROUTE`]; file names are percent-encoded.

use pdp_core::{
    RenderBlock, RenderPlan, Stakeholder,
    primitives::{DASHBOARD_HEADING, DASHBOARD_TAGLINE, PAGE_TITLE, SELECTOR_LABEL},
};

/// Route prefix the PDP directory is mounted under.
pub const ASSET_ROUTE: &str = "/pdps";

const STYLE: &str = "body{margin:0;font-family:sans-serif;display:flex}\
nav{width:16rem;padding:1.5rem;background:#f0f2f6;min-height:100vh}\
main{flex:1;padding:1.5rem 3rem}\
img{width:100%;height:auto}\
figcaption{color:#6b6b6b;font-size:.875rem;text-align:center}\
.warning{background:#fffce7;border-left:4px solid #ffbd45;padding:.75rem 1rem;margin:.5rem 0}";

/// Escape text for HTML element and attribute content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text, then turn `**bold**` pairs into `<strong>`.
/// An unpaired `**` is left as typed.
fn emphasis_to_html(text: &str) -> String {
    let escaped = escape_html(text);
    let parts: Vec<&str> = escaped.split("**").collect();
    if parts.len() % 2 == 0 {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 {
            out.push_str("<strong>");
            out.push_str(part);
            out.push_str("</strong>");
        } else {
            out.push_str(part);
        }
    }
    out
}

fn asset_url(file_name: &str) -> String {
    format!("{}/{}", ASSET_ROUTE, urlencoding::encode(file_name))
}

fn selector(options: &[Stakeholder], selected: Option<Stakeholder>) -> String {
    let mut html = String::new();
    html.push_str("<form method=\"get\" action=\"/\">");
    html.push_str(&format!(
        "<label for=\"stakeholder\">{}</label><br>",
        escape_html(SELECTOR_LABEL)
    ));
    html.push_str(
        "<select id=\"stakeholder\" name=\"stakeholder\" onchange=\"this.form.submit()\">",
    );
    for option in options {
        let mark = if Some(*option) == selected {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{name}\"{mark}>{name}</option>",
            name = escape_html(option.name()),
            mark = mark
        ));
    }
    html.push_str("</select><noscript><button type=\"submit\">Show</button></noscript></form>");
    html
}

fn document(nav: &str, main: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>{title}</title><style>{style}</style></head>\
<body><nav>{nav}</nav><main><h1>{heading}</h1><p>{tagline}</p>{main}</main></body></html>",
        title = escape_html(PAGE_TITLE),
        style = STYLE,
        nav = nav,
        heading = escape_html(DASHBOARD_HEADING),
        tagline = escape_html(DASHBOARD_TAGLINE),
        main = main
    )
}

/// Full dashboard page for one stakeholder.
pub fn render_page(options: &[Stakeholder], plan: &RenderPlan) -> String {
    let mut main = String::new();
    main.push_str(&format!("<h2>{}</h2>", escape_html(&plan.subheader)));
    main.push_str(&format!("<p>{}</p>", emphasis_to_html(&plan.intro)));

    for block in &plan.blocks {
        match block {
            RenderBlock::Heading { text } => {
                main.push_str(&format!("<h3>{}</h3>", escape_html(text)));
            }
            RenderBlock::Image {
                file_name,
                caption,
                ..
            } => {
                main.push_str(&format!(
                    "<figure><img src=\"{src}\" alt=\"{alt}\"><figcaption>{alt}</figcaption></figure>",
                    src = escape_html(&asset_url(file_name)),
                    alt = escape_html(caption)
                ));
            }
            RenderBlock::Separator => main.push_str("<hr>"),
            RenderBlock::Warning { message, .. } => {
                main.push_str(&format!(
                    "<div class=\"warning\" role=\"alert\">{}</div>",
                    escape_html(message)
                ));
            }
        }
    }

    document(&selector(options, Some(plan.stakeholder)), &main)
}

/// Page shown for a stakeholder name that is not offered.
pub fn not_found_page(options: &[Stakeholder], requested: &str) -> String {
    let main = format!(
        "<div class=\"warning\" role=\"alert\">Unknown stakeholder: {}</div>",
        escape_html(requested)
    );
    document(&selector(options, None), &main)
}

// =============================================================================
// TESTS
// =============================================================================
