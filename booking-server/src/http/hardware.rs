//! Server-rendered hardware listing

use std::fmt::Write;
use std::sync::Arc;

use axum::{extract::State, response::Html};
use booking_core::{Catalog, HardwareItem};

use crate::AppState;

const INTRO: &str = "Es folgen eine Auflistung aller Hardware die bei uns zur Verfügung steht.\
<br/>Benötigen Sie weitere Hardware so ergänzen Sie diese bitte im Buchungsprozess.";

/// GET /hardware
pub async fn hardware_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.catalog))
}

/// Render the full listing page for the visible catalog items
pub fn render_page(catalog: &Catalog) -> String {
    let mut sections = String::new();
    for item in catalog.visible() {
        render_item(&mut sections, item);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hardware</title>
</head>
<body>
<div class="w-full">
    <div class="m-10 text-center">
        <h1 class="m-10">Hardware</h1>
        <div class="text-xl">{intro}</div>
    </div>
{sections}</div>
</body>
</html>
"#,
        intro = INTRO,
        sections = sections,
    )
}

fn render_item(out: &mut String, item: &HardwareItem) {
    let name = escape_html(&item.name);

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"    <section id="{id}" class="m-10 pb-5 border-b-2">
        <div class="flex justify-center flex-col md:flex-row">
            <img alt="{name}" src="{image}" class="w-full max-w-md mr-10 rounded-xl object-scale-down"/>
            <div class="sm:w-[400px] flex items-center">
                <div class="sm:mb-20">
                    <h4><a href="{link}">{name}</a></h4>
                    <ul>"#,
        id = escape_html(&item.id),
        name = name,
        image = escape_html(&item.image),
        link = escape_html(&item.link),
    );

    for spec in &item.specs {
        let _ = writeln!(out, "                        <li>{}</li>", escape_html(spec));
    }

    let cost = item
        .hourly_cost_label()
        .map(|label| escape_html(&label))
        .unwrap_or_default();

    let _ = writeln!(
        out,
        r#"                    </ul>
                    <div class="mt-5">{cost}</div>
                </div>
            </div>
        </div>
    </section>"#,
    );
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_toml(
            r#"
[[items]]
id = "vr"
name = "VR <Headset>"
image = "/vr.png"
link = "https://example.com/vr?a=1&b=2"
specs = ["128 GB", "Controller \"Pro\""]
price = 12.5

[[items]]
id = "pi"
name = "Pi"
image = "/pi.png"
price = 0.0

[[items]]
id = "hidden"
name = "Secret"
image = "/s.png"
show = false
"#,
        )
        .unwrap()
    }

    #[test]
    fn escape_html_replaces_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn page_lists_visible_items_only() {
        let html = render_page(&catalog());
        assert!(html.contains(r#"<section id="vr""#));
        assert!(html.contains(r#"<section id="pi""#));
        assert!(!html.contains("Secret"));
        assert!(html.find("id=\"vr\"").unwrap() < html.find("id=\"pi\"").unwrap());
    }

    #[test]
    fn page_escapes_item_fields() {
        let html = render_page(&catalog());
        assert!(html.contains("VR &lt;Headset&gt;"));
        assert!(html.contains("https://example.com/vr?a=1&amp;b=2"));
        assert!(html.contains("<li>Controller &quot;Pro&quot;</li>"));
    }

    #[test]
    fn cost_line_only_for_priced_items() {
        let html = render_page(&catalog());
        assert_eq!(html.matches("Kosten pro Stunde").count(), 1);
        assert!(html.contains("Kosten pro Stunde 12,50\u{a0}€"));
    }

    #[test]
    fn page_has_heading_and_intro() {
        let html = render_page(&Catalog::default());
        assert!(html.contains("<h1 class=\"m-10\">Hardware</h1>"));
        assert!(html.contains("Buchungsprozess"));
        assert!(!html.contains("<section"));
    }
}
