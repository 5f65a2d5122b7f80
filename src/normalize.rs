use scraper::{Html, Selector};

use crate::site::{ASSET_PREFIX, Site};

/// Id of the site header element stripped from every fetched page.
const CHROME_ID: &str = "headerContainer";

/// Attribute-prefix rewrites applied to the raw HTML text before parsing.
/// The API serves article markup with site-relative and protocol-relative
/// URLs; rewriting makes every link and asset reference absolute.
pub fn rewrite_rules(site: &Site) -> Vec<(String, String)> {
    vec![
        ("\"/wiki/".to_owned(), format!("\"{}", site.wiki_base())),
        ("\"/w/".to_owned(), format!("\"{}", site.script_base())),
        ("\"//upload.".to_owned(), format!("\"{ASSET_PREFIX}")),
    ]
}

/// Turn the raw HTML the API returned into a traversable document:
/// drop literal `\n` sequences, absolutize URLs, parse leniently, strip the
/// header chrome. Malformed markup never errors; html5ever recovers with a
/// best-effort tree.
pub fn normalize(raw_html: &str, site: &Site) -> Html {
    let mut text = raw_html.replace("\\n", "");
    for (prefix, replacement) in rewrite_rules(site) {
        text = text.replace(&prefix, &replacement);
    }

    let mut doc = Html::parse_document(&text);
    remove_chrome(&mut doc);
    doc
}

fn remove_chrome(doc: &mut Html) {
    let Ok(selector) = Selector::parse(&format!("#{CHROME_ID}")) else {
        return;
    };

    let ids = doc.select(&selector).map(|el| el.id()).collect::<Vec<_>>();
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::DEFAULT_ORIGIN;

    fn site() -> Site {
        Site::new(DEFAULT_ORIGIN).expect("build default site")
    }

    #[test]
    fn strips_literal_newline_sequences() {
        let doc = normalize("<p>first\\nline</p>\\n<p>second</p>", &site());
        let html = doc.html();
        assert!(!html.contains("\\n"));
        assert!(html.contains("firstline"));
    }

    #[test]
    fn rewrites_known_url_prefixes() {
        let raw = concat!(
            r#"<a href="/wiki/Walden/Chapter_1">ch</a>"#,
            r#"<img src="/w/skins/logo.png">"#,
            r#"<img src="//upload.wikimedia.org/a.png">"#,
            r#"<a href="/other/path">untouched</a>"#,
        );
        let html = normalize(raw, &site()).html();

        assert!(html.contains(r#"href="https://en.wikisource.org/wiki/Walden/Chapter_1""#));
        assert!(html.contains(r#"src="https://en.wikisource.org/w/skins/logo.png""#));
        assert!(html.contains(r#"src="https://upload.wikimedia.org/a.png""#));
        assert!(html.contains(r#"href="/other/path""#));
    }

    #[test]
    fn removes_header_chrome() {
        let raw = concat!(
            r#"<div id="headerContainer"><span>Site navigation</span></div>"#,
            r#"<div class="content">Article</div>"#,
        );
        let html = normalize(raw, &site()).html();

        assert!(!html.contains("headerContainer"));
        assert!(!html.contains("Site navigation"));
        assert!(html.contains("Article"));
    }

    #[test]
    fn tolerates_malformed_markup() {
        let doc = normalize("<div><p>unclosed<a href='/wiki/X'>link", &site());
        assert!(doc.html().contains("unclosed"));
    }
}
