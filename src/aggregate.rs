use anyhow::Context as _;
use scraper::{ElementRef, Html, Selector};

use crate::api;
use crate::normalize;
use crate::site::Site;
use crate::title::PageTitle;

/// Fetch every chapter strictly in list order and append each chapter's body
/// content to one container. An empty chapter list degrades to the root page
/// itself being the whole book.
///
/// Fetches are sequential on purpose: chapter N+1 is not requested until
/// chapter N has been normalized and appended, which makes the output order
/// follow the input order with no reassembly step.
pub async fn merge(
    client: &reqwest::Client,
    site: &Site,
    mut chapters: Vec<String>,
    root: &PageTitle,
) -> anyhow::Result<String> {
    if chapters.is_empty() {
        tracing::debug!(title = %root.as_str(), "no chapter links; merging the page itself");
        chapters.push(root.as_str().to_owned());
    }

    let mut container = String::from("<div class=\"container\">");
    for chapter in &chapters {
        let chapter_title = PageTitle::new(chapter);
        tracing::info!(chapter = %chapter_title.as_str(), "fetch chapter");

        let raw = api::fetch_page(client, site, &chapter_title)
            .await
            .with_context(|| format!("fetch chapter {}", chapter_title.as_str()))?;

        let body = {
            let doc = normalize::normalize(&raw, site);
            first_body_child(&doc).with_context(|| {
                format!("chapter has no body content: {}", chapter_title.as_str())
            })?
        };
        container.push_str(&body);
    }
    container.push_str("</div>");

    Ok(container)
}

/// The first element under `<body>`; for parse-API output that is the
/// article's content wrapper.
fn first_body_child(doc: &Html) -> Option<String> {
    let body = Selector::parse("body").ok()?;
    let body = doc.select(&body).next()?;
    let first = body.children().find_map(ElementRef::wrap)?;
    Some(first.html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_body_child_takes_the_first_element() {
        let doc = Html::parse_document("<body> <div class=\"a\">one</div><div>two</div></body>");
        assert_eq!(first_body_child(&doc).as_deref(), Some("<div class=\"a\">one</div>"));
    }

    #[test]
    fn first_body_child_skips_leading_text_nodes() {
        let doc = Html::parse_document("<body>stray text<p>kept</p></body>");
        assert_eq!(first_body_child(&doc).as_deref(), Some("<p>kept</p>"));
    }

    #[test]
    fn first_body_child_handles_empty_body() {
        let doc = Html::parse_document("<body>   </body>");
        assert_eq!(first_body_child(&doc), None);
    }
}
