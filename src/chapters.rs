use anyhow::Context as _;
use scraper::{Html, Selector};

use crate::api;
use crate::cli::ChaptersArgs;
use crate::normalize;
use crate::site::Site;
use crate::title::{self, PageTitle};

/// Scan the root page's anchors, in document order, for links to sub-pages
/// of the root title. Returns the anchors' `title` attributes; duplicates
/// are kept, and an empty result means the page has no chapter links.
pub fn discover(doc: &Html, site: &Site, root: &PageTitle) -> Vec<String> {
    let expected_prefix = format!("{}{}", site.wiki_base(), title::search_token(root));

    let Ok(anchors) = Selector::parse("a") else {
        return Vec::new();
    };

    let mut chapters = Vec::new();
    for anchor in doc.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !title::escape_parens(href).contains(&expected_prefix) {
            continue;
        }
        if let Some(chapter_title) = anchor.value().attr("title") {
            chapters.push(chapter_title.to_owned());
        }
    }

    chapters
}

pub async fn run(args: ChaptersArgs) -> anyhow::Result<()> {
    let site = Site::new(&args.origin).context("parse --origin")?;
    let client = api::client()?;
    let root = PageTitle::new(&args.title);

    let raw = api::fetch_page(&client, &site, &root)
        .await
        .with_context(|| format!("fetch page {}", root.as_str()))?;

    let doc = normalize::normalize(&raw, &site);
    for chapter in discover(&doc, &site, &root) {
        println!("{chapter}");
    }

    Ok(())
}
