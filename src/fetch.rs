use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::aggregate;
use crate::api;
use crate::chapters;
use crate::cli::FetchArgs;
use crate::normalize;
use crate::site::Site;
use crate::title::PageTitle;

/// End-to-end pipeline: fetch the root page, discover its chapters, merge
/// them into one document, write the result.
pub async fn run(args: FetchArgs) -> anyhow::Result<()> {
    let site = Site::new(&args.origin).context("parse --origin")?;
    let client = api::client()?;
    let root = PageTitle::new(&args.title);

    let raw = api::fetch_page(&client, &site, &root)
        .await
        .with_context(|| format!("fetch page {}", root.as_str()))?;

    // Scoped so the parsed document is gone before the chapter fetches start.
    let chapter_titles = {
        let doc = normalize::normalize(&raw, &site);
        chapters::discover(&doc, &site, &root)
    };
    tracing::info!(
        title = %root.as_str(),
        chapters = chapter_titles.len(),
        "discovered chapter links"
    );

    let container = aggregate::merge(&client, &site, chapter_titles, &root).await?;
    let document = render_document(args.title.trim(), &container);

    write_output(&args.out, &document, args.force)
}

fn render_document(book_title: &str, container: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{container}\n</body>\n</html>\n",
        escape_text(book_title)
    )
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn write_output(out: &str, document: &str, force: bool) -> anyhow::Result<()> {
    if out == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(document.as_bytes())
            .context("write document to stdout")?;
        return stdout.flush().context("flush stdout");
    }

    if let Some(parent) = Path::new(out).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir: {}", parent.display()))?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options
        .open(out)
        .with_context(|| format!("open output: {out}"))?;
    file.write_all(document.as_bytes())
        .with_context(|| format!("write output: {out}"))?;
    file.flush().with_context(|| format!("flush output: {out}"))
}
