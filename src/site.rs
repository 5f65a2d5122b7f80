use anyhow::Context as _;
use url::Url;

pub const DEFAULT_ORIGIN: &str = "https://en.wikisource.org";

/// Protocol-relative asset URLs (`//upload....`) always resolve to https,
/// independent of the configured origin.
pub const ASSET_PREFIX: &str = "https://upload.";

/// The wiki the client talks to. Everything is derived from the origin so
/// tests can point the whole pipeline at a stub server.
#[derive(Debug, Clone)]
pub struct Site {
    origin: String,
}

impl Site {
    pub fn new(origin: &str) -> anyhow::Result<Self> {
        let url = Url::parse(origin).with_context(|| format!("parse wiki origin: {origin}"))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("wiki origin must be http/https: {origin}");
        }

        Ok(Self {
            origin: origin.trim_end_matches('/').to_owned(),
        })
    }

    /// Base of article page URLs, e.g. `https://en.wikisource.org/wiki/`.
    pub fn wiki_base(&self) -> String {
        format!("{}/wiki/", self.origin)
    }

    /// Base of script-path URLs, e.g. `https://en.wikisource.org/w/`.
    pub fn script_base(&self) -> String {
        format!("{}/w/", self.origin)
    }

    pub fn api_endpoint(&self) -> String {
        format!("{}/w/api.php", self.origin)
    }
}
