use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;
use url::Url;

use crate::site::Site;
use crate::title::PageTitle;

/// Failure classification at the API boundary. The wiki reports most
/// failures in-band, inside an otherwise successful HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The API itself reported the failure (e.g. a missing page).
    #[error("{info}")]
    Remote { info: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("build request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("malformed api response: {0}")]
    Malformed(String),
}

/// `action=parse` response: either an error record or a parse record
/// carrying the page's rendered HTML under `text["*"]`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub parse: Option<ParsePayload>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct ParsePayload {
    pub title: Option<String>,
    pub text: Option<ParseText>,
}

#[derive(Debug, Deserialize)]
pub struct ParseText {
    #[serde(rename = "*")]
    pub html: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub info: String,
}

impl ApiResponse {
    pub fn into_html(self) -> Result<String, FetchError> {
        if let Some(error) = self.error {
            return Err(FetchError::Remote { info: error.info });
        }

        self.parse
            .and_then(|parse| parse.text)
            .and_then(|text| text.html)
            .ok_or_else(|| FetchError::Malformed("missing `parse.text[\"*\"]`".to_owned()))
    }
}

pub fn client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("wikibook/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("build http client")
}

/// One GET against the wiki's parse API, returning the page's rendered HTML.
pub async fn fetch_page(
    client: &reqwest::Client,
    site: &Site,
    title: &PageTitle,
) -> Result<String, FetchError> {
    let url = Url::parse_with_params(
        &site.api_endpoint(),
        [
            ("action", "parse"),
            ("page", title.as_str()),
            ("prop", "text"),
            ("format", "json"),
            ("origin", "*"),
        ],
    )?;

    tracing::debug!(%url, "GET");
    let response = client.get(url).send().await?.error_for_status()?;
    let raw = response.text().await?;

    let decoded: ApiResponse =
        serde_json::from_str(&raw).map_err(|err| FetchError::Malformed(err.to_string()))?;
    decoded.into_html()
}
