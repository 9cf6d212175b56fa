//! One-shot member loading from a URL or a local JSON file

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;

use super::models::Member;

/// Members endpoint used when nothing else is configured
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Failure to obtain the initial member set
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source {url} responded with status {status}")]
    Status { status: u16, url: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid member data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the member list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberSource {
    Url(String),
    File(PathBuf),
}

impl MemberSource {
    /// Treat `http://` and `https://` values as URLs, anything else as a path
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            MemberSource::Url(trimmed.to_string())
        } else {
            MemberSource::File(PathBuf::from(trimmed))
        }
    }

    /// Fetch and decode the whole member array in one go
    pub async fn load(&self, timeout: Duration) -> Result<Vec<Member>, SourceError> {
        let bytes = match self {
            MemberSource::Url(url) => fetch_url(url, timeout).await?,
            MemberSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };

        let members = parse_members(&bytes)?;
        tracing::info!(source = %self, count = members.len(), "Loaded members");
        Ok(members)
    }
}

impl Default for MemberSource {
    fn default() -> Self {
        MemberSource::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl fmt::Display for MemberSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberSource::Url(url) => f.write_str(url),
            MemberSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

async fn fetch_url(url: &str, timeout: Duration) -> Result<Vec<u8>, SourceError> {
    let client = Client::builder().timeout(timeout).build()?;
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}

/// Decode a JSON array of `{ id, name, email, role }` objects.
/// Extra fields on each object are ignored.
pub fn parse_members(bytes: &[u8]) -> Result<Vec<Member>, SourceError> {
    Ok(serde_json::from_slice(bytes)?)
}
