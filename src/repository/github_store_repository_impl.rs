use crate::common::*;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::tracking_error::*;
use crate::model::configs::storage_config::*;
use crate::traits::repository_traits::store_repository::*;

const GITHUB_API_BASE_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";
const USER_AGENT_HEADER: &str = "counter-chart-tracking";
const UPDATE_COMMIT_MESSAGE: &str = "Update counter series data";

#[doc = r#"
    Stores the series document as a file tracked in a remote GitHub repository,
    read and written through the contents API.

    The contents API requires the current blob sha when updating an existing
    file, so every write fetches the file metadata first. A missing file is
    treated as the first save and the update is sent without a sha.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct GithubStoreRepositoryImpl {
    client: Client,
    api_base_url: String,
    owner: String,
    repo: String,
    file_path: String,
    branch: String,
    token: String,
}

#[derive(Debug)]
pub(crate) struct RemoteFile {
    pub sha: String,
    pub content: String,
}

impl GithubStoreRepositoryImpl {
    pub fn new(github_config: &GithubStoreConfig) -> Result<Self, anyhow::Error> {
        let token: String = env::var(github_config.token_env()).map_err(|_| {
            anyhow!(
                "[GithubStoreRepositoryImpl->new] '{}' must be set for the github storage backend",
                github_config.token_env()
            )
        })?;

        let client: Client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(GithubStoreRepositoryImpl {
            client,
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            owner: github_config.owner().to_string(),
            repo: github_config.repo().to_string(),
            file_path: github_config.file_path().to_string(),
            branch: github_config.branch().to_string(),
            token,
        })
    }

    fn contents_url(&self) -> String {
        /* Encode each path segment separately so the separators survive. */
        let encoded_path: String = self
            .file_path
            .split('/')
            .map(|segment| encode(segment).into_owned())
            .collect::<Vec<String>>()
            .join("/");

        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base_url, self.owner, self.repo, encoded_path
        )
    }

    #[doc = "Decodes the newline-wrapped base64 payload the contents API returns"]
    fn decode_content(encoded: &str) -> Result<String, TrackingError> {
        let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

        let bytes: Vec<u8> = STANDARD.decode(compact.as_bytes()).map_err(|e| {
            TrackingError::StoreCorrupt(format!("invalid base64 content from remote store: {:?}", e))
        })?;

        String::from_utf8(bytes).map_err(|e| {
            TrackingError::StoreCorrupt(format!("remote store content is not utf-8: {:?}", e))
        })
    }

    async fn fetch_remote_file(&self) -> Result<RemoteFile, TrackingError> {
        let response = self
            .client
            .get(self.contents_url())
            .query(&[("ref", self.branch.as_str())])
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT_HEADER)
            .header(reqwest::header::USER_AGENT, USER_AGENT_HEADER)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(TrackingError::StoreMissing(format!(
                "{}/{}:{}",
                self.owner, self.repo, self.file_path
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default();
            return Err(TrackingError::RemoteStore(format!(
                "contents fetch failed with {}: {}",
                status, body
            )));
        }

        let body: Value = response.json().await?;

        let sha: String = body["sha"]
            .as_str()
            .ok_or_else(|| {
                TrackingError::StoreCorrupt("remote store response is missing 'sha'".to_string())
            })?
            .to_string();

        let content: String = Self::decode_content(body["content"].as_str().unwrap_or_default())?;

        Ok(RemoteFile { sha, content })
    }
}

#[async_trait]
impl StoreRepository for GithubStoreRepositoryImpl {
    async fn read_document(&self) -> Result<String, TrackingError> {
        Ok(self.fetch_remote_file().await?.content)
    }

    async fn write_document(&self, document: &str) -> Result<(), TrackingError> {
        let prior_sha: Option<String> = match self.fetch_remote_file().await {
            Ok(remote_file) => Some(remote_file.sha),
            Err(TrackingError::StoreMissing(_)) => None,
            Err(e) => return Err(e),
        };

        let mut payload: Value = json!({
            "message": UPDATE_COMMIT_MESSAGE,
            "content": STANDARD.encode(document.as_bytes()),
            "branch": self.branch,
        });

        if let Some(sha) = prior_sha {
            payload["sha"] = json!(sha);
        }

        let response = self
            .client
            .put(self.contents_url())
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, GITHUB_ACCEPT_HEADER)
            .header(reqwest::header::USER_AGENT, USER_AGENT_HEADER)
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default();
            Err(TrackingError::Persist(format!(
                "contents update failed with {}: {}",
                status, body
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repository() -> GithubStoreRepositoryImpl {
        GithubStoreRepositoryImpl {
            client: Client::new(),
            api_base_url: GITHUB_API_BASE_URL.to_string(),
            owner: "hanbotz".to_string(),
            repo: "bot-data".to_string(),
            file_path: "stats/data file.json".to_string(),
            branch: "main".to_string(),
            token: "test-token".to_string(),
        }
    }

    #[test]
    fn contents_url_encodes_segments_but_keeps_separators() {
        assert_eq!(
            sample_repository().contents_url(),
            "https://api.github.com/repos/hanbotz/bot-data/contents/stats/data%20file.json"
        );
    }

    #[test]
    fn decode_content_strips_api_newlines() {
        /* base64 of {"dates":[],"values":[]} with the 60-column wrapping the API uses */
        let encoded = "eyJkYXRlcyI6W10sInZh\nbHVlcyI6W119\n";

        let decoded: String = GithubStoreRepositoryImpl::decode_content(encoded).unwrap();
        assert_eq!(decoded, r#"{"dates":[],"values":[]}"#);
    }

    #[test]
    fn invalid_base64_is_corrupt() {
        let result = GithubStoreRepositoryImpl::decode_content("@@not base64@@");
        assert!(matches!(result, Err(TrackingError::StoreCorrupt(_))));
    }
}
