use crate::common::*;

use crate::enums::storage_backend::*;

#[doc = r#"
    Persistence settings for the observation series.

    `data_file_path` is used by the local backend. The `github` table is only
    required when `backend = "github"` is selected.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_file_path: String,
    pub github: Option<GithubStoreConfig>,
}

#[doc = "Remote repository coordinates for the GitHub contents backend. The access token itself stays in the environment variable named by `token_env`."]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct GithubStoreConfig {
    pub owner: String,
    pub repo: String,
    pub file_path: String,
    pub branch: String,
    pub token_env: String,
}
