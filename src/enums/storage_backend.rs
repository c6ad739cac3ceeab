use crate::common::*;

#[doc = "Deployment-selected persistence target for the observation series"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Local,
    Github,
}
