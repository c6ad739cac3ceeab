use crate::common::*;

#[doc = "HTTP bind settings"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}
