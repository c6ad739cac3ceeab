use crate::common::*;

use crate::model::configs::{
    chart_config::*, server_config::*, storage_config::*, system_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub chart: ChartConfig,
    pub system: SystemConfig,
}

#[doc = "HTTP server config"]
pub fn get_server_config_info() -> &'static ServerConfig {
    &TOTAL_CONFIG.server
}

#[doc = "Storage backend config"]
pub fn get_storage_config_info() -> &'static StorageConfig {
    &TOTAL_CONFIG.storage
}

#[doc = "Chart rendering config"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

#[doc = "System config"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg =
                    "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
