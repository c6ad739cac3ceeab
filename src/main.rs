mod common;
mod external_deps;
mod prelude;
use common::*;

mod controller;
mod dto;
mod enums;
mod env_configuration;
mod error;
mod model;
mod repository;
mod service;
mod traits;
mod utils_modules;

use controller::main_controller::*;
use enums::storage_backend::*;
use model::configs::{storage_config::*, total_config::*};
use repository::{github_store_repository_impl::*, local_store_repository_impl::*};
use service::{chart_service_impl::*, series_service_impl::*};
use traits::repository_traits::store_repository::*;
use utils_modules::{logger_utils::*, time_utils::*};

#[tokio::main]
async fn main() {
    dotenv().ok();
    set_global_logger();

    info!("Counter chart tracking server start!");

    let storage_config: &'static StorageConfig = get_storage_config_info();

    let run_result: Result<(), anyhow::Error> = match storage_config.backend() {
        StorageBackend::Local => {
            let repository: LocalStoreRepositoryImpl =
                LocalStoreRepositoryImpl::new(storage_config.data_file_path().to_string());
            run_with_repository(repository).await
        }
        StorageBackend::Github => {
            let github_config: &GithubStoreConfig = storage_config
                .github()
                .as_ref()
                .unwrap_or_else(|| {
                    let err_msg: &str = "[main] The 'github' storage backend requires a [storage.github] configuration table.";
                    error!("{}", err_msg);
                    panic!("{}", err_msg)
                });

            let repository: GithubStoreRepositoryImpl =
                GithubStoreRepositoryImpl::new(github_config).unwrap_or_else(|e| {
                    let err_msg: &str =
                        "[main] An issue occurred while initializing the github store repository.";
                    error!("{} {:?}", err_msg, e);
                    panic!("{} {:?}", err_msg, e)
                });
            run_with_repository(repository).await
        }
    };

    run_result.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}

#[doc = "Wires the services and the controller around the chosen store backend and serves until stopped"]
async fn run_with_repository<R: StoreRepository + 'static>(repository: R) -> anyhow::Result<()> {
    let system_config = get_system_config_info();
    let chart_config = get_chart_config_info();

    let timezone = fixed_offset_from_hours(*system_config.utc_offset_hours())?;

    let series_service: SeriesServiceImpl<R> = SeriesServiceImpl::new(repository, timezone);
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(chart_config.clone());

    let main_controller: MainController<SeriesServiceImpl<R>, ChartServiceImpl> =
        MainController::new(
            series_service,
            chart_service,
            *chart_config.window_size(),
            *system_config.max_points(),
        );

    main_controller.run(get_server_config_info()).await
}
