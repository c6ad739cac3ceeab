use crate::common::*;

use crate::error::tracking_error::*;
use crate::traits::repository_traits::store_repository::*;

#[doc = "Stores the series document as a JSON file on local disk"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LocalStoreRepositoryImpl {
    data_file_path: String,
}

#[async_trait]
impl StoreRepository for LocalStoreRepositoryImpl {
    async fn read_document(&self) -> Result<String, TrackingError> {
        match tokio::fs::read_to_string(&self.data_file_path).await {
            Ok(raw_document) => Ok(raw_document),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TrackingError::StoreMissing(self.data_file_path.clone()))
            }
            Err(e) => Err(TrackingError::StoreIo(e)),
        }
    }

    async fn write_document(&self, document: &str) -> Result<(), TrackingError> {
        tokio::fs::write(&self.data_file_path, document)
            .await
            .map_err(|e| {
                TrackingError::Persist(format!(
                    "failed to write {}: {:?}",
                    self.data_file_path, e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path: String = dir
            .path()
            .join("data.json")
            .to_string_lossy()
            .into_owned();

        let repository = LocalStoreRepositoryImpl::new(path);
        repository
            .write_document(r#"{"dates":[],"values":[]}"#)
            .await
            .unwrap();

        let raw: String = repository.read_document().await.unwrap();
        assert_eq!(raw, r#"{"dates":[],"values":[]}"#);
    }

    #[tokio::test]
    async fn missing_file_maps_to_store_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path: String = dir
            .path()
            .join("absent.json")
            .to_string_lossy()
            .into_owned();

        let result = LocalStoreRepositoryImpl::new(path).read_document().await;
        assert!(matches!(result, Err(TrackingError::StoreMissing(_))));
    }
}
