use crate::common::*;

use crate::error::tracking_error::*;

#[doc = r#"
    Raw access to the persisted series document, independent of where it
    lives. Implementations exist for a local JSON file and for a file tracked
    in a remote GitHub repository.
"#]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    #[doc = "Reads the whole store document. `StoreMissing` means no document has been written yet."]
    async fn read_document(&self) -> Result<String, TrackingError>;

    #[doc = "Overwrites the whole store document"]
    async fn write_document(&self, document: &str) -> Result<(), TrackingError>;
}
