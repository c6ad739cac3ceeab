pub mod storage_backend;
