pub mod store_repository;
