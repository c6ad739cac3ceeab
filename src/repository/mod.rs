pub mod github_store_repository_impl;
pub mod local_store_repository_impl;
