pub mod update_query;
