pub mod add_taxonomy_cmd;
pub mod get_taxonomy_cmd;
pub mod query_taxonomy_cmd;
pub mod remove_taxonomy_cmd;
pub mod update_taxonomy_cmd;
