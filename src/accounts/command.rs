pub mod add_account_cmd;
pub mod get_account_cmd;
pub mod query_accounts_cmd;
pub mod remove_account_cmd;
pub mod update_account_cmd;
