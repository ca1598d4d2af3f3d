pub mod get_penalty_cmd;
pub mod pay_penalty_cmd;
pub mod query_penalties_cmd;
