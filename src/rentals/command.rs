pub mod approve_rental_cmd;
pub mod get_rental_cmd;
pub mod query_rentals_cmd;
pub mod request_rental_cmd;
pub mod return_rental_cmd;
