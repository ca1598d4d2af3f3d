use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

// Configuration holds the rental policy for the library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub library_id: String,
    // ceiling on simultaneously outstanding (pending + active) rentals per user
    pub max_outstanding_rentals: i64,
    pub min_rental_days: i64,
    pub max_rental_days: i64,
    // currency units accrued per day a return is overdue
    pub daily_overdue_fee: i64,
}

impl Configuration {
    pub fn new(library_id: &str) -> Self {
        Configuration {
            library_id: library_id.to_string(),
            max_outstanding_rentals: 5,
            min_rental_days: 1,
            max_rental_days: 30,
            daily_overdue_fee: 10,
        }
    }
}
