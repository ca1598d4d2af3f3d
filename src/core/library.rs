use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    // Raised when a version-conditioned update loses against a concurrent
    // writer: the row changed since it was read. Callers must re-read before
    // deciding whether the operation still applies.
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn conflict(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Database { retryable, .. } => { *retryable }
            LibraryError::Conflict { .. } => { false }
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Conflict { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for repositories and services.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // The page number or token
    pub page: Option<String>,
    // page size
    pub page_size: usize,
    // Next page if available
    pub next_page: Option<String>,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: Option<&str>, page_size: usize,
                      next_page: Option<String>, records: Vec<T>) -> Self {
        PaginatedResult {
            page: page.map(str::to_string),
            page_size,
            next_page,
            records,
        }
    }
}

// Rental lifecycle: Pending --approve--> Active --return--> Returned (terminal).
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum RentalStatus {
    Pending,
    Active,
    Returned,
}

impl From<String> for RentalStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => RentalStatus::Pending,
            "Active" => RentalStatus::Active,
            "Returned" => RentalStatus::Returned,
            _ => RentalStatus::Pending,
        }
    }
}

impl Display for RentalStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RentalStatus::Pending => write!(f, "Pending"),
            RentalStatus::Active => write!(f, "Active"),
            RentalStatus::Returned => write!(f, "Returned"),
        }
    }
}

// Role determines the dashboard and the permitted operations; staff roles
// (Officer, Manager) approve rentals, receive returns and manage the catalog.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum AccountRole {
    Student,
    Officer,
    Manager,
}

impl AccountRole {
    pub fn is_staff(&self) -> bool {
        matches!(self, AccountRole::Officer | AccountRole::Manager)
    }
}

impl From<String> for AccountRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Student" => AccountRole::Student,
            "Officer" => AccountRole::Officer,
            "Manager" => AccountRole::Manager,
            _ => AccountRole::Student,
        }
    }
}

impl Display for AccountRole {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AccountRole::Student => write!(f, "Student"),
            AccountRole::Officer => write!(f, "Officer"),
            AccountRole::Manager => write!(f, "Manager"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum TaxonomyKind {
    Author,
    Publisher,
    Category,
    Shelf,
}

impl From<String> for TaxonomyKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Author" => TaxonomyKind::Author,
            "Publisher" => TaxonomyKind::Publisher,
            "Category" => TaxonomyKind::Category,
            "Shelf" => TaxonomyKind::Shelf,
            _ => TaxonomyKind::Category,
        }
    }
}

impl Display for TaxonomyKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TaxonomyKind::Author => write!(f, "Author"),
            TaxonomyKind::Publisher => write!(f, "Publisher"),
            TaxonomyKind::Category => write!(f, "Category"),
            TaxonomyKind::Shelf => write!(f, "Shelf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{AccountRole, LibraryError, RentalStatus, TaxonomyKind};

    #[tokio::test]
    async fn test_should_create_database_error() {
        assert!(matches!(LibraryError::database("test", None, false), LibraryError::Database{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_conflict_error() {
        assert!(matches!(LibraryError::conflict("test", None), LibraryError::Conflict{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(true, LibraryError::database("test", None, true).retryable());
        assert_eq!(false, LibraryError::database("test", None, false).retryable());
        assert_eq!(false, LibraryError::conflict("test", None).retryable());
        assert_eq!(false, LibraryError::duplicate_key("test").retryable());
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_format_rental_status() {
        let statuses = vec![
            RentalStatus::Pending,
            RentalStatus::Active,
            RentalStatus::Returned,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = RentalStatus::from(str);
            assert_eq!(status, str_status);
        }
    }

    #[tokio::test]
    async fn test_should_format_account_role() {
        let roles = vec![
            AccountRole::Student,
            AccountRole::Officer,
            AccountRole::Manager,
        ];
        for role in roles {
            let str = role.to_string();
            let str_role = AccountRole::from(str);
            assert_eq!(role, str_role);
        }
        assert!(!AccountRole::Student.is_staff());
        assert!(AccountRole::Officer.is_staff());
        assert!(AccountRole::Manager.is_staff());
    }

    #[tokio::test]
    async fn test_should_format_taxonomy_kind() {
        let kinds = vec![
            TaxonomyKind::Author,
            TaxonomyKind::Publisher,
            TaxonomyKind::Category,
            TaxonomyKind::Shelf,
        ];
        for kind in kinds {
            let str = kind.to_string();
            let str_kind = TaxonomyKind::from(str);
            assert_eq!(kind, str_kind);
        }
    }
}
