use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::TaxonomyKind;
use crate::utils::date::serializer;

// TaxonomyEntity is one row of catalog reference data; kind tells whether it
// names an author, publisher, category or shelf.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct TaxonomyEntity {
    pub taxonomy_id: String,
    pub version: i64,
    pub kind: TaxonomyKind,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl TaxonomyEntity {
    pub fn new(kind: TaxonomyKind, name: &str) -> Self {
        Self {
            taxonomy_id: Uuid::new_v4().to_string(),
            version: 0,
            kind,
            name: name.to_string(),
            description: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for TaxonomyEntity {
    fn id(&self) -> String {
        self.taxonomy_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
