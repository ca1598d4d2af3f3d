use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::core::library::{LibraryError, LibraryResult, PaginatedResult, TaxonomyKind};
use crate::core::repository::Repository;
use crate::taxonomy::domain::model::TaxonomyEntity;
use crate::taxonomy::repository::TaxonomyRepository;
use crate::utils::ddb::{add_filter_expr, from_ddb, opt_string_attribute, parse_date_attribute, parse_item, parse_number_attribute, parse_opt_string_attribute, parse_string_attribute, string_date, to_ddb_page};

#[derive(Debug)]
pub(crate) struct DDBTaxonomyRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBTaxonomyRepository {
    pub(crate) fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<TaxonomyEntity> for DDBTaxonomyRepository {
    async fn create(&self, entity: &TaxonomyEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(taxonomy_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    // "name" is a reserved word, hence the #name alias
    async fn update(&self, entity: &TaxonomyEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("taxonomy_id", AttributeValue::S(entity.taxonomy_id.clone()))
            .update_expression("SET version = :version, kind = :kind, #name = :name, #description = :description, updated_at = :updated_at")
            .expression_attribute_names("#name", "name")
            .expression_attribute_names("#description", "description")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":kind", AttributeValue::S(entity.kind.to_string()))
            .expression_attribute_values(":name", AttributeValue::S(entity.name.to_string()))
            .expression_attribute_values(":description", opt_string_attribute(&entity.description))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(version) AND version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<TaxonomyEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "taxonomy_id = :taxonomy_id",
            )
            .expression_attribute_values(
                ":taxonomy_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many taxonomies for {}", id).as_str(), None, false));
                } else if !items.is_empty() {
                    if let Some(map) = items.first() {
                        return Ok(map_to_taxonomy(map));
                    }
                }
                Err(LibraryError::not_found(format!("taxonomy item not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("taxonomy not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("taxonomy_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<TaxonomyEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let index_name: &str = self.index_name.as_ref();
        let exclusive_start_key = to_ddb_page(page, predicate);
        let mut request = self.client
            .query()
            .table_name(table_name)
            .index_name(index_name)
            .limit(cmp::min(page_size, 500) as i32)
            .consistent_read(false)
            .set_exclusive_start_key(exclusive_start_key)
            .expression_attribute_values(":kind", AttributeValue::S(
                predicate.get("kind").unwrap_or(&TaxonomyKind::Category.to_string()).to_string()
            ));
        // handle GSI keys first
        let mut key_cond = String::new();
        key_cond.push_str("kind = :kind");

        if let Some(name) = predicate.get("name") {
            key_cond.push_str(" AND #name = :name");
            request = request.expression_attribute_names("#name", "name");
            request = request.expression_attribute_values(":name", AttributeValue::S(name.to_string()));
        }
        request = request.key_condition_expression(key_cond);
        let mut filter_expr = String::new();
        // then handle other filters
        for (k, v) in predicate {
            if k != "kind" && k != "name" {
                let ks = add_filter_expr(k.as_str(), &mut filter_expr);
                request = request.expression_attribute_values(format!(":{}", ks).as_str(), AttributeValue::S(v.to_string()));
            }
        }
        if !filter_expr.is_empty() {
            request = request.filter_expression(filter_expr);
        }
        request
            .send()
            .await.map_err(LibraryError::from).map(|req| {
            let records = req.items.as_ref().unwrap_or(&vec![]).iter()
                .map(map_to_taxonomy).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl TaxonomyRepository for DDBTaxonomyRepository {
    async fn find_by_kind(&self, kind: TaxonomyKind,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<TaxonomyEntity>> {
        let predicate = HashMap::from([
            ("kind".to_string(), kind.to_string()),
        ]);
        self.query(&predicate, page, page_size).await
    }
}

fn map_to_taxonomy(map: &HashMap<String, AttributeValue>) -> TaxonomyEntity {
    TaxonomyEntity {
        taxonomy_id: parse_string_attribute("taxonomy_id", map).unwrap_or_else(|| String::from("")),
        version: parse_number_attribute("version", map),
        kind: TaxonomyKind::from(parse_string_attribute("kind", map).unwrap_or_else(|| String::from(""))),
        name: parse_string_attribute("name", map).unwrap_or_else(|| String::from("")),
        description: parse_opt_string_attribute("description", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
    }
}
