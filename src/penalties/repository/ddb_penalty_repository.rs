use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::penalties::domain::model::PenaltyEntity;
use crate::penalties::repository::PenaltyRepository;
use crate::utils::ddb::{add_filter_expr, from_ddb, parse_bool_attribute, parse_date_attribute, parse_item, parse_number_attribute, parse_string_attribute, string_date, to_ddb_page};

#[derive(Debug)]
pub(crate) struct DDBPenaltyRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBPenaltyRepository {
    pub(crate) fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    async fn scan(&self, predicate: &HashMap<String, String>,
                  page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let exclusive_start_key = to_ddb_page(page, predicate);
        let mut request = self.client
            .scan()
            .table_name(table_name)
            .consistent_read(false)
            .set_exclusive_start_key(exclusive_start_key)
            .limit(cmp::min(page_size, 500) as i32);
        let mut filter_expr = String::new();
        for (k, v) in predicate {
            // the paid flag is stored as a boolean attribute
            if k == "paid" {
                if !filter_expr.is_empty() {
                    filter_expr.push_str(" AND ");
                }
                filter_expr.push_str("paid = :paid");
                request = request.expression_attribute_values(":paid", AttributeValue::Bool(v == "true"));
            } else {
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
            let def_items = vec![];
            let items = req.items.as_ref().unwrap_or(&def_items);
            let records = items.iter().map(map_to_penalty).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl Repository<PenaltyEntity> for DDBPenaltyRepository {
    async fn create(&self, entity: &PenaltyEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(penalty_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn update(&self, entity: &PenaltyEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("penalty_id", AttributeValue::S(entity.penalty_id.clone()))
            .update_expression("SET version = :version, paid = :paid, #description = :description, updated_at = :updated_at")
            .expression_attribute_names("#description", "description")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":paid", AttributeValue::Bool(entity.paid))
            .expression_attribute_values(":description", AttributeValue::S(entity.description.to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(version) AND version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<PenaltyEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "penalty_id = :penalty_id",
            )
            .expression_attribute_values(
                ":penalty_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many penalties for {}", id).as_str(), None, false));
                } else if !items.is_empty() {
                    if let Some(map) = items.first() {
                        return Ok(map_to_penalty(map));
                    }
                }
                Err(LibraryError::not_found(format!("penalty item not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("penalty not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("penalty_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyEntity>> {
        let user_id = match predicate.get("user_id") {
            Some(user_id) => user_id.to_string(),
            // ledger-wide views go through a filtered scan
            None => return self.scan(predicate, page, page_size).await,
        };
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
            .expression_attribute_values(":user_id", AttributeValue::S(user_id));
        let mut key_cond = String::new();
        key_cond.push_str("user_id = :user_id");
        if let Some(book_id) = predicate.get("book_id") {
            key_cond.push_str(" AND book_id = :book_id");
            request = request.expression_attribute_values(":book_id", AttributeValue::S(book_id.to_string()));
        }
        request = request.key_condition_expression(key_cond);
        let mut filter_expr = String::new();
        for (k, v) in predicate {
            if k == "paid" {
                if !filter_expr.is_empty() {
                    filter_expr.push_str(" AND ");
                }
                filter_expr.push_str("paid = :paid");
                request = request.expression_attribute_values(":paid", AttributeValue::Bool(v == "true"));
            } else if k != "user_id" && k != "book_id" {
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
                .map(map_to_penalty).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl PenaltyRepository for DDBPenaltyRepository {
    async fn query_unpaid(&self, predicate: &HashMap<String, String>,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PenaltyEntity>> {
        let mut new_predicate = HashMap::from([
            ("paid".to_string(), "false".to_string()),
        ]);
        for (key, value) in predicate {
            new_predicate.insert(key.to_string(), value.to_string());
        }
        self.query(&new_predicate, page, page_size).await
    }
}

fn map_to_penalty(map: &HashMap<String, AttributeValue>) -> PenaltyEntity {
    PenaltyEntity {
        penalty_id: parse_string_attribute("penalty_id", map).unwrap_or_else(|| String::from("")),
        version: parse_number_attribute("version", map),
        rental_id: parse_string_attribute("rental_id", map).unwrap_or_else(|| String::from("")),
        user_id: parse_string_attribute("user_id", map).unwrap_or_else(|| String::from("")),
        book_id: parse_string_attribute("book_id", map).unwrap_or_else(|| String::from("")),
        period_start: parse_date_attribute("period_start", map).unwrap_or_else(|| Utc::now().naive_utc()),
        period_end: parse_date_attribute("period_end", map).unwrap_or_else(|| Utc::now().naive_utc()),
        overdue_days: parse_number_attribute("overdue_days", map),
        fee: parse_number_attribute("fee", map),
        description: parse_string_attribute("description", map).unwrap_or_else(|| String::from("")),
        paid: parse_bool_attribute("paid", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
    }
}
