use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::core::library::{LibraryError, LibraryResult, PaginatedResult, RentalStatus};
use crate::core::repository::Repository;
use crate::rentals::domain::model::RentalEntity;
use crate::rentals::repository::RentalRepository;
use crate::utils::ddb::{add_filter_expr, from_ddb, opt_string_attribute, opt_string_date, parse_date_attribute, parse_item, parse_number_attribute, parse_opt_string_attribute, parse_string_attribute, string_date, to_ddb_page};

#[derive(Debug)]
pub(crate) struct DDBRentalRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBRentalRepository {
    pub(crate) fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }
}

#[async_trait]
impl Repository<RentalEntity> for DDBRentalRepository {
    async fn create(&self, entity: &RentalEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(rental_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    // the version condition makes approve/return race losers fail instead of
    // double-processing the same rental
    async fn update(&self, entity: &RentalEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("rental_id", AttributeValue::S(entity.rental_id.clone()))
            .update_expression("SET version = :version, rental_status = :rental_status, due_at = :due_at, returned_at = :returned_at, approved_by = :approved_by, received_by = :received_by, updated_at = :updated_at")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":rental_status", AttributeValue::S(entity.rental_status.to_string()))
            .expression_attribute_values(":due_at", string_date(entity.due_at))
            .expression_attribute_values(":returned_at", opt_string_date(entity.returned_at))
            .expression_attribute_values(":approved_by", opt_string_attribute(&entity.approved_by))
            .expression_attribute_values(":received_by", opt_string_attribute(&entity.received_by))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(version) AND version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<RentalEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "rental_id = :rental_id",
            )
            .expression_attribute_values(
                ":rental_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many rentals for {}", id).as_str(), None, false));
                } else if !items.is_empty() {
                    if let Some(map) = items.first() {
                        return Ok(map_to_rental(map));
                    }
                }
                Err(LibraryError::not_found(format!("rental item not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("rental not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("rental_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    // Note you cannot use certain reserved words per https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/ReservedWords.html
    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalEntity>> {
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
            .expression_attribute_values(":rental_status", AttributeValue::S(
                predicate.get("rental_status").unwrap_or(&RentalStatus::Pending.to_string()).to_string()
            ));
        // handle GSI keys first
        let mut key_cond = String::new();
        key_cond.push_str("rental_status = :rental_status");

        if let Some(user_id) = predicate.get("user_id") {
            key_cond.push_str(" AND user_id = :user_id");
            request = request.expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()));
        }
        request = request.key_condition_expression(key_cond);
        let mut filter_expr = String::new();
        // then handle other filters
        for (k, v) in predicate {
            if k != "rental_status" && k != "user_id" {
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
                .map(map_to_rental).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl RentalRepository for DDBRentalRepository {
    // the outstanding set spans two statuses, which means two index reads
    async fn query_outstanding(&self, user_id: &str,
                               page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalEntity>> {
        let mut records = vec![];
        for status in [RentalStatus::Pending, RentalStatus::Active] {
            let predicate = HashMap::from([
                ("rental_status".to_string(), status.to_string()),
                ("user_id".to_string(), user_id.to_string()),
            ]);
            let res = self.query(&predicate, page, page_size).await?;
            records.extend(res.records);
        }
        Ok(PaginatedResult::new(page, page_size, None, records))
    }

    async fn query_overdue(&self, predicate: &HashMap<String, String>,
                           page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<RentalEntity>> {
        let now = Utc::now().naive_utc();
        let mut new_predicate = HashMap::from([
            ("rental_status".to_string(), RentalStatus::Active.to_string()),
            ("due_at:<=".to_string(), string_date(now).as_s().unwrap_or(&"0".to_string()).to_string()),
        ]);
        for (key, value) in predicate {
            new_predicate.insert(key.to_string(), value.to_string());
        }
        self.query(&new_predicate, page, page_size).await
    }
}

fn map_to_rental(map: &HashMap<String, AttributeValue>) -> RentalEntity {
    RentalEntity {
        rental_id: parse_string_attribute("rental_id", map).unwrap_or_else(|| String::from("")),
        version: parse_number_attribute("version", map),
        user_id: parse_string_attribute("user_id", map).unwrap_or_else(|| String::from("")),
        book_id: parse_string_attribute("book_id", map).unwrap_or_else(|| String::from("")),
        rental_status: RentalStatus::from(parse_string_attribute("rental_status", map).unwrap_or_else(|| RentalStatus::Pending.to_string())),
        requested_days: parse_number_attribute("requested_days", map),
        due_at: parse_date_attribute("due_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
        returned_at: parse_date_attribute("returned_at", map),
        approved_by: parse_opt_string_attribute("approved_by", map),
        received_by: parse_opt_string_attribute("received_by", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
    }
}
