use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::accounts::domain::model::AccountEntity;
use crate::accounts::repository::AccountRepository;
use crate::core::library::{AccountRole, LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{add_filter_expr, from_ddb, opt_string_attribute, parse_date_attribute, parse_item, parse_number_attribute, parse_opt_string_attribute, parse_string_attribute, string_date, to_ddb_page};

#[derive(Debug)]
pub(crate) struct DDBAccountRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBAccountRepository {
    pub(crate) fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    // role-filtered scan; "role" is a reserved word so it goes through an
    // expression alias instead of the generic filter builder
    async fn scan(&self, predicate: &HashMap<String, String>,
                  page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountEntity>> {
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
            if k == "role" {
                if !filter_expr.is_empty() {
                    filter_expr.push_str(" AND ");
                }
                filter_expr.push_str("#role = :role");
                request = request.expression_attribute_names("#role", "role")
                    .expression_attribute_values(":role", AttributeValue::S(v.to_string()));
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
            let records = items.iter().map(map_to_account).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl Repository<AccountEntity> for DDBAccountRepository {
    async fn create(&self, entity: &AccountEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(account_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn update(&self, entity: &AccountEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("account_id", AttributeValue::S(entity.account_id.clone()))
            .update_expression("SET version = :version, #role = :role, email = :email, first_name = :first, last_name = :last, student_number = :student_number, phone = :phone, updated_at = :updated_at")
            .expression_attribute_names("#role", "role")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":role", AttributeValue::S(entity.role.to_string()))
            .expression_attribute_values(":email", AttributeValue::S(entity.email.to_string()))
            .expression_attribute_values(":first", AttributeValue::S(entity.first_name.to_string()))
            .expression_attribute_values(":last", AttributeValue::S(entity.last_name.to_string()))
            .expression_attribute_values(":student_number", opt_string_attribute(&entity.student_number))
            .expression_attribute_values(":phone", opt_string_attribute(&entity.phone))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(version) AND version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<AccountEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "account_id = :account_id",
            )
            .expression_attribute_values(
                ":account_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many accounts for {}", id).as_str(), None, false));
                } else if !items.is_empty() {
                    if let Some(map) = items.first() {
                        return Ok(map_to_account(map));
                    }
                }
                Err(LibraryError::not_found(format!("account item not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("account not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("account_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountEntity>> {
        let email = match predicate.get("email") {
            Some(email) => email.to_string(),
            // one lookup table for every role; without the email key this
            // falls back to a filtered scan
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
            .expression_attribute_values(":email", AttributeValue::S(email));
        let mut key_cond = String::new();
        key_cond.push_str("email = :email");
        if let Some(role) = predicate.get("role") {
            key_cond.push_str(" AND #role = :role");
            request = request.expression_attribute_names("#role", "role");
            request = request.expression_attribute_values(":role", AttributeValue::S(role.to_string()));
        }
        request = request.key_condition_expression(key_cond);
        let mut filter_expr = String::new();
        for (k, v) in predicate {
            if k != "email" && k != "role" {
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
                .map(map_to_account).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl AccountRepository for DDBAccountRepository {
    async fn find_by_email(&self, email: &str) -> LibraryResult<Vec<AccountEntity>> {
        let res = self.query(
            &HashMap::from([("email".to_string(), email.to_string())]), None, 100).await?;
        Ok(res.records)
    }

    async fn find_by_role(&self, role: AccountRole,
                          page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<AccountEntity>> {
        let predicate = HashMap::from([
            ("role".to_string(), role.to_string()),
        ]);
        self.scan(&predicate, page, page_size).await
    }
}

fn map_to_account(map: &HashMap<String, AttributeValue>) -> AccountEntity {
    AccountEntity {
        account_id: parse_string_attribute("account_id", map).unwrap_or_else(|| String::from("")),
        version: parse_number_attribute("version", map),
        role: AccountRole::from(parse_string_attribute("role", map).unwrap_or_else(|| String::from(""))),
        email: parse_string_attribute("email", map).unwrap_or_else(|| String::from("")),
        first_name: parse_string_attribute("first_name", map).unwrap_or_else(|| String::from("")),
        last_name: parse_string_attribute("last_name", map).unwrap_or_else(|| String::from("")),
        student_number: parse_opt_string_attribute("student_number", map),
        phone: parse_opt_string_attribute("phone", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
    }
}

#[cfg(test)]
mod tests {
    use crate::accounts::domain::model::AccountEntity;
    use crate::accounts::repository::ddb_account_repository::map_to_account;
    use crate::core::library::AccountRole;
    use crate::utils::ddb::parse_item;

    #[tokio::test]
    async fn test_should_map_item_to_account() {
        let account = AccountEntity::new(AccountRole::Student, "student@campus.edu");
        let val = serde_json::to_value(&account).expect("should serialize");
        let map = parse_item(val).expect("should parse item");
        let loaded = map_to_account(&map);
        assert_eq!(account.account_id, loaded.account_id);
        assert_eq!(AccountRole::Student, loaded.role);
        assert_eq!(account.email, loaded.email);
        assert_eq!(account.student_number, loaded.student_number);
    }

    #[tokio::test]
    async fn test_should_map_staff_without_student_number() {
        let account = AccountEntity::new(AccountRole::Manager, "manager@campus.edu");
        let val = serde_json::to_value(&account).expect("should serialize");
        let map = parse_item(val).expect("should parse item");
        let loaded = map_to_account(&map);
        assert_eq!(AccountRole::Manager, loaded.role);
        assert_eq!(None, loaded.student_number);
    }
}
