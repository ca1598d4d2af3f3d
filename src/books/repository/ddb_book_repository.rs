use std::cmp;
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{add_filter_expr, from_ddb, opt_string_attribute, parse_date_attribute, parse_item, parse_number_attribute, parse_opt_string_attribute, parse_string_attribute, string_date, to_ddb_page};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
    index_name: String,
}

impl DDBBookRepository {
    pub(crate) fn new(client: Client, table_name: &str, index_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
            index_name: index_name.to_string(),
        }
    }

    async fn scan(&self, predicate: &HashMap<String, String>,
                  page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
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
            let ks = add_filter_expr(k.as_str(), &mut filter_expr);
            request = request.expression_attribute_values(format!(":{}", ks).as_str(), AttributeValue::S(v.to_string()));
        }
        if !filter_expr.is_empty() {
            request = request.filter_expression(filter_expr);
        }
        request
            .send()
            .await.map_err(LibraryError::from).map(|req| {
            let def_items = vec![];
            let items = req.items.as_ref().unwrap_or(&def_items);
            let records = items.iter().map(map_to_book).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        let val = serde_json::to_value(entity)?;
        self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(book_id)")
            .set_item(Some(parse_item(val)?))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();

        self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(entity.book_id.clone()))
            .update_expression("SET version = :version, title = :title, page_count = :page_count, stock = :stock, summary = :summary, cover_url = :cover_url, author_id = :author_id, publisher_id = :publisher_id, category_id = :category_id, shelf_id = :shelf_id, updated_at = :updated_at")
            .expression_attribute_values(":old_version", AttributeValue::N(entity.version.to_string()))
            .expression_attribute_values(":version", AttributeValue::N((entity.version + 1).to_string()))
            .expression_attribute_values(":title", AttributeValue::S(entity.title.to_string()))
            .expression_attribute_values(":page_count", AttributeValue::N(entity.page_count.to_string()))
            .expression_attribute_values(":stock", AttributeValue::N(entity.stock.to_string()))
            .expression_attribute_values(":summary", opt_string_attribute(&entity.summary))
            .expression_attribute_values(":cover_url", opt_string_attribute(&entity.cover_url))
            .expression_attribute_values(":author_id", opt_string_attribute(&entity.author_id))
            .expression_attribute_values(":publisher_id", opt_string_attribute(&entity.publisher_id))
            .expression_attribute_values(":category_id", opt_string_attribute(&entity.category_id))
            .expression_attribute_values(":shelf_id", opt_string_attribute(&entity.shelf_id))
            .expression_attribute_values(":updated_at", string_date(now))
            .condition_expression("attribute_exists(version) AND version = :old_version")
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "book_id = :book_id",
            )
            .expression_attribute_values(
                ":book_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            if let Some(items) = req.items {
                if items.len() > 1 {
                    return Err(LibraryError::database(format!("too many books for {}", id).as_str(), None, false));
                } else if !items.is_empty() {
                    if let Some(map) = items.first() {
                        return Ok(map_to_book(map));
                    }
                }
                Err(LibraryError::not_found(format!("book item not found for {}", id).as_str()))
            } else {
                Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
            }
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    // Note you cannot use certain reserved words per https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/ReservedWords.html
    async fn query(&self, predicate: &HashMap<String, String>,
                   page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let title = match predicate.get("title") {
            Some(title) => title.to_string(),
            // without the index key this falls back to a filtered scan
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
            .key_condition_expression("title = :title")
            .expression_attribute_values(":title", AttributeValue::S(title));
        let mut filter_expr = String::new();
        for (k, v) in predicate {
            if k != "title" {
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
                .map(map_to_book).collect();
            from_ddb(page, page_size, req.last_evaluated_key(), records)
        })
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn increment_stock(&self, id: &str) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();
        self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .update_expression("SET stock = stock + :one, updated_at = :updated_at")
            .condition_expression("attribute_exists(book_id)")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    // The stock guard keeps the counter from going negative; losing the
    // condition surfaces as a conflict, not a silent decrement.
    async fn decrement_stock(&self, id: &str) -> LibraryResult<usize> {
        let now = Utc::now().naive_utc();
        let table_name: &str = self.table_name.as_ref();
        self.client
            .update_item()
            .table_name(table_name)
            .key("book_id", AttributeValue::S(id.to_string()))
            .update_expression("SET stock = stock - :one, updated_at = :updated_at")
            .condition_expression("attribute_exists(book_id) AND stock > :zero")
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .expression_attribute_values(":zero", AttributeValue::N("0".to_string()))
            .expression_attribute_values(":updated_at", string_date(now))
            .send()
            .await.map(|_| 1).map_err(LibraryError::from)
    }

    async fn browse(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        self.scan(&HashMap::new(), page, page_size).await
    }
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        book_id: parse_string_attribute("book_id", map).unwrap_or_else(|| String::from("")),
        version: parse_number_attribute("version", map),
        title: parse_string_attribute("title", map).unwrap_or_else(|| String::from("")),
        page_count: parse_number_attribute("page_count", map),
        stock: parse_number_attribute("stock", map),
        summary: parse_opt_string_attribute("summary", map),
        cover_url: parse_opt_string_attribute("cover_url", map),
        author_id: parse_opt_string_attribute("author_id", map),
        publisher_id: parse_opt_string_attribute("publisher_id", map),
        category_id: parse_opt_string_attribute("category_id", map),
        shelf_id: parse_opt_string_attribute("shelf_id", map),
        created_at: parse_date_attribute("created_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
        updated_at: parse_date_attribute("updated_at", map).unwrap_or_else(|| Utc::now().naive_utc()),
    }
}
