include!("../../lib.rs");
use axum::{
    routing::{get, post},
    Router,
};
use lambda_http::{run, Error};
use crate::utils::ddb::setup_tracing;
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::catalog::controller::{add_book, find_book_by_id, query_books, remove_book, update_book};
use crate::taxonomy::controller::{add_taxonomy, find_taxonomy_by_id, query_taxonomy, remove_taxonomy, update_taxonomy};

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let state = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        AppState::new("dev", RepositoryStore::LocalDynamoDB)
    } else {
        AppState::new("prod", RepositoryStore::DynamoDB)
    };

    let app = Router::new()
        .route("/catalog", post(add_book).get(query_books))
        .route("/catalog/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/taxonomy", post(add_taxonomy).get(query_taxonomy))
        .route("/taxonomy/:id",
               get(find_taxonomy_by_id).put(update_taxonomy).delete(remove_taxonomy))
        .with_state(state);

    run(app).await
}
