use axum::{
    body::{Bytes, HttpBody},
    routing::get,
    BoxError,
    Router,
};
use crate::catalog::controller::{add_book, find_book_by_id, list_books, remove_book, update_book};
use crate::core::controller::AppState;
use crate::graphql::controller::{graphiql, graphql_handler, GRAPHQL_PATH};

// Generic over the request body so the same routes serve both hyper (local) and
// lambda_http (API Gateway) requests.
pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
    where
        B: HttpBody + Send + Sync + 'static,
        B::Data: Send + Into<Bytes>,
        B::Error: Into<BoxError> {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/:id",
               get(find_book_by_id).put(update_book).delete(remove_book))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use crate::books::factory::create_database;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::routes::build_router;
    use crate::utils::logs::capture::capture_logs;

    async fn new_state() -> AppState {
        let db = create_database(RepositoryStore::InMemory).await.expect("should create store");
        AppState::new(Configuration::new("test"), db)
    }

    fn rest_router(state: AppState) -> Router {
        build_router(state)
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(val) => builder
                .header("content-type", "application/json")
                .body(Body::from(val.to_string())),
            None => builder.body(Body::empty()),
        }.expect("should build request");
        let response = app.oneshot(request).await.expect("should respond");
        let status = response.status();
        let bytes = hyper::body::to_bytes(response.into_body()).await.expect("should read body");
        let val = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, val)
    }

    fn book_json(title: &str) -> Value {
        json!({
            "title": title,
            "author": "Herbert",
            "datePublished": "1965",
            "coverURL": "http://x/1.jpg",
        })
    }

    #[tokio::test]
    async fn test_should_create_and_fetch_book() {
        let state = new_state().await;
        let (status, created) = send(rest_router(state.clone()), "POST", "/books", Some(book_json("Dune"))).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(json!({
            "id": 1,
            "title": "Dune",
            "author": "Herbert",
            "datePublished": "1965",
            "coverURL": "http://x/1.jpg",
        }), created);

        let (status, fetched) = send(rest_router(state), "GET", "/books/1", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn test_should_ignore_client_supplied_id() {
        let state = new_state().await;
        let mut body = book_json("Dune");
        body["id"] = json!(42);
        let (status, created) = send(rest_router(state), "POST", "/books", Some(body)).await;
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!(json!(1), created["id"]);
    }

    #[tokio::test]
    async fn test_should_list_books_without_reusing_ids() {
        let state = new_state().await;
        for title in ["Dune", "Emma"] {
            let _ = send(rest_router(state.clone()), "POST", "/books", Some(book_json(title))).await;
        }
        let (status, _) = send(rest_router(state.clone()), "DELETE", "/books/1", None).await;
        assert_eq!(StatusCode::OK, status);
        let (_, third) = send(rest_router(state.clone()), "POST", "/books", Some(book_json("Ulysses"))).await;
        assert_eq!(json!(3), third["id"]);

        let (status, listed) = send(rest_router(state), "GET", "/books", None).await;
        assert_eq!(StatusCode::OK, status);
        let mut ids: Vec<i64> = listed.as_array().expect("should be an array").iter()
            .map(|b| b["id"].as_i64().expect("id should be an integer")).collect();
        ids.sort();
        assert_eq!(vec![2, 3], ids);
    }

    #[tokio::test]
    async fn test_should_return_not_found() {
        let state = new_state().await;
        let (status, _) = send(rest_router(state.clone()), "GET", "/books/999", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = send(rest_router(state.clone()), "PUT", "/books/999", Some(book_json("x"))).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = send(rest_router(state), "DELETE", "/books/999", None).await;
        assert_eq!(StatusCode::NOT_FOUND, status);
    }

    #[tokio::test]
    async fn test_should_replace_book() {
        let state = new_state().await;
        let _ = send(rest_router(state.clone()), "POST", "/books", Some(book_json("Dune"))).await;
        let (status, updated) = send(rest_router(state.clone()), "PUT", "/books/1", Some(json!({
            "title": "Dune Messiah",
            "author": "Frank Herbert",
            "datePublished": "1969",
            "coverURL": "http://x/2.jpg",
        }))).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!(1), updated["id"]);
        assert_eq!(json!("Dune Messiah"), updated["title"]);

        let (_, fetched) = send(rest_router(state), "GET", "/books/1", None).await;
        assert_eq!(updated, fetched);
    }

    #[tokio::test]
    async fn test_should_reject_partial_replace() {
        let state = new_state().await;
        let _ = send(rest_router(state.clone()), "POST", "/books", Some(book_json("Dune"))).await;
        let (status, _) = send(rest_router(state.clone()), "PUT", "/books/1", Some(json!({"title": "only"}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);

        let (_, fetched) = send(rest_router(state), "GET", "/books/1", None).await;
        assert_eq!(json!("Dune"), fetched["title"]);
    }

    #[tokio::test]
    async fn test_should_reject_bad_input() {
        let state = new_state().await;
        let (status, _) = send(rest_router(state.clone()), "GET", "/books/abc", None).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = send(rest_router(state.clone()), "POST", "/books", Some(json!({"title": 5}))).await;
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = send(rest_router(state), "PATCH", "/books/1", None).await;
        assert_eq!(StatusCode::METHOD_NOT_ALLOWED, status);
    }

    #[tokio::test]
    async fn test_should_serve_graphql() {
        let state = new_state().await;
        let query = json!({"query": r#"mutation { createBook(Title: "Dune", Author: "Herbert", DatePublished: "1965", BookCoverURL: "u") { ID } }"#});
        let (status, res) = send(rest_router(state.clone()), "POST", "/books-graphql", Some(query)).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!({"createBook": {"ID": 1}}), res["data"]);

        let (status, fetched) = send(rest_router(state), "GET", "/books/1", None).await;
        assert_eq!(StatusCode::OK, status);
        assert_eq!(json!("Dune"), fetched["title"]);
    }

    #[tokio::test]
    async fn test_should_accept_json_without_content_type() {
        let state = new_state().await;
        let request = Request::builder().method("POST").uri("/books")
            .body(Body::from(book_json("Dune").to_string())).expect("should build request");
        let response = rest_router(state.clone()).oneshot(request).await.expect("should respond");
        assert_eq!(StatusCode::CREATED, response.status());

        let request = Request::builder().method("PUT").uri("/books/1")
            .body(Body::from("{not json")).expect("should build request");
        let response = rest_router(state).oneshot(request).await.expect("should respond");
        assert_eq!(StatusCode::BAD_REQUEST, response.status());
    }

    #[tokio::test]
    async fn test_should_log_configured_branch() {
        let db = create_database(RepositoryStore::InMemory).await.expect("should create store");
        let state = AppState::new(Configuration::new("branch-7"), db);
        let (logs, _guard) = capture_logs();

        let (status, _) = send(rest_router(state.clone()), "POST", "/books", Some(book_json("Dune"))).await;
        assert_eq!(StatusCode::CREATED, status);
        let (status, _) = send(rest_router(state), "GET", "/books", None).await;
        assert_eq!(StatusCode::OK, status);

        let out = logs.contents();
        assert!(out.contains("\"branch\":\"branch-7\""), "{}", out);
        assert!(out.contains("book to be created"), "{}", out);
    }

    #[tokio::test]
    async fn test_should_serve_lambda_requests() {
        let state = new_state().await;
        let app: Router<(), lambda_http::Body> = build_router(state.clone());
        let request = Request::builder().method("POST").uri("/books")
            .header("content-type", "application/json")
            .body(lambda_http::Body::from(book_json("Dune").to_string()))
            .expect("should build request");
        let response = app.oneshot(request).await.expect("should respond");
        assert_eq!(StatusCode::CREATED, response.status());
        let bytes = hyper::body::to_bytes(response.into_body()).await.expect("should read body");
        let created: Value = serde_json::from_slice(&bytes).expect("should be json");
        assert_eq!(json!(1), created["id"]);

        let app: Router<(), lambda_http::Body> = build_router(state);
        let request = Request::builder().method("GET").uri("/books/1")
            .body(lambda_http::Body::Empty).expect("should build request");
        let response = app.oneshot(request).await.expect("should respond");
        assert_eq!(StatusCode::OK, response.status());
    }
}
