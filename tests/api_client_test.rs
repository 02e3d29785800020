//! API client endpoint tests using wiremock.
//!
//! These verify that `LibraryClient` hits the right paths with the right
//! methods and bodies, decodes list responses, and maps failures onto
//! `ApiError`.

use chrono::NaiveDate;
use circdesk::api::{ApiError, LibraryClient};
use circdesk::config::ApiConfig;
use circdesk::models::{BookPayload, BookRef, MemberUpdate, NewLoan, NewMember};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at a mock server, base path `/api` like production.
async fn test_client(server: &MockServer) -> LibraryClient {
    let config = ApiConfig::new().with_base_url(format!("{}/api", server.uri()));
    LibraryClient::new(&config).unwrap()
}

fn book_payload() -> BookPayload {
    BookPayload {
        isbn: "9780134685991".to_string(),
        title: "Effective Java".to_string(),
        author: "Joshua Bloch".to_string(),
        copies: 2,
    }
}

#[tokio::test]
async fn test_list_books_decodes_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"_id": "b1", "isbn": "9780134685991", "title": "Effective Java", "author": "Joshua Bloch", "copies": 2},
            {"_id": "b2", "isbn": "9780132350884", "title": "Clean Code", "author": "Robert C. Martin", "copies": 1}
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let books = client.list_books().await.unwrap();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].id, "b1");
    assert_eq!(books[1].title, "Clean Code");
}

#[tokio::test]
async fn test_create_book_posts_normalized_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .and(body_json(serde_json::json!({
            "isbn": "9780134685991",
            "title": "Effective Java",
            "author": "Joshua Bloch",
            "copies": 2
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    assert!(client.create_book(&book_payload()).await.is_ok());
}

#[tokio::test]
async fn test_update_book_puts_to_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/books/b1"))
        .and(body_json(serde_json::json!({
            "isbn": "9780134685991",
            "title": "Effective Java",
            "author": "Joshua Bloch",
            "copies": 2
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    assert!(client.update_book("b1", &book_payload()).await.is_ok());
}

#[tokio::test]
async fn test_delete_book_uses_delete_method() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/books/b9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    assert!(client.delete_book("b9").await.is_ok());
}

#[tokio::test]
async fn test_create_member_includes_joined_at() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/members"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.org",
            "joinedAt": "2026-01-15T10:30:00Z"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let payload = NewMember {
        name: "Ada".to_string(),
        email: "ada@example.org".to_string(),
        joined_at: "2026-01-15T10:30:00Z".parse().unwrap(),
    };
    assert!(client.create_member(&payload).await.is_ok());
}

#[tokio::test]
async fn test_update_member_sends_name_and_email_only() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/members/m1"))
        .and(body_json(serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.org"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let payload = MemberUpdate {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.org".to_string(),
    };
    assert!(client.update_member("m1", &payload).await.is_ok());
}

#[tokio::test]
async fn test_list_loans_accepts_embedded_and_bare_references() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "_id": "l1",
                "bookId": {"_id": "b1", "title": "Dune"},
                "memberId": {"_id": "m1", "name": "Ada"},
                "createdAt": "2026-02-01T09:00:00Z",
                "dueAt": "2026-02-15T00:00:00Z",
                "returnedAt": null
            },
            {
                "_id": "l2",
                "bookId": "b2",
                "memberId": "m2",
                "createdAt": "2026-02-02T09:00:00Z",
                "dueAt": "2026-02-16T00:00:00Z",
                "returnedAt": "2026-02-10T12:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let loans = client.list_loans().await.unwrap();

    assert_eq!(loans.len(), 2);
    assert_eq!(loans[0].book_title(), "Dune");
    assert!(loans[0].is_outstanding());
    assert_eq!(loans[1].book, Some(BookRef::Id("b2".to_string())));
    assert_eq!(loans[1].book_title(), "");
    assert!(!loans[1].is_outstanding());
}

#[tokio::test]
async fn test_create_loan_sends_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/loans"))
        .and(body_json(serde_json::json!({
            "bookId": "b1",
            "memberId": "m1",
            "dueAt": "2026-02-15"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let payload = NewLoan {
        book_id: "b1".to_string(),
        member_id: "m1".to_string(),
        due_at: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
    };
    assert!(client.create_loan(&payload).await.is_ok());
}

#[tokio::test]
async fn test_return_loan_uses_dedicated_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/loans/return/l1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    assert!(client.return_loan("l1").await.is_ok());
}

#[tokio::test]
async fn test_delete_loan() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/loans/l1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    assert!(client.delete_loan("l1").await.is_ok());
}

#[tokio::test]
async fn test_server_error_maps_to_status_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("isbn already exists"))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let err = client.create_book(&book_payload()).await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "isbn already exists");
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_maps_to_http_error() {
    // Nothing is listening here
    let config = ApiConfig::new().with_base_url("http://127.0.0.1:59999/api");
    let client = LibraryClient::new(&config).unwrap();

    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn test_undecodable_list_body_maps_to_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server).await;
    let err = client.list_books().await.unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
}
