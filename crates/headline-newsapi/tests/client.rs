//! Integration tests for `NewsApiClient` using wiremock HTTP mocks.

use headline_newsapi::{HeadlineQuery, NewsApiClient, NewsApiError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NewsApiClient {
    NewsApiClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

fn top() -> HeadlineQuery {
    HeadlineQuery::TopHeadlines {
        country: "us".to_string(),
    }
}

#[tokio::test]
async fn top_headlines_returns_articles() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "totalResults": 2,
        "articles": [
            {
                "source": { "id": "wire", "name": "Wire" },
                "title": "First",
                "description": "First description",
                "url": "https://example.com/1",
                "publishedAt": "2026-01-01T00:00:00Z",
                "content": "Body"
            },
            {
                "source": { "id": null, "name": "Other" },
                "title": null,
                "description": null,
                "url": "https://example.com/2",
                "publishedAt": "2026-01-01T01:00:00Z",
                "content": null
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("country", "us"))
        .and(header("X-Api-Key", "test-key"))
        .and(query_param("pageSize", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client.fetch(&top()).await.expect("should parse articles");

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title.as_deref(), Some("First"));
    assert!(articles[1].title.is_none());
}

#[tokio::test]
async fn category_query_sends_category() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "technology"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ok", "articles": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .fetch(&HeadlineQuery::Category {
            country: "us".to_string(),
            category: "technology".to_string(),
        })
        .await
        .expect("empty result is fine");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn everything_query_hits_everything_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "news"))
        .and(query_param("sortBy", "publishedAt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "articles": [{ "title": "Fresh", "url": "https://example.com/f", "publishedAt": "2026-01-01T00:00:00Z" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let articles = client
        .fetch(&HeadlineQuery::Everything {
            query: "news".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(articles.len(), 1);
}

#[tokio::test]
async fn error_envelope_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(&top()).await.unwrap_err();

    match err {
        NewsApiError::ApiError { code, message } => {
            assert_eq!(code, "apiKeyInvalid");
            assert!(message.contains("invalid"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn bare_server_error_surfaces_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(&top()).await.unwrap_err();
    assert!(matches!(err, NewsApiError::Status(503)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_surfaces_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch(&top()).await.unwrap_err();
    assert!(matches!(err, NewsApiError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn transport_error_does_not_expose_key() {
    let client = NewsApiClient::with_base_url("NEWS-SECRET", 5, "http://127.0.0.1:1")
        .expect("client construction should not fail");

    let err = client.fetch(&top()).await.unwrap_err();

    assert!(matches!(err, NewsApiError::Http(_)), "got {err:?}");
    assert!(!err.to_string().contains("NEWS-SECRET"), "{err}");
    assert!(!format!("{err:?}").contains("NEWS-SECRET"));
}
