// tests/support/helpers.rs
use super::mocks::{
    FixedClock, InMemoryArticleTopics, InMemoryArticles, InMemoryAuthors, InMemoryTopics,
};
use axum::body;
use axum::http::StatusCode;
use newsdesk_core::application::enrichment::ArticleEnricher;
use newsdesk_core::application::services::{ApplicationServices, Repositories, ServiceSettings};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Services wired to in-memory stores. The store handles stay reachable so
/// tests can seed data, inject faults and read counters.
pub struct TestContext {
    pub articles: Arc<InMemoryArticles>,
    pub authors: Arc<InMemoryAuthors>,
    pub topics: Arc<InMemoryTopics>,
    pub links: Arc<InMemoryArticleTopics>,
    pub services: Arc<ApplicationServices>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_settings(ServiceSettings::default())
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_settings(ServiceSettings {
            request_timeout: timeout,
            ..ServiceSettings::default()
        })
    }

    pub fn with_settings(settings: ServiceSettings) -> Self {
        let articles = Arc::new(InMemoryArticles::default());
        let authors = Arc::new(InMemoryAuthors::default());
        let topics = Arc::new(InMemoryTopics::default());
        let links = Arc::new(InMemoryArticleTopics::default());

        let repos = Repositories {
            article_write: articles.clone(),
            article_read: articles.clone(),
            authors: authors.clone(),
            topic_write: topics.clone(),
            topic_read: topics.clone(),
            article_topics: links.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(FixedClock),
            settings,
        ));

        Self {
            articles,
            authors,
            topics,
            links,
            services,
        }
    }

    /// A standalone enricher over the same stores.
    pub fn enricher(&self, max_in_flight: usize) -> ArticleEnricher {
        ArticleEnricher::new(
            self.authors.clone(),
            self.topics.clone(),
            self.links.clone(),
            max_in_flight,
        )
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
