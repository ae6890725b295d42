// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, Paginated, PaginationMeta, TopicDto};
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub data: Vec<ArticleDto>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub data: Vec<TopicDto>,
    pub meta: PaginationMeta,
}

impl From<Paginated<ArticleDto>> for ArticleListResponse {
    fn from(page: Paginated<ArticleDto>) -> Self {
        Self {
            data: page.data,
            meta: page.meta,
        }
    }
}

impl From<Paginated<TopicDto>> for TopicListResponse {
    fn from(page: Paginated<TopicDto>) -> Self {
        Self {
            data: page.data,
            meta: page.meta,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::topics::get_topic,
        crate::presentation::http::controllers::topics::create_topic,
        crate::presentation::http::controllers::topics::update_topic,
        crate::presentation::http::controllers::topics::delete_topic,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            TopicListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::topics::CreateTopicRequest,
            crate::presentation::http::controllers::topics::UpdateTopicRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::AuthorDto,
            crate::application::dto::TopicSummaryDto,
            crate::application::dto::TopicDto,
            crate::application::dto::CreatedDto,
            crate::application::dto::PaginationMeta
        )
    ),
    tags(
        (name = "Articles", description = "Article management endpoints"),
        (name = "Topics", description = "Topic management endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Newsdesk API",
        description = "Article and topic catalogue",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default `spec/openapi.json`)
/// and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/api/v1/articles",
            "/api/v1/articles/{id}",
            "/api/v1/topics",
            "/api/v1/topics/{id}",
        ] {
            assert!(paths.contains(&expected), "missing path {expected}");
        }
    }
}
