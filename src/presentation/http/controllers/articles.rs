// src/presentation/http/controllers/articles.rs
use super::{DEFAULT_LIMIT, DEFAULT_PAGE, parse_timestamp, positive_or};
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, CreatedDto},
    queries::articles::{FetchArticlesQuery, GetArticleByIdQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::{ArticleListResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    pub id: Option<i64>,
    /// Case-insensitive substring of the title.
    pub title: Option<String>,
    /// One of `draft`, `published`, `archived`.
    pub status: Option<String>,
    pub author_id: Option<i64>,
    /// RFC 3339, inclusive lower bound on `created_at`.
    pub start_date: Option<String>,
    /// RFC 3339, inclusive upper bound on `created_at`.
    pub end_date: Option<String>,
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    pub sort_dir: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub status: String,
    pub author_id: i64,
    #[serde(default)]
    pub topic_ids: Vec<i64>,
}

/// Omitted fields are left as they are. An empty `topic_ids` clears every topic.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub author_id: Option<i64>,
    pub topic_ids: Option<Vec<i64>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Filtered page of articles with authors and topics.", body = ArticleListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 504, description = "Request deadline exceeded.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    let query = FetchArticlesQuery {
        id: params.id,
        title: params.title,
        status: params.status,
        author_id: params.author_id,
        start_date: parse_timestamp("start_date", params.start_date.as_deref())?,
        end_date: parse_timestamp("end_date", params.end_date.as_deref())?,
        sort_by: params.sort_by,
        sort_dir: params.sort_dir,
        page: positive_or(params.page, DEFAULT_PAGE),
        limit: positive_or(params.limit, DEFAULT_LIMIT),
    };

    state
        .services
        .article_queries
        .fetch_articles(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with author and topics.", body = ArticleDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = CreatedDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Title already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<CreatedDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        author_id: payload.author_id,
        status: payload.status,
        topic_ids: payload.topic_ids,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = StatusResponse),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<StatusResponse>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
        status: payload.status,
        author_id: payload.author_id,
        topic_ids: payload.topic_ids,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
