// src/presentation/http/controllers/topics.rs
use super::{DEFAULT_LIMIT, DEFAULT_PAGE, positive_or};
use crate::application::{
    commands::topics::{CreateTopicCommand, DeleteTopicCommand, UpdateTopicCommand},
    dto::{CreatedDto, TopicDto},
    queries::topics::{FetchTopicsQuery, GetTopicByIdQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::{StatusResponse, TopicListResponse};
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
pub struct TopicListParams {
    pub id: Option<i64>,
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    pub name: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/topics",
    params(TopicListParams),
    responses(
        (status = 200, description = "Filtered page of topics.", body = TopicListResponse),
        (status = 400, description = "Invalid filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
    Query(params): Query<TopicListParams>,
) -> HttpResult<Json<TopicListResponse>> {
    let query = FetchTopicsQuery {
        id: params.id,
        name: params.name,
        sort_by: params.sort_by,
        sort_dir: params.sort_dir,
        page: positive_or(params.page, DEFAULT_PAGE),
        limit: positive_or(params.limit, DEFAULT_LIMIT),
    };

    state
        .services
        .topic_queries
        .fetch_topics(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/topics/{id}",
    params(("id" = i64, Path, description = "Topic identifier")),
    responses(
        (status = 200, description = "Topic.", body = TopicDto),
        (status = 404, description = "Topic not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn get_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TopicDto>> {
    state
        .services
        .topic_queries
        .get_topic_by_id(GetTopicByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created.", body = CreatedDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateTopicRequest>,
) -> HttpResult<(StatusCode, Json<CreatedDto>)> {
    let created = state
        .services
        .topic_commands
        .create_topic(CreateTopicCommand { name: payload.name })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/topics/{id}",
    params(("id" = i64, Path, description = "Topic identifier")),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Topic updated.", body = StatusResponse),
        (status = 404, description = "Topic not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Name already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn update_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTopicRequest>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .topic_commands
        .update_topic(UpdateTopicCommand {
            id,
            name: payload.name,
        })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("updated")))
}

#[utoipa::path(
    delete,
    path = "/api/v1/topics/{id}",
    params(("id" = i64, Path, description = "Topic identifier")),
    responses(
        (status = 204, description = "Topic deleted and detached from its articles."),
        (status = 404, description = "Topic not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn delete_topic(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .topic_commands
        .delete_topic(DeleteTopicCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
