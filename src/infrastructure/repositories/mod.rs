// src/infrastructure/repositories/mod.rs
mod error;
mod filter_sql;
mod postgres_article;
mod postgres_article_topic;
mod postgres_author;
mod postgres_topic;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_article_topic::PostgresArticleTopicRepository;
pub use postgres_author::PostgresAuthorRepository;
pub use postgres_topic::{PostgresTopicReadRepository, PostgresTopicWriteRepository};
