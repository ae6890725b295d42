use crate::domain::errors::DomainError;

const CNT_TOPIC_NAME: &str = "topics_name_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_ARTICLE_STATUS: &str = "articles_status_check";
const CNT_LINK_PKEY: &str = "article_topics_pkey";
const CNT_LINK_ARTICLE: &str = "article_topics_article_id_fkey";
const CNT_LINK_TOPIC: &str = "article_topics_topic_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_TOPIC_NAME => DomainError::Conflict("topic name already exists".into()),
                    CNT_LINK_PKEY => {
                        DomainError::Conflict("article is already linked to topic".into())
                    }
                    CNT_ARTICLE_AUTHOR => DomainError::NotFound("author not found".into()),
                    CNT_LINK_ARTICLE => DomainError::NotFound("article not found".into()),
                    CNT_LINK_TOPIC => DomainError::NotFound("topic not found".into()),
                    CNT_ARTICLE_STATUS => DomainError::Validation("invalid article status".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
