// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::CreatedDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleStatus, ArticleTitle, NewArticle},
        author::AuthorId,
        topic::TopicId,
    },
};
use tracing::info;

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: i64,
    pub status: String,
    pub topic_ids: Vec<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author_id: Option<i64>,
    status: Option<String>,
    topic_ids: Vec<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn topic_ids(mut self, topic_ids: impl IntoIterator<Item = i64>) -> Self {
        self.topic_ids = topic_ids.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            author_id: self.author_id.ok_or("author_id is required")?,
            status: self.status.ok_or("status is required")?,
            topic_ids: self.topic_ids,
        })
    }
}

impl ArticleCommandService {
    /// The title check is read-then-insert and not atomic: two concurrent
    /// creates with the same title can both pass it.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let status: ArticleStatus = command.status.parse()?;
        let author_id = AuthorId::new(command.author_id)?;
        let topic_ids = command
            .topic_ids
            .into_iter()
            .map(TopicId::new)
            .collect::<Result<Vec<_>, _>>()?;

        if self.read_repo.find_by_title(&title).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "article titled \"{title}\" already exists"
            )));
        }

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewArticle {
                title,
                content,
                status,
                author_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        self.associations.attach(created.id, &topic_ids).await?;
        info!(article_id = %created.id, topics = topic_ids.len(), "article created");

        Ok(CreatedDto {
            id: created.id.into(),
        })
    }
}
