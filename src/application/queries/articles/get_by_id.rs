use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        queries::within_deadline,
    },
    domain::article::{ArticleFilter, ArticleId},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Goes through the listing path so the result is enriched the same way.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let plan = ArticleFilter::by_id(id.into()).into_plan()?;

        within_deadline(self.request_timeout, async {
            let articles = self.read_repo.fetch_page(&plan).await?;
            self.enricher
                .enrich(articles)
                .await?
                .into_iter()
                .next()
                .map(ArticleDto::from)
                .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))
        })
        .await
    }
}
