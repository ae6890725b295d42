use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Paginated},
        error::{ApplicationError, ApplicationResult},
        queries::within_deadline,
    },
    domain::{
        article::{ArticleField, ArticleFilter, ArticleStatus},
        query::{OrderBy, QueryPlan},
    },
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Raw listing parameters as received from the transport. Page and limit
/// defaults are applied by the caller; everything else is optional.
#[derive(Debug, Clone, Default)]
pub struct FetchArticlesQuery {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub status: Option<String>,
    pub author_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub page: i64,
    pub limit: i64,
}

impl FetchArticlesQuery {
    fn into_plan(self) -> ApplicationResult<QueryPlan<ArticleField>> {
        let status = self
            .status
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(str::parse::<ArticleStatus>)
            .transpose()?;
        let order = OrderBy::parse(self.sort_by.as_deref(), self.sort_dir.as_deref())?;

        let filter = ArticleFilter {
            id: self.id,
            title: self.title,
            status,
            author_id: self.author_id,
            start_date: self.start_date,
            end_date: self.end_date,
            order,
            page: self.page,
            limit: self.limit,
        };
        Ok(filter.into_plan()?)
    }
}

impl ArticleQueryService {
    /// Count, page fetch and enrichment all share one deadline.
    pub async fn fetch_articles(
        &self,
        query: FetchArticlesQuery,
    ) -> ApplicationResult<Paginated<ArticleDto>> {
        let plan = query.into_plan()?;
        within_deadline(self.request_timeout, async {
            let (total, articles) = tokio::try_join!(
                self.read_repo.count(plan.count_predicates()),
                self.read_repo.fetch_page(&plan),
            )?;
            debug!(
                total,
                fetched = articles.len(),
                page = plan.window().page(),
                "fetched articles"
            );

            let enriched = self.enricher.enrich(articles).await?;
            let data = enriched.into_iter().map(ArticleDto::from).collect();
            Ok::<_, ApplicationError>(Paginated::new(data, plan.window(), total))
        })
        .await
    }
}
