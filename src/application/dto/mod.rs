pub mod articles;
pub mod pagination;
pub mod serde_time;
pub mod topics;

pub use articles::{ArticleDto, AuthorDto, CreatedDto, TopicSummaryDto};
pub use pagination::{PaginationMeta, Paginated};
pub use topics::TopicDto;
