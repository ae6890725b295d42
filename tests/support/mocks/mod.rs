// tests/support/mocks/mod.rs
//! In-memory store doubles with call counters, injected delays and failures.
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod articles;
pub mod authors;
pub mod behaviour;
pub mod links;
pub mod plan;
pub mod time;
pub mod topics;

pub use articles::InMemoryArticles;
pub use authors::InMemoryAuthors;
pub use behaviour::LookupBehaviour;
pub use links::InMemoryArticleTopics;
pub use time::{FixedClock, days_after_epoch, fixed_now};
pub use topics::InMemoryTopics;
