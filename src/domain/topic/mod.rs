pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTopic, Topic, TopicUpdate};
pub use filter::{TopicField, TopicFilter};
pub use repository::{TopicReadRepository, TopicWriteRepository};
pub use value_objects::{TopicId, TopicName};
