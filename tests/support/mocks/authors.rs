// tests/support/mocks/authors.rs
use super::LookupBehaviour;
use async_trait::async_trait;
use newsdesk_core::domain::author::{Author, AuthorId, AuthorRepository};
use newsdesk_core::domain::errors::DomainResult;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryAuthors {
    rows: Mutex<HashMap<AuthorId, Author>>,
    pub lookups: LookupBehaviour,
}

impl InMemoryAuthors {
    pub fn seed(&self, id: i64, name: &str) {
        self.rows.lock().unwrap().insert(
            AuthorId(id),
            Author {
                id: AuthorId(id),
                name: name.to_string(),
            },
        );
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthors {
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        self.lookups.enter(id.0).await?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }
}
