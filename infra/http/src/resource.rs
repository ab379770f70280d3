use crate::client::ApiClient;
use crate::error::ApiError;
use gymhub_domain::Resource;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use tracing::info;

/// Query string of the search endpoint.
#[derive(Debug, Serialize)]
struct SearchQuery<'a> {
    termino: &'a str,
}

/// Generic CRUD access to one [`Resource`] collection.
pub struct Collection<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone(), _resource: PhantomData }
    }
}

impl<R: Resource> fmt::Debug for Collection<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection").field("path", &R::PATH).finish_non_exhaustive()
    }
}

impl<R: Resource> Collection<R> {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api, _resource: PhantomData }
    }

    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// `{PATH}/{segments...}`
    #[must_use]
    pub fn path(segments: &[&str]) -> String {
        let mut path = R::PATH.to_owned();
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.api.get(R::PATH).await
    }

    pub async fn get(&self, key: &str) -> Result<R, ApiError> {
        self.api.get(&Self::path(&[key])).await
    }

    pub async fn create(&self, record: &R) -> Result<R, ApiError> {
        let created: R = self.api.post(R::PATH, record).await?;
        info!(resource = R::NAME, key = ?created.key(), "Created");
        Ok(created)
    }

    pub async fn update(&self, key: &str, record: &R) -> Result<R, ApiError> {
        let updated = self.api.put(&Self::path(&[key]), record).await?;
        info!(resource = R::NAME, key, "Updated");
        Ok(updated)
    }

    pub async fn delete(&self, key: &str) -> Result<(), ApiError> {
        self.api.delete(&Self::path(&[key])).await?;
        info!(resource = R::NAME, key, "Deleted");
        Ok(())
    }

    /// Server-side search; a blank term lists the whole collection.
    pub async fn search(&self, term: &str) -> Result<Vec<R>, ApiError> {
        let term = term.trim();
        if term.is_empty() {
            return self.list().await;
        }
        self.api.get_query(&Self::path(&["buscar"]), &SearchQuery { termino: term }).await
    }

    /// Every key currently in the collection, for folio generation.
    pub async fn keys(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.list().await?.iter().filter_map(Resource::key).collect())
    }
}
