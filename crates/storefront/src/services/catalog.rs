use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::endpoints::ReferencePaths;
use crate::types::{PageParams, PageResponse};
use crate::validate::Validate;
use crate::{Client, Result};

/// Brands, categories and suppliers share one path layout
pub struct ReferenceService<T> {
    client: Client,
    paths: ReferencePaths,
    _resource: PhantomData<fn() -> T>,
}

impl<T> ReferenceService<T>
where
    T: DeserializeOwned + Validate,
{
    pub(crate) fn new(client: Client, paths: ReferencePaths) -> Self {
        Self {
            client,
            paths,
            _resource: PhantomData,
        }
    }

    pub fn resource(&self) -> &'static str {
        self.paths.resource
    }

    pub async fn list(&self, params: PageParams) -> Result<PageResponse<T>> {
        self.client.get(self.paths.base, &params.to_query()).await
    }

    /// Every entry, unpaged
    pub async fn all(&self) -> Result<Vec<T>> {
        self.client.get(self.paths.all, &[]).await
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<T>> {
        self.client
            .get(self.paths.search, &[("keyword", keyword.to_string())])
            .await
    }

    pub async fn get(&self, id: &str) -> Result<T> {
        self.client.get(&self.paths.by_id(id), &[]).await
    }

    pub async fn create<B: Serialize>(&self, params: &B) -> Result<T> {
        self.client.post(self.paths.base, params).await
    }

    pub async fn update<B: Serialize>(&self, id: &str, params: &B) -> Result<T> {
        self.client.put(&self.paths.by_id(id), params).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&self.paths.by_id(id)).await
    }
}
