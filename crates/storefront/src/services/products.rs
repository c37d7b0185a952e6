use crate::endpoints::{product, product_version};
use crate::types::{
    PageParams, PageResponse, ProductRequest, ProductResponse, ProductVersionRequest,
    ProductVersionResponse,
};
use crate::{Client, Result};

pub struct ProductsService {
    client: Client,
}

impl ProductsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: PageParams) -> Result<PageResponse<ProductResponse>> {
        self.client.get(product::LIST, &params.to_query()).await
    }

    pub async fn get(&self, product_id: &str) -> Result<ProductResponse> {
        self.client.get(&product::by_id(product_id), &[]).await
    }

    pub async fn versions(&self, product_id: &str) -> Result<Vec<ProductVersionResponse>> {
        self.client.get(&product::versions(product_id), &[]).await
    }

    pub async fn create(&self, params: &ProductRequest) -> Result<ProductResponse> {
        self.client.post(product::BASE, params).await
    }

    pub async fn update(&self, product_id: &str, params: &ProductRequest) -> Result<ProductResponse> {
        self.client.put(&product::by_id(product_id), params).await
    }

    pub async fn delete(&self, product_id: &str) -> Result<()> {
        self.client.delete(&product::by_id(product_id)).await
    }
}

pub struct ProductVersionsService {
    client: Client,
}

impl ProductVersionsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, version_id: &str) -> Result<ProductVersionResponse> {
        self.client.get(&product_version::by_id(version_id), &[]).await
    }

    pub async fn create(&self, params: &ProductVersionRequest) -> Result<ProductVersionResponse> {
        self.client.post(product_version::BASE, params).await
    }

    pub async fn update(
        &self,
        version_id: &str,
        params: &ProductVersionRequest,
    ) -> Result<ProductVersionResponse> {
        self.client.put(&product_version::update(version_id), params).await
    }

    pub async fn delete(&self, version_id: &str) -> Result<()> {
        self.client.delete(&product_version::delete(version_id)).await
    }
}
