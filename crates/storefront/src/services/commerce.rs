use crate::endpoints::{banner, import_order, promotion, review};
use crate::types::{
    BannerRequest, BannerResponse, ImportOrderRequest, ImportOrderResponse, PageParams,
    PageResponse, ProductImportSelect, PromotionRequest, PromotionResponse, ReviewRequest,
    ReviewResponse, ReviewStatistics,
};
use crate::validate::Validate;
use crate::{Client, Result};

pub struct PromotionsService {
    client: Client,
}

impl PromotionsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: PageParams) -> Result<PageResponse<PromotionResponse>> {
        self.client.get(promotion::BASE, &params.to_query()).await
    }

    pub async fn get(&self, promotion_id: &str) -> Result<PromotionResponse> {
        self.client.get(&promotion::by_id(promotion_id), &[]).await
    }

    pub async fn create(&self, params: &PromotionRequest) -> Result<PromotionResponse> {
        self.client.post(promotion::BASE, params).await
    }

    pub async fn update(
        &self,
        promotion_id: &str,
        params: &PromotionRequest,
    ) -> Result<PromotionResponse> {
        self.client.put(&promotion::by_id(promotion_id), params).await
    }

    pub async fn delete(&self, promotion_id: &str) -> Result<()> {
        self.client.delete(&promotion::by_id(promotion_id)).await
    }
}

pub struct ReviewsService {
    client: Client,
}

impl ReviewsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        product_version_id: &str,
        params: PageParams,
    ) -> Result<PageResponse<ReviewResponse>> {
        self.client
            .get(&review::by_product_version(product_version_id), &params.to_query())
            .await
    }

    pub async fn statistics(&self, product_version_id: &str) -> Result<ReviewStatistics> {
        self.client
            .get(&review::statistics(product_version_id), &[])
            .await
    }

    /// Submit a review; the rating is checked before anything is sent
    pub async fn create(&self, params: &ReviewRequest) -> Result<ReviewResponse> {
        params.validate()?;
        self.client.post(review::BASE, params).await
    }
}

pub struct BannersService {
    client: Client,
}

impl BannersService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<BannerResponse>> {
        self.client.get(banner::BASE, &[]).await
    }

    pub async fn create(&self, params: &BannerRequest) -> Result<BannerResponse> {
        self.client.post(banner::BASE, params).await
    }

    pub async fn update(&self, banner_id: &str, params: &BannerRequest) -> Result<BannerResponse> {
        self.client.put(&banner::by_id(banner_id), params).await
    }

    pub async fn delete(&self, banner_id: &str) -> Result<()> {
        self.client.delete(&banner::by_id(banner_id)).await
    }
}

pub struct ImportOrdersService {
    client: Client,
}

impl ImportOrdersService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: PageParams) -> Result<PageResponse<ImportOrderResponse>> {
        self.client.get(import_order::BASE, &params.to_query()).await
    }

    pub async fn create(&self, params: &ImportOrderRequest) -> Result<ImportOrderResponse> {
        self.client.post(import_order::BASE, params).await
    }

    /// Products that can be added to an import order
    pub async fn product_import_select(&self) -> Result<Vec<ProductImportSelect>> {
        self.client
            .get(import_order::PRODUCT_IMPORT_SELECT, &[])
            .await
    }
}
