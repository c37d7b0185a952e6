use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::validate::{self, ContractError, Validate};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Rating and inventory aggregates maintained by the backend
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetrics {
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_rating: u64,
    #[serde(default)]
    pub total_sold: u64,
    #[serde(default)]
    pub total_stock: u64,
}

impl ProductMetrics {
    fn check(&self, resource: &'static str) -> Result<(), ContractError> {
        if !(0.0..=5.0).contains(&self.average_rating) {
            return Err(ContractError::new(
                resource,
                "averageRating",
                format!("must be within 0..=5, got {}", self.average_rating),
            ));
        }
        if self.total_rating == 0 && self.average_rating != 0.0 {
            return Err(ContractError::new(
                resource,
                "averageRating",
                "non-zero average with no ratings",
            ));
        }
        Ok(())
    }
}

fn check_images(resource: &'static str, images: &[ProductImage]) -> Result<(), ContractError> {
    if images.iter().filter(|image| image.is_default).count() > 1 {
        return Err(ContractError::new(resource, "images", "more than one default image"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    /// Warranty in months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_period: Option<u32>,
    #[serde(flatten)]
    pub metrics: ProductMetrics,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub modified_at: DateTime<Utc>,
}

impl ProductResponse {
    pub fn default_image(&self) -> Option<&ProductImage> {
        self.images
            .iter()
            .find(|image| image.is_default)
            .or_else(|| self.images.first())
    }
}

impl Validate for ProductResponse {
    fn validate(&self) -> Result<(), ContractError> {
        self.metrics.check("product")?;
        check_images("product", &self.images)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
}

/// One purchasable colour of a product version
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductColorVersion {
    pub id: String,
    pub color: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVersionResponse {
    pub id: String,
    pub product_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty_period: Option<u32>,
    #[serde(flatten)]
    pub metrics: ProductMetrics,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub colors: Vec<ProductColorVersion>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub modified_at: DateTime<Utc>,
}

impl Validate for ProductVersionResponse {
    fn validate(&self) -> Result<(), ContractError> {
        self.metrics.check("productVersion")?;
        check_images("productVersion", &self.images)?;
        self.colors
            .iter()
            .try_for_each(|color| validate::non_negative("productVersion", "colors.price", color.price))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductColorRequest {
    pub color: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVersionRequest {
    pub product_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_period: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<ProductColorRequest>,
}
