//! Stock intake from suppliers

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::validate::{self, ContractError, Validate};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOrderItemRequest {
    pub product_color_version_id: String,
    pub quantity: u32,
    pub import_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOrderRequest {
    pub supplier_id: String,
    pub items: Vec<ImportOrderItemRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOrderItemResponse {
    pub product_color_version_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub import_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportOrderResponse {
    pub id: String,
    pub supplier_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub total_price: Decimal,
    #[serde(default)]
    pub items: Vec<ImportOrderItemResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Validate for ImportOrderResponse {
    fn validate(&self) -> Result<(), ContractError> {
        validate::non_negative("importOrder", "totalPrice", self.total_price)?;
        self.items.iter().try_for_each(|item| {
            validate::non_negative("importOrder", "items.importPrice", item.import_price)
        })
    }
}

/// Product choice offered when building an import order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImportSelect {
    pub product_color_version_id: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Validate for ProductImportSelect {}
