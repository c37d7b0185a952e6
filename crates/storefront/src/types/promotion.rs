use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::validate::{self, ContractError, Validate};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PromotionProduct {
    pub id: String,
    pub name: String,
}

/// Time-bounded percentage discount over a set of products
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionResponse {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_percentage: Decimal,
    /// Cap on the discount per order line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<Decimal>,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub products: Vec<PromotionProduct>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub modified_at: DateTime<Utc>,
}

impl PromotionResponse {
    pub fn is_running_at(&self, at: DateTime<Utc>) -> bool {
        self.start_date <= at && at <= self.end_date
    }
}

impl Validate for PromotionResponse {
    fn validate(&self) -> Result<(), ContractError> {
        validate::percentage("promotion", "discountPercentage", self.discount_percentage)?;
        if let Some(cap) = self.max_discount_amount {
            validate::non_negative("promotion", "maxDiscountAmount", cap)?;
        }
        if self.end_date < self.start_date {
            return Err(ContractError::new("promotion", "endDate", "ends before it starts"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_percentage: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<Decimal>,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<Utc>,
    pub product_ids: Vec<String>,
}
