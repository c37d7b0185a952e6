use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validate::{self, ContractError, Validate};

/// One line of a cart, pointing at a specific colour of a product version
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub id: String,
    pub product_color_version_id: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub quantity: u32,
    /// Unit price before discount
    pub price: Decimal,
    /// Line total after discount
    pub total_price: Decimal,
}

impl Validate for CartItemResponse {
    fn validate(&self) -> Result<(), ContractError> {
        validate::non_negative("cartItem", "price", self.price)?;
        validate::non_negative("cartItem", "totalPrice", self.total_price)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub count: u32,
    pub total_price: Decimal,
    #[serde(default)]
    pub items: Vec<CartItemResponse>,
}

impl Validate for CartResponse {
    fn validate(&self) -> Result<(), ContractError> {
        validate::non_negative("cart", "totalPrice", self.total_price)?;
        let quantity: u64 = self.items.iter().map(|item| u64::from(item.quantity)).sum();
        if u64::from(self.count) != quantity {
            return Err(ContractError::new(
                "cart",
                "count",
                format!("count {} does not match item quantities {quantity}", self.count),
            ));
        }
        self.items.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemRequest {
    pub product_color_version_id: String,
    pub quantity: u32,
}

impl CartItemRequest {
    pub fn new(product_color_version_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_color_version_id: product_color_version_id.into(),
            quantity,
        }
    }
}
