use crate::endpoints::cart;
use crate::types::{CartItemRequest, CartResponse};
use crate::{Client, Result};

/// The signed-in customer's cart
pub struct CartService {
    client: Client,
}

impl CartService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<CartResponse> {
        self.client.get(cart::BASE, &[]).await
    }

    pub async fn add_item(&self, params: &CartItemRequest) -> Result<CartResponse> {
        self.client.post(cart::BASE, params).await
    }

    pub async fn update_item(&self, item_id: &str, quantity: u32) -> Result<CartResponse> {
        #[derive(serde::Serialize)]
        struct QuantityParams {
            quantity: u32,
        }

        self.client
            .put(&cart::item(item_id), &QuantityParams { quantity })
            .await
    }

    pub async fn remove_item(&self, item_id: &str) -> Result<()> {
        self.client.delete(&cart::item(item_id)).await
    }
}
