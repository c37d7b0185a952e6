//! Promotions commands

use storefront::{Client, PromotionResponse};
use tabled::Tabled;

use crate::{output::OutputFormat, PromotionCommands};

#[derive(Tabled)]
struct PromotionRow {
    id: String,
    name: String,
    discount: String,
    window: String,
    products: usize,
}

impl From<&PromotionResponse> for PromotionRow {
    fn from(p: &PromotionResponse) -> Self {
        let discount = match p.max_discount_amount {
            Some(cap) => format!("{}% (max {})", p.discount_percentage, cap),
            None => format!("{}%", p.discount_percentage),
        };
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            discount,
            window: format!(
                "{} → {}",
                p.start_date.format("%Y-%m-%d"),
                p.end_date.format("%Y-%m-%d")
            ),
            products: p.products.len(),
        }
    }
}

pub async fn handle(action: PromotionCommands, client: &Client, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        PromotionCommands::List { page, size } => {
            let promotions = client.promotions().list(super::page(page, size, None)).await?;
            format.print(&promotions, |p| p.items.iter().map(PromotionRow::from).collect());
        }
        PromotionCommands::Get { id } => {
            let promotion = client.promotions().get(&id).await?;
            format.print(&promotion, |p| vec![PromotionRow::from(p)]);
        }
    }
    Ok(())
}
