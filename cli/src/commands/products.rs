//! Products commands

use storefront::{Client, ProductResponse, ProductVersionResponse};
use tabled::Tabled;

use crate::{output::OutputFormat, ProductCommands};

#[derive(Tabled)]
struct ProductRow {
    id: String,
    name: String,
    slug: String,
    rating: String,
    sold: u64,
    stock: u64,
}

impl From<&ProductResponse> for ProductRow {
    fn from(p: &ProductResponse) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            slug: p.slug.clone(),
            rating: format!("{:.1} ({})", p.metrics.average_rating, p.metrics.total_rating),
            sold: p.metrics.total_sold,
            stock: p.metrics.total_stock,
        }
    }
}

#[derive(Tabled)]
struct VersionRow {
    id: String,
    name: String,
    colors: String,
    stock: u64,
}

impl From<&ProductVersionResponse> for VersionRow {
    fn from(v: &ProductVersionResponse) -> Self {
        let colors = v
            .colors
            .iter()
            .map(|c| format!("{} {}", c.color, c.price))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: v.id.clone(),
            name: v.name.clone(),
            colors,
            stock: v.metrics.total_stock,
        }
    }
}

pub async fn handle(action: ProductCommands, client: &Client, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        ProductCommands::List { page, size, keyword } => {
            let products = client.products().list(super::page(page, size, keyword)).await?;
            format.print(&products, |p| p.items.iter().map(ProductRow::from).collect());
            if format == OutputFormat::Table {
                println!("page {}/{}", products.page_no, products.total_page);
            }
        }
        ProductCommands::Get { id } => {
            let product = client.products().get(&id).await?;
            format.print(&product, |p| vec![ProductRow::from(p)]);
        }
        ProductCommands::Versions { id } => {
            let versions = client.products().versions(&id).await?;
            format.print(&versions, |vs| vs.iter().map(VersionRow::from).collect());
        }
    }
    Ok(())
}
