//! Brand, category and supplier commands

use serde::{de::DeserializeOwned, Serialize};
use storefront::services::ReferenceService;
use storefront::{BrandResponse, CategoryResponse, SupplierResponse, Validate};
use tabled::Tabled;

use crate::{output::OutputFormat, ReferenceCommands};

#[derive(Tabled)]
struct ReferenceRow {
    id: String,
    name: String,
    modified: String,
}

impl From<&BrandResponse> for ReferenceRow {
    fn from(b: &BrandResponse) -> Self {
        Self {
            id: b.id.clone(),
            name: b.name.clone(),
            modified: b.modified_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl From<&CategoryResponse> for ReferenceRow {
    fn from(c: &CategoryResponse) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            modified: c.modified_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl From<&SupplierResponse> for ReferenceRow {
    fn from(s: &SupplierResponse) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            modified: s.modified_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub async fn handle<T>(
    action: ReferenceCommands,
    service: &ReferenceService<T>,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    T: DeserializeOwned + Serialize + Validate,
    for<'a> ReferenceRow: From<&'a T>,
{
    tracing::debug!(resource = service.resource(), "reference command");
    match action {
        ReferenceCommands::List { page, size } => {
            let entries = service.list(super::page(page, size, None)).await?;
            format.print(&entries, |p| p.items.iter().map(ReferenceRow::from).collect());
        }
        ReferenceCommands::Get { id } => {
            let entry = service.get(&id).await?;
            format.print(&entry, |e| vec![ReferenceRow::from(e)]);
        }
        ReferenceCommands::Search { keyword } => {
            let entries = service.search(&keyword).await?;
            format.print(&entries, |es| es.iter().map(ReferenceRow::from).collect());
        }
    }
    Ok(())
}
