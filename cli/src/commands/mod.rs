//! CLI Commands

pub mod auth;
pub mod catalog;
pub mod config;
pub mod products;
pub mod promotions;
pub mod reviews;
pub mod site;
pub mod users;

use storefront::PageParams;

fn page(page: u32, size: u32, keyword: Option<String>) -> PageParams {
    let params = PageParams::new(page, size);
    match keyword {
        Some(keyword) => params.keyword(keyword),
        None => params,
    }
}
