//! Storefront Rust SDK
//!
//! An async-first client for the storefront commerce REST API: catalog,
//! cart, promotions, reviews, and user/employee administration.
//!
//! The crate has three layers:
//!
//! - [`endpoints`]: the registry mapping every resource operation to its
//!   URL path, anchored to a configurable base URL.
//! - [`types`]: request/response contracts mirroring the backend JSON.
//! - [`Client`] and [`services`]: the HTTP transport and per-resource
//!   accessors built on the two above.
//!
//! # Example
//!
//! ```rust,no_run
//! use storefront::{Client, ClientConfig, PageParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::with_config(ClientConfig::from_env())?;
//!
//!     let page = client
//!         .products()
//!         .list(PageParams::new(1, 20))
//!         .await?;
//!
//!     for product in &page.items {
//!         println!("{} ({})", product.name, product.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod crawl;
pub mod endpoints;
pub mod error;
pub mod services;
pub mod types;
pub mod validate;

pub use client::Client;
pub use config::{resolve_base_url, ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use crawl::CrawlPolicy;
pub use endpoints::Endpoints;
pub use error::{Error, ErrorDetail, Result};
pub use types::*;
pub use validate::{ContractError, Validate};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
