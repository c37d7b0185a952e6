//! Request and response contracts mirroring the backend JSON
//!
//! Field names follow the backend's camelCase. Every optional field is an
//! `Option` and decodes to `None` when absent; nothing else defaults
//! except empty collections and numeric aggregates.

pub mod timestamp;

mod auth;
mod banner;
mod cart;
mod catalog;
mod import_order;
mod page;
mod product;
mod promotion;
mod review;
mod user;

pub use auth::*;
pub use banner::*;
pub use cart::*;
pub use catalog::*;
pub use import_order::*;
pub use page::*;
pub use product::*;
pub use promotion::*;
pub use review::*;
pub use user::*;
