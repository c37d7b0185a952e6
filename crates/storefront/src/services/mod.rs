//! Per-resource accessors
//!
//! Each method issues exactly one request against one registry path.

mod auth;
mod cart;
mod catalog;
mod commerce;
mod products;
mod users;

pub use auth::AuthService;
pub use cart::CartService;
pub use catalog::ReferenceService;
pub use commerce::{BannersService, ImportOrdersService, PromotionsService, ReviewsService};
pub use products::{ProductVersionsService, ProductsService};
pub use users::{CustomersService, EmployeesService};
