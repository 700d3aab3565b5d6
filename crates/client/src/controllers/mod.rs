//! Per-endpoint-family wrappers over [`ApiClient`](crate::ApiClient).
//!
//! Controllers borrow the client, so one client can back any number of
//! them in the same test.

mod brands;
mod products;
mod user;

pub use brands::{Brand, BrandsController, BrandsResponse};
pub use products::{
    Product, ProductCategory, ProductUserType, ProductsController, ProductsResponse,
};
pub use user::{UserController, UserDetail, UserDetailResponse};
