// Products endpoints: listing, search, and the unsupported-method probe
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::response::ApiResponse;

/// One entry in the product catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub brand: String,
    pub category: ProductCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductCategory {
    pub usertype: ProductUserType,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductUserType {
    pub usertype: String,
}

/// Payload of `GET /productsList` and `POST /searchProduct`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    #[serde(rename = "responseCode", default)]
    pub response_code: u16,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Controller for the products endpoint family.
#[derive(Debug)]
pub struct ProductsController<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsController<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full product catalogue.
    pub async fn get_all_products(&self) -> ClientResult<ApiResponse> {
        debug!("fetching products list");
        self.client.get("/productsList", &[]).await
    }

    /// POST to the products list, which the API does not support; the
    /// body's `responseCode` should be 405.
    pub async fn post_to_products_list(&self) -> ClientResult<ApiResponse> {
        debug!("probing products list with POST");
        self.client.post_json("/productsList", &json!({})).await
    }

    /// Search the catalogue by product name, category, or brand.
    pub async fn search_product(&self, term: &str) -> ClientResult<ApiResponse> {
        debug!(term, "searching products");
        self.client
            .post_form("/searchProduct", &[("search_product", term.to_string())])
            .await
    }

    /// Search without the required parameter; the body's `responseCode`
    /// should be 400.
    pub async fn search_product_without_parameter(&self) -> ClientResult<ApiResponse> {
        debug!("probing product search without its parameter");
        self.client.post_form("/searchProduct", &[]).await
    }
}
