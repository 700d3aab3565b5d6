// Brands endpoints: GET /brandsList, plus the unsupported-method probe
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::response::ApiResponse;

/// One entry in the brands list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub id: u32,
    pub brand: String,
}

/// Payload of `GET /brandsList`.
///
/// The upstream API answers HTTP 200 even for unsupported methods and
/// tunnels the real code in `responseCode`, so the field is modelled here
/// with a default for bodies that omit it.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandsResponse {
    #[serde(rename = "responseCode", default)]
    pub response_code: u16,
    #[serde(default)]
    pub brands: Vec<Brand>,
}

/// Controller for the brands endpoint family.
#[derive(Debug)]
pub struct BrandsController<'a> {
    client: &'a ApiClient,
}

impl<'a> BrandsController<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the full brands list.
    pub async fn get_all_brands(&self) -> ClientResult<ApiResponse> {
        debug!("fetching brands list");
        self.client.get("/brandsList", &[]).await
    }

    /// PUT to the brands list, which the API does not support; the body's
    /// `responseCode` should be 405.
    pub async fn put_to_brands_list(&self) -> ClientResult<ApiResponse> {
        debug!("probing brands list with PUT");
        self.client.put_json("/brandsList", &json!({})).await
    }
}
