// Account endpoints: login verification and account lifecycle
use serde::Deserialize;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{Credentials, TestUser};
use crate::response::ApiResponse;

/// Account details returned by `GET /getUserDetailByEmail`.
///
/// The upstream API is inconsistent about name and birth-field casing
/// across endpoints, so the snake_case spellings are accepted as aliases.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetail {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "birth_date")]
    pub birth_day: String,
    #[serde(default)]
    pub birth_month: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default, alias = "first_name")]
    pub firstname: String,
    #[serde(default, alias = "last_name")]
    pub lastname: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub address2: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDetailResponse {
    #[serde(rename = "responseCode", default)]
    pub response_code: u16,
    pub user: UserDetail,
}

/// Controller for the account endpoint family.
#[derive(Debug)]
pub struct UserController<'a> {
    client: &'a ApiClient,
}

impl<'a> UserController<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Check a credentials pair against `POST /verifyLogin`. The pair is
    /// validated locally first; a malformed one never reaches the wire.
    pub async fn verify_login(&self, credentials: &Credentials) -> ClientResult<ApiResponse> {
        credentials.validate()?;
        debug!(email = %credentials.email, "verifying login");
        self.client
            .post_form(
                "/verifyLogin",
                &[
                    ("email", credentials.email.clone()),
                    ("password", credentials.password.clone()),
                ],
            )
            .await
    }

    /// Verify login with the email field missing; the body's
    /// `responseCode` should be 400.
    pub async fn verify_login_without_email(&self, password: &str) -> ClientResult<ApiResponse> {
        debug!("probing login verification without an email");
        self.client
            .post_form("/verifyLogin", &[("password", password.to_string())])
            .await
    }

    /// DELETE against the login endpoint, which the API does not support;
    /// the body's `responseCode` should be 405.
    pub async fn delete_verify_login(&self) -> ClientResult<ApiResponse> {
        debug!("probing login verification with DELETE");
        self.client.delete_form("/verifyLogin", &[]).await
    }

    /// Register a new account via `POST /createAccount`. The payload is
    /// validated locally first; a malformed one never reaches the wire.
    pub async fn create_account(&self, user: &TestUser) -> ClientResult<ApiResponse> {
        user.validate()?;
        debug!(email = %user.email, "creating account");
        self.client.post_form("/createAccount", &user.to_form()).await
    }

    /// Delete an account via `DELETE /deleteAccount`.
    pub async fn delete_account(&self, credentials: &Credentials) -> ClientResult<ApiResponse> {
        debug!(email = %credentials.email, "deleting account");
        self.client
            .delete_form(
                "/deleteAccount",
                &[
                    ("email", credentials.email.clone()),
                    ("password", credentials.password.clone()),
                ],
            )
            .await
    }

    /// Update an account via `PUT /updateAccount`. The payload is
    /// validated like [`create_account`](Self::create_account).
    pub async fn update_account(&self, user: &TestUser) -> ClientResult<ApiResponse> {
        user.validate()?;
        debug!(email = %user.email, "updating account");
        self.client.put_form("/updateAccount", &user.to_form()).await
    }

    /// Look an account up by email via `GET /getUserDetailByEmail`.
    pub async fn get_user_detail_by_email(&self, email: &str) -> ClientResult<ApiResponse> {
        debug!(email, "fetching account details");
        self.client.get("/getUserDetailByEmail", &[("email", email)]).await
    }
}
