//! Canned route sets for the AutomationExercise API surface.
//!
//! Each function returns routes ready to feed into
//! [`RouteRegistry::add_routes`](crate::mock::RouteRegistry::add_routes);
//! pattern matchers tolerate any host prefix.

use std::time::Duration;

use serde_json::json;

use crate::error::HarnessResult;
use crate::mock::route::{MockMethod, MockRoute, UrlMatcher};

/// Mocks for the user account endpoints.
pub fn user_api_routes() -> HarnessResult<Vec<MockRoute>> {
    Ok(vec![
        MockRoute::new(
            MockMethod::Post,
            UrlMatcher::pattern(r".*/verifyLogin")?,
            200,
            json!({"responseCode": 200, "message": "User exists!"}),
        ),
        MockRoute::new(
            MockMethod::Post,
            UrlMatcher::pattern(r".*/createAccount")?,
            201,
            json!({"responseCode": 201, "message": "User created!"}),
        ),
        MockRoute::new(
            MockMethod::Delete,
            UrlMatcher::pattern(r".*/deleteAccount")?,
            200,
            json!({"responseCode": 200, "message": "Account deleted!"}),
        ),
        MockRoute::new(
            MockMethod::Get,
            UrlMatcher::pattern(r".*/getUserDetailByEmail")?,
            200,
            json!({
                "responseCode": 200,
                "user": {
                    "id": 1,
                    "name": "Test User",
                    "email": "test@example.com",
                    "title": "Mr",
                    "birth_date": "15",
                    "birth_month": "January",
                    "birth_year": "1990",
                    "firstname": "Test",
                    "lastname": "User",
                    "company": "Test Company",
                    "address1": "123 Test St",
                    "address2": "Apt 1",
                    "country": "United States",
                    "zipcode": "12345",
                    "state": "CA",
                    "city": "Test City",
                    "mobile_number": "+1234567890"
                }
            }),
        ),
    ])
}

/// Mocks for the product listing endpoints.
pub fn product_api_routes() -> HarnessResult<Vec<MockRoute>> {
    Ok(vec![
        MockRoute::new(
            MockMethod::Get,
            UrlMatcher::pattern(r".*/productsList")?,
            200,
            json!({
                "responseCode": 200,
                "products": [
                    {
                        "id": 1,
                        "name": "Blue Top",
                        "price": "Rs. 500",
                        "brand": "Polo",
                        "category": {
                            "usertype": {"usertype": "Women"},
                            "category": "Tops"
                        }
                    },
                    {
                        "id": 2,
                        "name": "Men Tshirt",
                        "price": "Rs. 400",
                        "brand": "H&M",
                        "category": {
                            "usertype": {"usertype": "Men"},
                            "category": "Tshirts"
                        }
                    }
                ]
            }),
        ),
        MockRoute::new(
            MockMethod::Get,
            UrlMatcher::pattern(r".*/productDetail")?,
            200,
            json!({
                "responseCode": 200,
                "product": {
                    "id": 1,
                    "name": "Blue Top",
                    "price": "Rs. 500",
                    "brand": "Polo",
                    "category": {
                        "usertype": {"usertype": "Women"},
                        "category": "Tops"
                    }
                }
            }),
        ),
    ])
}

/// Mock for the brands listing endpoint.
pub fn brand_api_routes() -> HarnessResult<Vec<MockRoute>> {
    Ok(vec![MockRoute::new(
        MockMethod::Get,
        UrlMatcher::pattern(r".*/brandsList")?,
        200,
        json!({
            "responseCode": 200,
            "brands": [
                {"id": 1, "brand": "Polo"},
                {"id": 2, "brand": "H&M"},
                {"id": 3, "brand": "Madame"},
                {"id": 4, "brand": "Mast & Harbour"},
                {"id": 5, "brand": "Babyhug"},
                {"id": 6, "brand": "Allen Solly Junior"},
                {"id": 7, "brand": "Kookie Kids"},
                {"id": 8, "brand": "Biba"}
            ]
        }),
    )])
}

/// Failure-simulation mocks: slow timeout, server error, missing resource.
pub fn network_error_routes() -> HarnessResult<Vec<MockRoute>> {
    Ok(vec![
        MockRoute::new(
            MockMethod::Get,
            UrlMatcher::pattern(r".*/timeout")?,
            408,
            json!({"error": "Request timeout"}),
        )
        .with_delay(Duration::from_millis(5000)),
        MockRoute::new(
            MockMethod::Get,
            UrlMatcher::pattern(r".*/server-error")?,
            500,
            json!({"error": "Internal server error"}),
        ),
        MockRoute::new(
            MockMethod::Get,
            UrlMatcher::pattern(r".*/not-found")?,
            404,
            json!({"error": "Not found"}),
        ),
    ])
}
