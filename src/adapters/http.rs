use crate::domain::model::{CaseParametersRecord, CaseRecord, Product};
use crate::domain::ports::{CaseParametersStore, CaseStore, ProductStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Store set backed by the portfolio REST surface. A 404 is an authoritative
/// miss and maps to None; any other non-success status propagates as a store
/// failure.
#[derive(Debug, Clone)]
pub struct RestStores {
    base_url: String,
    client: Client,
}

impl RestStores {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Store request: GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status()?;
        let value = response.json().await?;
        Ok(Some(value))
    }
}

#[async_trait]
impl ProductStore for RestStores {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Product>> {
        self.get_optional(&format!("/products/{}", identifier)).await
    }
}

#[async_trait]
impl CaseStore for RestStores {
    async fn find_by_product_and_case(
        &self,
        product_identifier: &str,
        case_identifier: &str,
    ) -> Result<Option<CaseRecord>> {
        self.get_optional(&format!(
            "/products/{}/cases/{}",
            product_identifier, case_identifier
        ))
        .await
    }
}

#[async_trait]
impl CaseParametersStore for RestStores {
    async fn find_by_case_id(&self, case_id: i64) -> Result<Option<CaseParametersRecord>> {
        self.get_optional(&format!("/cases/{}/parameters", case_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ContextError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_find_product_deserializes_response() {
        let server = MockServer::start();
        let product_mock = server.mock(|when, then| {
            when.method(GET).path("/products/consumer-loan");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "identifier": "consumer-loan",
                    "name": "Consumer loan",
                    "currencyCode": "USD",
                    "minorCurrencyUnitDigits": 2,
                    "enabled": true
                }));
        });

        let stores = RestStores::new(server.url(""));
        let product = stores
            .find_by_identifier("consumer-loan")
            .await
            .unwrap()
            .unwrap();

        product_mock.assert();
        assert_eq!(product.identifier, "consumer-loan");
        assert_eq!(product.currency_code, "USD");
    }

    #[tokio::test]
    async fn test_not_found_status_maps_to_none() {
        let server = MockServer::start();
        let miss_mock = server.mock(|when, then| {
            when.method(GET).path("/products/absent");
            then.status(404);
        });

        let stores = RestStores::new(server.url(""));
        let product = stores.find_by_identifier("absent").await.unwrap();

        miss_mock.assert();
        assert!(product.is_none());
    }

    #[tokio::test]
    async fn test_server_failure_is_a_store_error() {
        let server = MockServer::start();
        let failure_mock = server.mock(|when, then| {
            when.method(GET).path("/cases/42/parameters");
            then.status(500);
        });

        let stores = RestStores::new(server.url(""));
        let err = stores.find_by_case_id(42).await.unwrap_err();

        failure_mock.assert();
        assert!(matches!(err, ContextError::Store(_)));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_case_lookup_hits_the_compound_path() {
        let server = MockServer::start();
        let case_mock = server.mock(|when, then| {
            when.method(GET).path("/products/consumer-loan/cases/case-0001");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 42,
                    "productIdentifier": "consumer-loan",
                    "identifier": "case-0001",
                    "currentState": "ACTIVE"
                }));
        });

        let stores = RestStores::new(server.url(""));
        let case = stores
            .find_by_product_and_case("consumer-loan", "case-0001")
            .await
            .unwrap()
            .unwrap();

        case_mock.assert();
        assert_eq!(case.id, Some(42));
        assert_eq!(case.current_state, "ACTIVE");
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/products/x");
            then.status(404);
        });

        let stores = RestStores::new(server.url("/"));
        let product = stores.find_by_identifier("x").await.unwrap();

        mock.assert();
        assert!(product.is_none());
    }
}
