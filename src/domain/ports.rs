use crate::domain::model::{CaseParametersRecord, CaseRecord, Product};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Product>>;
}

#[async_trait]
pub trait CaseStore: Send + Sync {
    async fn find_by_product_and_case(
        &self,
        product_identifier: &str,
        case_identifier: &str,
    ) -> Result<Option<CaseRecord>>;
}

#[async_trait]
pub trait CaseParametersStore: Send + Sync {
    async fn find_by_case_id(&self, case_id: i64) -> Result<Option<CaseParametersRecord>>;
}
