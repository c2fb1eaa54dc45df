use crate::domain::model::{CaseParameters, CaseParametersRecord, CaseRecord, Product};
use crate::domain::ports::{CaseParametersStore, CaseStore, ProductStore};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory store set. Cloneable; clones share the same backing maps, so a
/// single seeded set can serve all three resolver slots. Doubles as the
/// substitutable fake in tests.
#[derive(Clone, Default, Debug)]
pub struct InMemoryStores {
    products: Arc<Mutex<HashMap<String, Product>>>,
    cases: Arc<Mutex<HashMap<(String, String), CaseRecord>>>,
    parameters: Arc<Mutex<HashMap<i64, CaseParametersRecord>>>,
}

impl InMemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_product(&self, product: Product) {
        let mut products = self.products.lock().await;
        products.insert(product.identifier.clone(), product);
    }

    pub async fn put_case(&self, case: CaseRecord) {
        let mut cases = self.cases.lock().await;
        cases.insert(
            (case.product_identifier.clone(), case.identifier.clone()),
            case,
        );
    }

    pub async fn put_parameters(&self, case_id: i64, parameters: CaseParameters) {
        let mut rows = self.parameters.lock().await;
        rows.insert(
            case_id,
            CaseParametersRecord {
                case_id: Some(case_id),
                parameters,
            },
        );
    }
}

#[async_trait]
impl ProductStore for InMemoryStores {
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Product>> {
        let products = self.products.lock().await;
        Ok(products.get(identifier).cloned())
    }
}

#[async_trait]
impl CaseStore for InMemoryStores {
    async fn find_by_product_and_case(
        &self,
        product_identifier: &str,
        case_identifier: &str,
    ) -> Result<Option<CaseRecord>> {
        let cases = self.cases.lock().await;
        Ok(cases
            .get(&(
                product_identifier.to_string(),
                case_identifier.to_string(),
            ))
            .cloned())
    }
}

#[async_trait]
impl CaseParametersStore for InMemoryStores {
    async fn find_by_case_id(&self, case_id: i64) -> Result<Option<CaseParametersRecord>> {
        let rows = self.parameters.lock().await;
        Ok(rows.get(&case_id).cloned())
    }
}
