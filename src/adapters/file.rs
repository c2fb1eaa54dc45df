use crate::adapters::memory::InMemoryStores;
use crate::domain::model::{CaseParameters, CaseRecord, Product};
use crate::utils::error::Result;
use serde::Deserialize;
use std::fs;

/// A persisted parameters row as it appears in a fixture file; unlike the
/// in-flight shape, the owning case id is always present here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParametersRow {
    case_id: i64,
    parameters: CaseParameters,
}

/// Load three JSON fixture files into an in-memory store set.
pub async fn load_fixture_stores(
    products_path: &str,
    cases_path: &str,
    parameters_path: &str,
) -> Result<InMemoryStores> {
    let products: Vec<Product> = read_json(products_path)?;
    let cases: Vec<CaseRecord> = read_json(cases_path)?;
    let parameters: Vec<ParametersRow> = read_json(parameters_path)?;

    tracing::debug!(
        "Loaded fixtures: {} products, {} cases, {} parameter rows",
        products.len(),
        cases.len(),
        parameters.len()
    );

    let stores = InMemoryStores::new();
    for product in products {
        stores.put_product(product).await;
    }
    for case in cases {
        stores.put_case(case).await;
    }
    for row in parameters {
        stores.put_parameters(row.case_id, row.parameters).await;
    }

    Ok(stores)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let data = fs::read(path)?;
    let value = serde_json::from_slice(&data)?;
    Ok(value)
}
