use lending_context::adapters::file::load_fixture_stores;
use lending_context::{CaseInstance, ContextError, DataContextResolver};
use std::io::Write;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path.to_str().unwrap().to_string()
}

fn standard_fixtures(dir: &TempDir) -> (String, String, String) {
    let products = write_fixture(
        dir,
        "products.json",
        r#"[
            {"identifier": "consumer-loan", "name": "Consumer loan type A", "currencyCode": "USD", "minorCurrencyUnitDigits": 2, "enabled": true},
            {"identifier": "micro-loan", "name": "Micro loan", "currencyCode": "USD", "minorCurrencyUnitDigits": 2, "enabled": true}
        ]"#,
    );
    let cases = write_fixture(
        dir,
        "cases.json",
        r#"[
            {"id": 42, "productIdentifier": "consumer-loan", "identifier": "case-0001", "currentState": "ACTIVE", "createdBy": "fims"},
            {"id": 43, "productIdentifier": "consumer-loan", "identifier": "case-0002", "currentState": "CREATED"}
        ]"#,
    );
    let parameters = write_fixture(
        dir,
        "case_parameters.json",
        r#"[
            {"caseId": 42, "parameters": {
                "customerIdentifier": "customer-0001",
                "maximumBalance": "2000.00",
                "termRange": {"temporalUnit": "MONTHS", "maximum": 12},
                "paymentCycle": {"temporalUnit": "MONTHS", "period": 1, "alignmentDay": 1}
            }}
        ]"#,
    );
    (products, cases, parameters)
}

#[tokio::test]
async fn test_end_to_end_resolution_from_fixture_files() {
    let dir = TempDir::new().unwrap();
    let (products, cases, parameters) = standard_fixtures(&dir);

    let stores = load_fixture_stores(&products, &cases, &parameters)
        .await
        .unwrap();
    let resolver = DataContextResolver::new(stores.clone(), stores.clone(), stores);

    let context = resolver
        .resolve_by_identifiers("consumer-loan", "case-0001", None)
        .await
        .unwrap();

    assert_eq!(context.product.identifier, "consumer-loan");
    assert_eq!(context.case_record.identifier, "case-0001");
    assert_eq!(context.case_record.created_by.as_deref(), Some("fims"));
    assert_eq!(context.parameters_record.case_id, Some(42));
    assert_eq!(context.parameters_record.parameters.term_range.maximum, 12);
    assert_eq!(context.compound_identifier(), "consumer-loan.case-0001");
}

#[tokio::test]
async fn test_case_without_parameters_is_not_an_individual_loan() {
    let dir = TempDir::new().unwrap();
    let (products, cases, parameters) = standard_fixtures(&dir);

    let stores = load_fixture_stores(&products, &cases, &parameters)
        .await
        .unwrap();
    let resolver = DataContextResolver::new(stores.clone(), stores.clone(), stores);

    // case-0002 exists but no parameters row references id 43
    let err = resolver
        .resolve_by_identifiers("consumer-loan", "case-0002", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ContextError::ParametersNotFound { .. }));
}

#[tokio::test]
async fn test_unknown_case_is_reported_with_both_identifiers() {
    let dir = TempDir::new().unwrap();
    let (products, cases, parameters) = standard_fixtures(&dir);

    let stores = load_fixture_stores(&products, &cases, &parameters)
        .await
        .unwrap();
    let resolver = DataContextResolver::new(stores.clone(), stores.clone(), stores);

    let err = resolver
        .resolve_by_identifiers("consumer-loan", "case-missing", None)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Case not found 'consumer-loan.case-missing'"
    );
}

#[tokio::test]
async fn test_in_flight_instance_resolves_without_persisted_case() {
    let dir = TempDir::new().unwrap();
    let (products, cases, parameters) = standard_fixtures(&dir);

    let stores = load_fixture_stores(&products, &cases, &parameters)
        .await
        .unwrap();
    let resolver = DataContextResolver::new(stores.clone(), stores.clone(), stores);

    let instance: CaseInstance = serde_json::from_str(
        r#"{
            "identifier": "case-new",
            "productIdentifier": "micro-loan",
            "currentState": "CREATED",
            "parameters": "{\"customerIdentifier\": \"customer-0002\", \"maximumBalance\": \"500.00\", \"termRange\": {\"temporalUnit\": \"WEEKS\", \"maximum\": 26}, \"paymentCycle\": {\"temporalUnit\": \"WEEKS\", \"period\": 2}}"
        }"#,
    )
    .unwrap();

    let context = resolver
        .resolve_for_instance("micro-loan", &instance, None)
        .await
        .unwrap();

    assert_eq!(context.product.identifier, "micro-loan");
    assert_eq!(context.case_record.id, None);
    assert_eq!(context.parameters_record.case_id, None);
    assert_eq!(
        context.parameters_record.parameters.customer_identifier,
        "customer-0002"
    );
    assert_eq!(context.parameters_record.parameters.term_range.maximum, 26);
}
