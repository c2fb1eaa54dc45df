use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub identifier: String,
    pub name: String,
    pub currency_code: String,
    #[serde(default)]
    pub minor_currency_unit_digits: u32,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// Internal shape of a case. `id` is None until the case has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_identifier: String,
    pub identifier: String,
    pub current_state: String,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// External representation of a case as supplied with a request. The loan
/// parameters travel as a serialized JSON payload in `parameters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInstance {
    pub identifier: String,
    pub product_identifier: String,
    pub current_state: String,
    pub parameters: String,
    #[serde(default)]
    pub account_assignments: Vec<AccountAssignment>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemporalUnit {
    Days,
    Weeks,
    Months,
    Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRange {
    pub temporal_unit: TemporalUnit,
    pub maximum: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCycle {
    pub temporal_unit: TemporalUnit,
    pub period: u32,
    #[serde(default)]
    pub alignment_day: Option<u32>,
    #[serde(default)]
    pub alignment_week: Option<i32>,
    #[serde(default)]
    pub alignment_month: Option<u32>,
}

/// Loan-specific configuration attached to a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseParameters {
    pub customer_identifier: String,
    pub maximum_balance: Decimal,
    pub term_range: TermRange,
    pub payment_cycle: PaymentCycle,
}

/// Case parameters together with the id of the owning case. `case_id` is
/// None when the owning case has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseParametersRecord {
    #[serde(default)]
    pub case_id: Option<i64>,
    pub parameters: CaseParameters,
}

/// One-time override directing which ledger account a transaction type
/// posts to. Passed through verbatim, never validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAssignment {
    pub designator: String,
    pub account_identifier: String,
}

/// The resolved bundle every case action depends on. Whenever resolution
/// succeeds, product, case and parameters are present and mutually
/// consistent; no partial bundle is ever produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataContextOfAction {
    pub product: Product,
    pub case_record: CaseRecord,
    pub parameters_record: CaseParametersRecord,
    pub account_assignments: Option<Vec<AccountAssignment>>,
}

impl DataContextOfAction {
    pub fn compound_identifier(&self) -> String {
        format!(
            "{}.{}",
            self.product.identifier, self.case_record.identifier
        )
    }
}
