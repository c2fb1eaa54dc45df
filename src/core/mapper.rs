use crate::domain::model::{CaseInstance, CaseParameters, CaseParametersRecord, CaseRecord};
use crate::utils::error::Result;

/// Map a request-supplied case into the internal shape. Pure mapping, no
/// store lookup; the internal id stays unassigned.
pub fn map_case_instance(instance: &CaseInstance) -> CaseRecord {
    CaseRecord {
        id: None,
        product_identifier: instance.product_identifier.clone(),
        identifier: instance.identifier.clone(),
        current_state: instance.current_state.clone(),
        created_on: instance.created_on,
        created_by: instance.created_by.clone(),
    }
}

/// Deserialize a case's embedded parameters payload. A malformed payload is
/// a data-integrity defect and surfaces as `ContextError::MalformedPayload`,
/// never as a not-found.
pub fn deserialize_parameters(payload: &str) -> Result<CaseParameters> {
    let parameters = serde_json::from_str(payload)?;
    Ok(parameters)
}

pub fn map_parameters(case_id: Option<i64>, parameters: CaseParameters) -> CaseParametersRecord {
    CaseParametersRecord {
        case_id,
        parameters,
    }
}
