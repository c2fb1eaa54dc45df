use crate::core::mapper;
use crate::domain::model::{AccountAssignment, CaseInstance, DataContextOfAction};
use crate::domain::ports::{CaseParametersStore, CaseStore, ProductStore};
use crate::utils::error::{ContextError, Result};

/// Assembles the data context a case action depends on: the product
/// definition, the case and its loan parameters, plus any one-time account
/// assignments supplied with the action. Stateless; every call is an
/// independent read.
pub struct DataContextResolver<P, C, Q> {
    products: P,
    cases: C,
    parameters: Q,
}

impl<P, C, Q> DataContextResolver<P, C, Q>
where
    P: ProductStore,
    C: CaseStore,
    Q: CaseParametersStore,
{
    pub fn new(products: P, cases: C, parameters: Q) -> Self {
        Self {
            products,
            cases,
            parameters,
        }
    }

    /// Resolve the context for a persisted case. The product and case
    /// lookups carry no ordering dependency and run concurrently; the
    /// parameters lookup follows once the case's internal id is known.
    pub async fn resolve_by_identifiers(
        &self,
        product_identifier: &str,
        case_identifier: &str,
        account_assignments: Option<Vec<AccountAssignment>>,
    ) -> Result<DataContextOfAction> {
        tracing::debug!(
            "Resolving data context for '{}.{}'",
            product_identifier,
            case_identifier
        );

        let (product, case_record) = tokio::try_join!(
            self.products.find_by_identifier(product_identifier),
            self.cases
                .find_by_product_and_case(product_identifier, case_identifier),
        )?;

        let product = product.ok_or_else(|| ContextError::ProductNotFound {
            identifier: product_identifier.to_string(),
        })?;

        let case_record = case_record.ok_or_else(|| ContextError::CaseNotFound {
            product_identifier: product_identifier.to_string(),
            case_identifier: case_identifier.to_string(),
        })?;

        // A case without parameters exists but is not configured as an
        // individual loan; a case without an internal id cannot own a
        // persisted parameters row either way.
        let parameters_record = match case_record.id {
            Some(case_id) => self.parameters.find_by_case_id(case_id).await?,
            None => None,
        }
        .ok_or_else(|| ContextError::ParametersNotFound {
            product_identifier: product_identifier.to_string(),
            case_identifier: case_identifier.to_string(),
        })?;

        Ok(DataContextOfAction {
            product,
            case_record,
            parameters_record,
            account_assignments,
        })
    }

    /// Resolve the context for a case supplied with the request, typically
    /// one not yet committed. No case-store lookup happens; the instance is
    /// taken as given and its parameters come purely from the embedded
    /// payload, with no internal id assigned.
    pub async fn resolve_for_instance(
        &self,
        product_identifier: &str,
        instance: &CaseInstance,
        account_assignments: Option<Vec<AccountAssignment>>,
    ) -> Result<DataContextOfAction> {
        tracing::debug!(
            "Resolving data context for in-flight case '{}.{}'",
            product_identifier,
            instance.identifier
        );

        let product = self
            .products
            .find_by_identifier(product_identifier)
            .await?
            .ok_or_else(|| ContextError::ProductNotFound {
                identifier: product_identifier.to_string(),
            })?;

        let case_record = mapper::map_case_instance(instance);
        let parameters = mapper::deserialize_parameters(&instance.parameters)?;
        let parameters_record = mapper::map_parameters(None, parameters);

        Ok(DataContextOfAction {
            product,
            case_record,
            parameters_record,
            account_assignments,
        })
    }
}
