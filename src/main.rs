use anyhow::Context;
use clap::Parser;
use lending_context::adapters::file::load_fixture_stores;
use lending_context::config::StoreConfig;
use lending_context::domain::ports::{CaseParametersStore, CaseStore, ProductStore};
use lending_context::utils::{logger, validation::Validate};
use lending_context::{
    AccountAssignment, CaseInstance, CliConfig, ContextError, DataContextOfAction,
    DataContextResolver, RestStores,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lending-context");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        let store_config = match StoreConfig::from_file(&path) {
            Ok(store_config) => store_config,
            Err(e) => {
                tracing::error!("❌ Failed to load store config '{}': {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        };
        config.apply_store_config(&store_config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let assignments = read_assignments(&config)?;
    let instance = read_instance(&config)?;

    let result = if let Some(base_url) = config.base_url.clone() {
        tracing::info!("Using REST stores at {}", base_url);
        let stores = RestStores::new(base_url);
        resolve(
            DataContextResolver::new(stores.clone(), stores.clone(), stores),
            &config,
            instance.as_ref(),
            assignments,
        )
        .await
    } else {
        tracing::info!("Using fixture stores");
        let stores = load_fixture_stores(
            &config.products_file,
            &config.cases_file,
            &config.parameters_file,
        )
        .await
        .context("loading fixture stores")?;
        resolve(
            DataContextResolver::new(stores.clone(), stores.clone(), stores),
            &config,
            instance.as_ref(),
            assignments,
        )
        .await
    };

    match result {
        Ok(context) => {
            tracing::info!(
                "✅ Resolved data context for '{}'",
                context.compound_identifier()
            );
            println!("{}", serde_json::to_string_pretty(&context)?);
        }
        Err(e) => {
            tracing::error!("❌ Resolution failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(if e.is_not_found() { 2 } else { 1 });
        }
    }

    Ok(())
}

async fn resolve<P, C, Q>(
    resolver: DataContextResolver<P, C, Q>,
    config: &CliConfig,
    instance: Option<&CaseInstance>,
    assignments: Option<Vec<AccountAssignment>>,
) -> lending_context::Result<DataContextOfAction>
where
    P: ProductStore,
    C: CaseStore,
    Q: CaseParametersStore,
{
    match instance {
        Some(instance) => {
            resolver
                .resolve_for_instance(&config.product, instance, assignments)
                .await
        }
        None => {
            let case_identifier =
                config
                    .case
                    .as_deref()
                    .ok_or_else(|| ContextError::MissingConfig {
                        field: "case".to_string(),
                    })?;
            resolver
                .resolve_by_identifiers(&config.product, case_identifier, assignments)
                .await
        }
    }
}

fn read_assignments(config: &CliConfig) -> anyhow::Result<Option<Vec<AccountAssignment>>> {
    match &config.assignments_file {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading account assignments from '{}'", path))?;
            let assignments = serde_json::from_slice(&data)
                .with_context(|| format!("parsing account assignments from '{}'", path))?;
            Ok(Some(assignments))
        }
        None => Ok(None),
    }
}

fn read_instance(config: &CliConfig) -> anyhow::Result<Option<CaseInstance>> {
    match &config.instance_file {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading case instance from '{}'", path))?;
            let instance = serde_json::from_slice(&data)
                .with_context(|| format!("parsing case instance from '{}'", path))?;
            Ok(Some(instance))
        }
        None => Ok(None),
    }
}
