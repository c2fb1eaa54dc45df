use crate::config::file::StoreConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "lending-context")]
#[command(about = "Resolve the data context for an individual-lending case action")]
pub struct CliConfig {
    /// Identifier of the product the case belongs to
    #[arg(long)]
    pub product: String,

    /// Identifier of the case under the product
    #[arg(long, required_unless_present = "instance_file")]
    pub case: Option<String>,

    #[arg(long, default_value = "./fixtures/products.json")]
    pub products_file: String,

    #[arg(long, default_value = "./fixtures/cases.json")]
    pub cases_file: String,

    #[arg(long, default_value = "./fixtures/case_parameters.json")]
    pub parameters_file: String,

    /// Resolve against a REST store set instead of fixture files
    #[arg(long)]
    pub base_url: Option<String>,

    /// TOML file describing the store set; overrides the flags above
    #[arg(long)]
    pub config: Option<String>,

    /// JSON file with one-time account assignments to pass through
    #[arg(long)]
    pub assignments_file: Option<String>,

    /// JSON file with an in-flight case instance; resolves against the
    /// instance instead of a persisted case
    #[arg(long)]
    pub instance_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn apply_store_config(&mut self, store_config: &StoreConfig) {
        if let Some(base_url) = &store_config.stores.base_url {
            self.base_url = Some(base_url.clone());
            return;
        }
        if let Some(products_file) = &store_config.stores.products_file {
            self.products_file = products_file.clone();
        }
        if let Some(cases_file) = &store_config.stores.cases_file {
            self.cases_file = cases_file.clone();
        }
        if let Some(parameters_file) = &store_config.stores.parameters_file {
            self.parameters_file = parameters_file.clone();
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("product", &self.product)?;
        if let Some(case) = &self.case {
            validation::validate_non_empty_string("case", case)?;
        }

        if let Some(base_url) = &self.base_url {
            validation::validate_url("base_url", base_url)?;
        } else {
            for (field, path) in [
                ("products_file", &self.products_file),
                ("cases_file", &self.cases_file),
                ("parameters_file", &self.parameters_file),
            ] {
                validation::validate_path(field, path)?;
                validation::validate_file_extension(field, path, &["json"])?;
            }
        }

        if let Some(assignments_file) = &self.assignments_file {
            validation::validate_file_extension("assignments_file", assignments_file, &["json"])?;
        }
        if let Some(instance_file) = &self.instance_file {
            validation::validate_file_extension("instance_file", instance_file, &["json"])?;
        }

        Ok(())
    }
}
