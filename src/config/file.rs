use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::fs;

/// Store-set configuration loaded from a TOML file. Either a REST base URL
/// or the three fixture file paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub stores: StoreSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSet {
    pub products_file: Option<String>,
    pub cases_file: Option<String>,
    pub parameters_file: Option<String>,
    pub base_url: Option<String>,
}

impl StoreConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.stores.base_url {
            return validation::validate_url("stores.base_url", base_url);
        }

        let products =
            validation::validate_required_field("stores.products_file", &self.stores.products_file)?;
        let cases = validation::validate_required_field("stores.cases_file", &self.stores.cases_file)?;
        let parameters = validation::validate_required_field(
            "stores.parameters_file",
            &self.stores.parameters_file,
        )?;

        for (field, path) in [
            ("stores.products_file", products),
            ("stores.cases_file", cases),
            ("stores.parameters_file", parameters),
        ] {
            validation::validate_path(field, path)?;
            validation::validate_file_extension(field, path, &["json"])?;
        }

        Ok(())
    }
}
