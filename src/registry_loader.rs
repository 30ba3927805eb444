use crate::errors::AppError;
use crate::model_registry::{CameraModelEntry, Credentials, ModelRegistry, IP_PLACEHOLDER};
use log::{debug, info};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;

#[derive(Debug, Deserialize)]
pub struct RegistryFile {
    pub models: Vec<ModelEntryConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelEntryConfig {
    pub model: String,
    pub url_template: String,
    pub credentials: Credentials,
}

pub fn load_registry(path: &str) -> Result<ModelRegistry, AppError> {
    debug!("Attempting to load model registry from: {}", path);
    let registry_str = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("Failed to read registry file '{}': {}", path, e)))?;

    let registry_file: RegistryFile = serde_yaml::from_str(&registry_str)
        .map_err(|e| AppError::Config(format!("Failed to parse YAML registry from '{}': {}", path, e)))?;

    validate_registry_file(&registry_file)?;

    let mut models = HashMap::new();
    for entry in registry_file.models {
        models.insert(
            entry.model,
            CameraModelEntry {
                url_template: entry.url_template,
                credentials: entry.credentials,
            },
        );
    }

    info!("✅ Loaded {} camera models from '{}'", models.len(), path);
    Ok(ModelRegistry::from_map(models))
}

fn validate_registry_file(file: &RegistryFile) -> Result<(), AppError> {
    if file.models.is_empty() {
        return Err(AppError::Config("No camera models defined in the registry file.".to_string()));
    }

    let mut model_ids = HashSet::new();
    for entry in &file.models {
        if entry.model.is_empty() {
            return Err(AppError::Config("Model identifier cannot be empty.".to_string()));
        }
        if !model_ids.insert(&entry.model) {
            return Err(AppError::Config(format!("Duplicate model identifier found: {}", entry.model)));
        }
        if entry.url_template.is_empty() {
            return Err(AppError::Config(format!("URL template for model '{}' cannot be empty.", entry.model)));
        }
        if entry.url_template.matches(IP_PLACEHOLDER).count() != 1 {
            return Err(AppError::Config(format!(
                "URL template for model '{}' must contain the '{}' placeholder exactly once.",
                entry.model, IP_PLACEHOLDER
            )));
        }
        if entry.credentials.username.is_empty() {
            return Err(AppError::Config(format!("Username for model '{}' cannot be empty.", entry.model)));
        }
        // Password may be empty; some cameras ship with a blank password.
    }
    Ok(())
}
