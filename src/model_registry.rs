use crate::errors::AppError;
use serde::Deserialize;
use std::collections::HashMap;

/// Placeholder token in a URL template, replaced with the camera's address
/// when a connection URL is built.
pub const IP_PLACEHOLDER: &str = "{ip}";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Access metadata for one camera model.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CameraModelEntry {
    pub url_template: String, // e.g., rtsp://{ip}/stream
    pub credentials: Credentials,
}

impl CameraModelEntry {
    /// Build the connection URL for a camera at `ip` by substituting the
    /// `{ip}` placeholder in the template.
    pub fn url_for_ip(&self, ip: &str) -> String {
        self.url_template.replace(IP_PLACEHOLDER, ip)
    }
}

/// Read-only mapping from model identifier to access metadata. Frozen at
/// construction; no mutation API is exposed.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: HashMap<String, CameraModelEntry>,
}

impl ModelRegistry {
    pub(crate) fn from_map(models: HashMap<String, CameraModelEntry>) -> Self {
        ModelRegistry { models }
    }

    /// The embedded model table. Covers the models known at build time;
    /// `registry_loader::load_registry` reads a YAML file instead when the
    /// set of models comes from deployment configuration.
    pub fn builtin() -> Self {
        let mut models = HashMap::new();
        models.insert(
            "ModelA".to_string(),
            CameraModelEntry {
                url_template: "rtsp://{ip}/stream".to_string(),
                credentials: Credentials {
                    username: "admin".to_string(),
                    password: "password".to_string(),
                },
            },
        );
        models.insert(
            "ModelB".to_string(),
            CameraModelEntry {
                url_template: "http://{ip}/video.jpg".to_string(),
                credentials: Credentials {
                    username: "user".to_string(),
                    password: "pass".to_string(),
                },
            },
        );
        ModelRegistry { models }
    }

    /// Look up the access metadata for `model_id`. Absence is an error the
    /// caller decides how to handle; the registry itself never falls back.
    pub fn lookup(&self, model_id: &str) -> Result<&CameraModelEntry, AppError> {
        self.models
            .get(model_id)
            .ok_or_else(|| AppError::ModelNotFound(model_id.to_string()))
    }

    pub fn contains(&self, model_id: &str) -> bool {
        self.models.contains_key(model_id)
    }

    /// Known model identifiers, sorted for stable listing.
    pub fn model_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.models.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_model_a() {
        let registry = ModelRegistry::builtin();
        let entry = registry.lookup("ModelA").unwrap();
        assert_eq!(entry.url_template, "rtsp://{ip}/stream");
        assert_eq!(entry.credentials.username, "admin");
        assert_eq!(entry.credentials.password, "password");
    }

    #[test]
    fn lookup_miss_is_model_not_found() {
        let registry = ModelRegistry::builtin();
        match registry.lookup("nonexistent") {
            Err(AppError::ModelNotFound(id)) => assert_eq!(id, "nonexistent"),
            other => panic!("expected ModelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn url_for_ip_substitutes_placeholder() {
        let registry = ModelRegistry::builtin();
        let entry = registry.lookup("ModelB").unwrap();
        assert_eq!(entry.url_for_ip("192.168.1.10"), "http://192.168.1.10/video.jpg");
    }

    #[test]
    fn model_ids_are_sorted() {
        let registry = ModelRegistry::builtin();
        assert_eq!(registry.model_ids(), vec!["ModelA", "ModelB"]);
    }
}
