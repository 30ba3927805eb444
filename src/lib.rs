//! Shared utility layer for IP camera scanning tools: a read-only registry of
//! camera model access metadata, plus process-wide log configuration and a
//! raw append-to-file message writer.

pub mod common;
pub mod errors;
pub mod model_registry;
pub mod registry_loader;

pub use errors::AppError;
pub use model_registry::{CameraModelEntry, Credentials, ModelRegistry};
pub use registry_loader::load_registry;
