use serde::Deserialize;
use std::path::Path;

const DEFAULT_DETECTOR_API_ADDRESS: &str = "http://127.0.0.1:8000";
// Service-side filtering threshold, forwarded as the `confidence` query
// parameter. Unrelated to the local decision threshold in the verdict crate.
const DEFAULT_SERVICE_CONFIDENCE: f64 = 0.25;
const DEFAULT_CAMERA_INDEX: u32 = 0;
const DEFAULT_NOTIFY_AUTO_CLOSE_MS: u64 = 4000;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("File exists but it could not be read to a string for parsing: {0}")]
    FileExistsButCannotBeReadToString(std::io::Error),
    #[error("Could not parse file to config; either invalid yaml or missing config: {0}")]
    FileFormatCouldNotBeParsed(serde_yml::Error),
}

#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UniformCheckConfig {
    detector_api_address: Option<String>,
    detector_api_proxy: Option<String>,
    service_confidence: Option<f64>,
    camera_index: Option<u32>,
    notify_auto_close_ms: Option<u64>,
}

impl UniformCheckConfig {
    /// Loads the config from the given path. A missing file is not an error;
    /// every field has a usable default for a locally running service.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            tracing::info!(
                "No config file at {}; using defaults",
                path.as_ref().display()
            );
            return Ok(Self::default());
        }

        let config_file_data = std::fs::read_to_string(path)
            .map_err(ConfigError::FileExistsButCannotBeReadToString)?;

        let config: UniformCheckConfig = serde_yml::from_str(&config_file_data)
            .map_err(ConfigError::FileFormatCouldNotBeParsed)?;

        Ok(config)
    }

    pub fn detector_api_address(&self) -> &str {
        self.detector_api_address
            .as_deref()
            .unwrap_or(DEFAULT_DETECTOR_API_ADDRESS)
    }

    pub fn detector_api_proxy(&self) -> Option<&str> {
        self.detector_api_proxy.as_deref()
    }

    pub fn service_confidence(&self) -> f64 {
        self.service_confidence
            .unwrap_or(DEFAULT_SERVICE_CONFIDENCE)
    }

    pub fn camera_index(&self) -> u32 {
        self.camera_index.unwrap_or(DEFAULT_CAMERA_INDEX)
    }

    pub fn notify_auto_close_ms(&self) -> u64 {
        self.notify_auto_close_ms
            .unwrap_or(DEFAULT_NOTIFY_AUTO_CLOSE_MS)
    }
}
