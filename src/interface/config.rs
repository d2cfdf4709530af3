use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerateConfig {
    /// A property set file, or a directory scanned for `.aadl` files
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// Root folder for generated sources; each property set gets a
    /// subfolder named after its lowercased name
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

fn default_input_path() -> String {
    ".".to_string()
}

fn default_output_path() -> String {
    "./src-gen".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            verbose: Some(false),
        }
    }
}

impl GenerateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let input_path = Path::new(&self.input_path);
        if !input_path.exists() {
            return Err(ConfigError::InvalidConfig(format!(
                "Input path does not exist: {}",
                self.input_path
            )));
        }
        Ok(())
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &GenerateConfig) {
        if other.input_path != default_input_path() {
            self.input_path = other.input_path.clone();
        }
        if other.output_path != default_output_path() {
            self.output_path = other.output_path.clone();
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
