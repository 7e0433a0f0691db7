use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named set of people to greet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreeterConfig {
    /// Label for this set
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Names to greet, in order
    #[serde(default)]
    pub names: Vec<String>,
}

impl GreeterConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context(format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: GreeterConfig =
            serde_yaml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .context(format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn sample() -> Self {
        Self {
            name: "Bedrock".to_string(),
            description: "Neighbours on Cobblestone Way".to_string(),
            names: vec![
                "Fred".to_string(),
                "Wilma".to_string(),
                "Barney".to_string(),
                "Betty".to_string(),
            ],
        }
    }
}
