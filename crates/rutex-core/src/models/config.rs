//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the rutex pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RutexConfig {
    /// PDF page selection.
    pub pages: PageConfig,
}

impl Default for RutexConfig {
    fn default() -> Self {
        Self {
            pages: PageConfig::default(),
        }
    }
}

/// Which pages carry the labeled sections for each document layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Pages to read for a RUT certificate.
    pub rut: Vec<u32>,

    /// Pages to read for a billing-authorization resolution.
    pub resolution: Vec<u32>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            rut: vec![1],
            resolution: vec![1, 2],
        }
    }
}

impl RutexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RutexConfig::default();
        assert_eq!(config.pages.rut, vec![1]);
        assert_eq!(config.pages.resolution, vec![1, 2]);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: RutexConfig = serde_json::from_str(r#"{"pages":{"rut":[1,2]}}"#).unwrap();
        assert_eq!(config.pages.rut, vec![1, 2]);
        assert_eq!(config.pages.resolution, vec![1, 2]);
    }
}
