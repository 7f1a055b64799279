// core/src/config.rs
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Oppsett for summary-tjenesten. Leses fra disk (JSON);
/// manglende fil gir default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Endepunkt som tar imot SummaryRequest og svarer {"summary": ...}.
    pub endpoint: String,
    /// Språket sammendraget skal skrives på.
    pub language: String,
    pub timeout_secs: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9002/api/summarize".to_string(),
            language: "es".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Leser inn config fra disk. Hvis filen ikke finnes, returneres default.
pub fn load_summary_config(path: &str) -> anyhow::Result<SummaryConfig> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("could not read summary config at {path}"))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("invalid summary config at {path}"))?;
        Ok(config)
    } else {
        Ok(SummaryConfig::default())
    }
}

/// Lagrer config til disk som JSON (pretty-print).
pub fn save_summary_config(config: &SummaryConfig, path: &str) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).with_context(|| format!("could not write summary config to {path}"))?;
    Ok(())
}
