// core/src/summary_api.rs
use log::{info, warn};
use ureq::Agent;

use crate::config::SummaryConfig;
use crate::errors::ActivityError;
use crate::summary::{SummaryProvider, SummaryRequest, SummaryResponse};

/// Blocking HTTP-klient mot summary-tjenesten (ureq).
pub struct SummaryClient {
    agent: Agent,
    config: SummaryConfig,
}

impl SummaryClient {
    pub fn new(config: SummaryConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build();
        Self { agent, config }
    }
}

impl SummaryProvider for SummaryClient {
    fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, ActivityError> {
        let resp = self
            .agent
            .post(&self.config.endpoint)
            .query("lang", &self.config.language)
            .send_json(request)
            .map_err(|e| ActivityError::SummaryGenerationFailed(e.to_string()))?;

        let body: SummaryResponse = resp
            .into_json()
            .map_err(|e| ActivityError::SummaryGenerationFailed(format!("response decode: {e}")))?;

        // Tomt svar regnes som feilet generering, ikke som et sammendrag.
        if body.summary.trim().is_empty() {
            warn!("summary endpoint returned empty text");
            return Err(ActivityError::SummaryGenerationFailed("empty summary".into()));
        }

        info!(
            "summary generated ({} chars) for sport {}",
            body.summary.len(),
            request.activity_data.sport
        );
        Ok(body)
    }
}
