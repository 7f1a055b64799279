use serde::{Deserialize, Serialize};

use crate::errors::ActivityError;
use crate::types::NormalizedSession;

/// Forespørselen til summary-tjenesten: den løste økten pluss etiketten
/// for sporten brukeren har valgt i skjemaet. Serialiseres camelCase med
/// RFC3339-starttid, slik tjenestens skjema forventer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub activity_data: NormalizedSession,
    pub selected_sport_label: String,
}

impl SummaryRequest {
    pub fn new(session: &NormalizedSession, selected_sport_label: &str) -> Self {
        Self {
            activity_data: session.clone(),
            selected_sport_label: selected_sport_label.to_string(),
        }
    }
}

/// Svar fra tjenesten: den genererte motivasjonsteksten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Seam mot tekstgenereringen (prod: SummaryClient, test: StaticSummaryProvider).
/// Kjernens ansvar slutter ved payloaden; ingen interne retries.
pub trait SummaryProvider {
    fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResponse, ActivityError>;
}

/// Statisk tilbyder for tester og offline-bruk.
#[derive(Debug, Default)]
pub struct StaticSummaryProvider {
    pub summary: Option<String>,
}

impl SummaryProvider for StaticSummaryProvider {
    fn summarize(&self, _request: &SummaryRequest) -> Result<SummaryResponse, ActivityError> {
        match &self.summary {
            Some(text) => Ok(SummaryResponse { summary: text.clone() }),
            None => Err(ActivityError::SummaryGenerationFailed(
                "no summary configured".into(),
            )),
        }
    }
}
