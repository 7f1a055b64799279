// core/src/api.rs
//
// JSON-grensen mot presentasjonslaget: tolerant parsing av dekoderens
// dokument, orkestrering av resolver + aggregator, og teller-bokføring.
// Kjernefunksjonene under (session/splits) er rene; all bokføring skjer her.

use log::{info, warn};
use serde::Serialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::errors::ActivityError;
use crate::metrics::{
    documents_rejected_total, sessions_resolved_total, summary_failures_total,
    summary_requests_total, Metrics,
};
use crate::session::resolve_session_with_source;
use crate::splits::aggregate_by_kilometer;
use crate::summary::{SummaryProvider, SummaryRequest, SummaryResponse};
use crate::types::{FitDocument, KmBucket, NormalizedSession};

/// Komplett analyse for én opplasting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAnalysis {
    pub session: NormalizedSession,
    pub splits: Vec<KmBucket>,
}

/// Parser dekoderens JSON-dokument. Alle lister og felt er valgfrie;
/// en parse-feil rapporteres med JSON-stien den oppsto på.
pub fn parse_document(json_in: &str) -> Result<FitDocument, ActivityError> {
    let mut de = json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de)
        .map_err(|e| ActivityError::MalformedDocument(format!("at {}: {}", e.path(), e)))
}

/// Løser økten og bygger km-bøtter for et allerede parset dokument.
pub fn analyze_document(
    doc: &FitDocument,
    metrics: &Metrics,
) -> Result<ActivityAnalysis, ActivityError> {
    let (session, source) = match resolve_session_with_source(doc) {
        Ok(ok) => ok,
        Err(e) => {
            documents_rejected_total(metrics).inc();
            warn!("document rejected: {e}");
            return Err(e);
        }
    };
    sessions_resolved_total(metrics, source.as_str()).inc();

    let splits = aggregate_by_kilometer(&doc.records);
    info!(
        "activity analyzed: sport={} distance_km={} splits={}",
        session.sport,
        session.distance_km,
        splits.len()
    );

    Ok(ActivityAnalysis { session, splits })
}

/// JSON-inn/JSON-ut-varianten presentasjonslaget kaller én gang per
/// opplasting. Utdata: {"session": .., "splits": [..]} i camelCase.
pub fn analyze_document_json(json_in: &str, metrics: &Metrics) -> Result<String, ActivityError> {
    let doc = match parse_document(json_in) {
        Ok(doc) => doc,
        Err(e) => {
            documents_rejected_total(metrics).inc();
            warn!("document parse failed: {e}");
            return Err(e);
        }
    };
    let analysis = analyze_document(&doc, metrics)?;
    json::to_string(&analysis).map_err(|e| ActivityError::MalformedDocument(e.to_string()))
}

/// Kjører summary-kallet med teller-bokføring. Feil rapporteres videre
/// uten retry; allerede løste session/splits-data berøres ikke.
pub fn generate_summary(
    provider: &dyn SummaryProvider,
    request: &SummaryRequest,
    metrics: &Metrics,
) -> Result<SummaryResponse, ActivityError> {
    summary_requests_total(metrics).inc();
    provider.summarize(request).map_err(|e| {
        summary_failures_total(metrics).inc();
        warn!("summary generation failed: {e}");
        e
    })
}
