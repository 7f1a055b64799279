// core/src/lib.rs
//! FITscribe-kjernen: løser ett autoritativt øktsammendrag og bygger
//! per-kilometer-bøtter fra et parset aktivitetsdokument, og setter opp
//! payloaden til den eksterne summary-tjenesten.

pub mod api;
pub mod config;
pub mod errors;
pub mod format;
pub mod metrics;
pub mod session;
pub mod splits;
pub mod sports;
pub mod summary;
pub mod summary_api;
pub mod types;

pub use api::{
    analyze_document, analyze_document_json, generate_summary, parse_document, ActivityAnalysis,
};
pub use config::{load_summary_config, save_summary_config, SummaryConfig};
pub use errors::ActivityError;
pub use format::{format_duration, format_pace};
pub use metrics::Metrics;
pub use session::{resolve_session, resolve_session_with_source, SessionSource};
pub use splits::aggregate_by_kilometer;
pub use sports::{lookup_sport, lookup_sport_or_generic, Sport, SPORTS};
pub use summary::{StaticSummaryProvider, SummaryProvider, SummaryRequest, SummaryResponse};
pub use summary_api::SummaryClient;
pub use types::{
    FitDocument, KmBucket, NormalizedSession, RawLap, RawRecord, RawSession, SportMeta,
};
