use chrono::{DateTime, Utc};
use log::debug;
use ordered_float::OrderedFloat;

use crate::errors::ActivityError;
use crate::format::{format_duration, pace_from_speed, round2};
use crate::sports::lookup_sport_or_generic;
use crate::types::{FitDocument, NormalizedSession, RawRecord};

/// Hvilken strategi som leverte den valgte økten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    Session,
    Lap,
    Records,
}

impl SessionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionSource::Session => "session",
            SessionSource::Lap => "lap",
            SessionSource::Records => "records",
        }
    }
}

/// Felles "valgt økt"-form som alle tre strategiene leverer.
#[derive(Debug, Clone, Default)]
struct ResolvedTotals {
    sport: Option<String>,
    sub_sport: Option<String>,
    start_time: Option<DateTime<Utc>>,
    total_timer_time: Option<f64>,
    total_distance: Option<f64>,
    avg_speed: Option<f64>,
    total_calories: Option<f64>,
    avg_heart_rate: Option<f64>,
    max_heart_rate: Option<f64>,
}

/// Strategi 1: første session-melding.
fn totals_from_sessions(doc: &FitDocument) -> Option<ResolvedTotals> {
    let s = doc.sessions.first()?;
    Some(ResolvedTotals {
        sport: s.sport.clone(),
        sub_sport: s.sub_sport.clone(),
        start_time: s.start_time,
        total_timer_time: s.total_timer_time,
        total_distance: s.total_distance,
        avg_speed: s.avg_speed,
        total_calories: s.total_calories,
        avg_heart_rate: s.avg_heart_rate,
        max_heart_rate: s.max_heart_rate,
    })
}

/// Strategi 2: siste lap – den representerer den kumulative avslutningen.
fn totals_from_laps(doc: &FitDocument) -> Option<ResolvedTotals> {
    let l = doc.laps.last()?;
    Some(ResolvedTotals {
        sport: l.sport.clone(),
        sub_sport: l.sub_sport.clone(),
        start_time: l.start_time,
        total_timer_time: l.total_timer_time,
        total_distance: l.total_distance,
        avg_speed: l.avg_speed,
        total_calories: l.total_calories,
        avg_heart_rate: l.avg_heart_rate,
        max_heart_rate: l.max_heart_rate,
    })
}

/// Snitt og maks av pulsverdier > 0. Ingen gyldige samples => (None, None).
fn heart_rate_stats(records: &[RawRecord]) -> (Option<f64>, Option<f64>) {
    let hr: Vec<f64> = records
        .iter()
        .filter_map(|r| r.heart_rate)
        .filter(|h| h.is_finite() && *h > 0.0)
        .collect();
    if hr.is_empty() {
        return (None, None);
    }
    let avg = hr.iter().sum::<f64>() / hr.len() as f64;
    let max = hr.iter().copied().max_by_key(|h| OrderedFloat(*h));
    (Some(avg), max)
}

/// Strategi 3: syntetiser en økt fra record-strømmen.
/// Varighet: eksplisitt timer-felt på siste record, ellers differansen
/// mellom siste og første tidsstempel. Uten noen av delene gir
/// strategien ingenting.
fn totals_from_records(doc: &FitDocument) -> Option<ResolvedTotals> {
    let records = &doc.records;
    let first = records.first()?;
    let last = records.last()?;

    let total_timer_time = last.elapsed_time.or_else(|| match (first.timestamp, last.timestamp) {
        (Some(a), Some(b)) => Some((b - a).num_milliseconds() as f64 / 1000.0),
        _ => None,
    })?;

    // Siste record bærer de kumulative feltene.
    let total_distance = last.distance.unwrap_or(0.0);
    let avg_speed = if total_distance > 0.0 && total_timer_time > 0.0 {
        total_distance / total_timer_time
    } else {
        0.0
    };

    let (avg_heart_rate, max_heart_rate) = heart_rate_stats(records);
    let meta = doc.sports.first();

    Some(ResolvedTotals {
        sport: meta.and_then(|m| m.sport.clone()),
        sub_sport: meta.and_then(|m| m.sub_sport.clone()),
        start_time: records.iter().find_map(|r| r.timestamp),
        total_timer_time: Some(total_timer_time),
        total_distance: Some(total_distance),
        avg_speed: Some(avg_speed),
        total_calories: last.calories,
        avg_heart_rate,
        max_heart_rate,
    })
}

/// Velger eller syntetiserer den autoritative økten for dokumentet og
/// sier fra hvilken kilde den kom. Prioritet: første session → siste
/// lap → syntese fra records.
pub fn resolve_session_with_source(
    doc: &FitDocument,
) -> Result<(NormalizedSession, SessionSource), ActivityError> {
    let (totals, source) = totals_from_sessions(doc)
        .map(|t| (t, SessionSource::Session))
        .or_else(|| totals_from_laps(doc).map(|t| (t, SessionSource::Lap)))
        .or_else(|| totals_from_records(doc).map(|t| (t, SessionSource::Records)))
        .ok_or(ActivityError::NoActivityData)?;

    // Starttid: valgt økt, ellers første tidsstemplede record. Uten noe
    // tidsanker kan ikke sammendraget bygges.
    let start_time = totals
        .start_time
        .or_else(|| doc.records.iter().find_map(|r| r.timestamp))
        .ok_or(ActivityError::NoActivityData)?;

    let sport = lookup_sport_or_generic(totals.sport.as_deref().unwrap_or("generic"));

    debug!(
        "session resolved from {}: sport={} timer={:?} distance={:?}",
        source.as_str(),
        sport.value,
        totals.total_timer_time,
        totals.total_distance
    );

    let session = NormalizedSession {
        activity_type: sport.label.to_string(),
        sport: sport.value.to_string(),
        sub_sport: totals.sub_sport,
        start_time,
        duration: format_duration(totals.total_timer_time.unwrap_or(f64::NAN)),
        distance_km: round2(totals.total_distance.unwrap_or(0.0).max(0.0) / 1000.0),
        avg_pace: totals.avg_speed.and_then(pace_from_speed),
        calories: totals.total_calories.map(|c| c.round() as u32),
        avg_heart_rate: totals.avg_heart_rate.map(|h| h.round() as u32),
        max_heart_rate: totals.max_heart_rate.map(|h| h.round() as u32),
    };

    Ok((session, source))
}

/// Som `resolve_session_with_source`, uten kildeinfo.
pub fn resolve_session(doc: &FitDocument) -> Result<NormalizedSession, ActivityError> {
    resolve_session_with_source(doc).map(|(session, _)| session)
}

impl NormalizedSession {
    /// Omklassifiserer økten til en annen sport fra tabellen.
    /// Ukjent nøkkel faller tilbake til "generic". Alle tallfelt beholdes.
    pub fn reclassified(&self, sport_key: &str) -> NormalizedSession {
        let sport = lookup_sport_or_generic(sport_key);
        NormalizedSession {
            activity_type: sport.label.to_string(),
            sport: sport.value.to_string(),
            ..self.clone()
        }
    }
}
