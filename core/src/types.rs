use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ett tidsstemplet sensorsample fra dekoderen. Alle kanaler er valgfrie;
/// fravær betyr at kilden ikke leverte feltet for dette samplet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    pub timestamp: Option<DateTime<Utc>>,
    /// Kumulativ distanse i meter (monotont ikke-synkende fra kilden).
    #[serde(alias = "enhanced_distance")]
    pub distance: Option<f64>,
    /// m/s
    #[serde(alias = "enhanced_speed")]
    pub speed: Option<f64>,
    /// watt
    pub power: Option<f64>,
    /// bpm
    #[serde(alias = "heartRate")]
    pub heart_rate: Option<f64>,
    /// Eksplisitt timer-felt (sekunder) fra enkelte enheter.
    #[serde(alias = "timer_time")]
    pub elapsed_time: Option<f64>,
    /// Kumulative kalorier.
    pub calories: Option<f64>,
}

/// Session-melding fra dekoderen: aggregater for hele økten.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSession {
    pub sport: Option<String>,
    #[serde(alias = "subSport")]
    pub sub_sport: Option<String>,
    #[serde(alias = "startTime")]
    pub start_time: Option<DateTime<Utc>>,
    /// Sekunder.
    #[serde(alias = "totalTimerTime")]
    pub total_timer_time: Option<f64>,
    /// Meter.
    #[serde(alias = "totalDistance")]
    pub total_distance: Option<f64>,
    /// m/s
    #[serde(alias = "avgSpeed", alias = "enhanced_avg_speed")]
    pub avg_speed: Option<f64>,
    #[serde(alias = "totalCalories")]
    pub total_calories: Option<f64>,
    #[serde(alias = "avgHeartRate")]
    pub avg_heart_rate: Option<f64>,
    #[serde(alias = "maxHeartRate")]
    pub max_heart_rate: Option<f64>,
}

/// Lap-melding: samme aggregatfelt som session. Siste lap tolkes som
/// kumulativ når session mangler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLap {
    pub sport: Option<String>,
    #[serde(alias = "subSport")]
    pub sub_sport: Option<String>,
    #[serde(alias = "startTime")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(alias = "totalTimerTime")]
    pub total_timer_time: Option<f64>,
    #[serde(alias = "totalDistance")]
    pub total_distance: Option<f64>,
    #[serde(alias = "avgSpeed", alias = "enhanced_avg_speed")]
    pub avg_speed: Option<f64>,
    #[serde(alias = "totalCalories")]
    pub total_calories: Option<f64>,
    #[serde(alias = "avgHeartRate")]
    pub avg_heart_rate: Option<f64>,
    #[serde(alias = "maxHeartRate")]
    pub max_heart_rate: Option<f64>,
}

/// Sport-metadata fra filen (sport-meldinger).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SportMeta {
    pub sport: Option<String>,
    #[serde(alias = "subSport")]
    pub sub_sport: Option<String>,
}

/// Det parsede aktivitetsdokumentet slik dekoderen leverer det.
/// Alle lister kan mangle; manglende liste leses som tom.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FitDocument {
    #[serde(default)]
    pub sessions: Vec<RawSession>,
    #[serde(default)]
    pub laps: Vec<RawLap>,
    #[serde(default)]
    pub records: Vec<RawRecord>,
    #[serde(default)]
    pub sports: Vec<SportMeta>,
}

/// Normalisert øktsammendrag: kjernens utdata til detaljvisning og
/// summary-payload. `start_time` serialiseres som RFC3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSession {
    /// Visningsetikett for sporten (fra sportstabellen).
    pub activity_type: String,
    /// Kanonisk sportsnøkkel.
    pub sport: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_sport: Option<String>,
    pub start_time: DateTime<Utc>,
    /// "HH:MM:SS", alltid velformet.
    pub duration: String,
    /// Km med to desimaler; 0 når distanse mangler.
    pub distance_km: f64,
    /// "M:SS min/km"; None når snittfart mangler eller er 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_pace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_heart_rate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heart_rate: Option<u32>,
}

/// Én kilometers-bøtte for graf-dataene. Bygges på nytt per opplasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KmBucket {
    /// 1-basert: meter 0–999 er kilometer 1.
    pub kilometer: u32,
    /// Sekunder per km; 0 når bøtta mangler gyldige fartssamples.
    pub avg_pace_seconds: f64,
    /// Avrundet snitt; 0 når bøtta mangler wattsamples.
    pub avg_power_watts: i32,
}
