use thiserror::Error;

/// Feiltaksonomi for analysen. Valgfrie sensorkanaler (watt, puls,
/// kalorier, pace) gir aldri feil – de degraderer til fravær/0.
/// Bare totalt fravær av struktur eller et mislykket summary-kall feiler.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// Dokumentet mangler brukbar session/lap/record-struktur, eller
    /// records mangler tidsstemplene som trengs for varighet/starttid.
    #[error("no usable session, lap or record data in document")]
    NoActivityData,

    /// Dekoderen leverte noe som ikke lar seg lese som et dokument.
    #[error("malformed activity document: {0}")]
    MalformedDocument(String),

    /// Summary-tjenesten feilet eller svarte uten tekst. Brukeren kan
    /// prøve igjen manuelt; allerede løste data berøres ikke.
    #[error("summary generation failed: {0}")]
    SummaryGenerationFailed(String),
}
