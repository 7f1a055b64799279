/// Formaterer sekunder som nullpolstret "HH:MM:SS". Total over f64:
/// NaN, uendelig og negative verdier rendres som "00:00:00".
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00:00".to_string();
    }
    let s = seconds.floor() as u64;
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// Minutter og avrundede sekunder per km fra snittfart.
/// Bærer over ett minutt når sekundene runder til 60.
fn pace_parts(speed_ms: f64) -> Option<(u64, u64)> {
    if !speed_ms.is_finite() || speed_ms <= 0.0 {
        return None;
    }
    let secs_per_km = 1000.0 / speed_ms;
    let mut minutes = (secs_per_km / 60.0).floor() as u64;
    let mut seconds = (secs_per_km % 60.0).round() as u64;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    Some((minutes, seconds))
}

/// "M:SS min/km" for positiv fart, ellers None.
pub fn pace_from_speed(speed_ms: f64) -> Option<String> {
    pace_parts(speed_ms).map(|(m, s)| format!("{}:{:02} min/km", m, s))
}

/// Visningsvariant: "N/A" når fart mangler, er 0 eller negativ.
pub fn format_pace(speed_ms: f64) -> String {
    pace_from_speed(speed_ms).unwrap_or_else(|| "N/A".to_string())
}

/// Runder til to desimaler (km-visning).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
