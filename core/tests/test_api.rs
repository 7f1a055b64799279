// core/tests/test_api.rs

use fitscribe_core::metrics::{documents_rejected_total, sessions_resolved_total};
use fitscribe_core::{
    analyze_document, analyze_document_json, parse_document, ActivityError, Metrics,
};
use serde_json::json;

fn uploaded_document() -> serde_json::Value {
    // Slik dekoderen leverer det: camelCase-felt og valgfrie lister.
    json!({
        "sessions": [{
            "sport": "cycling",
            "startTime": "2024-05-01T07:30:00Z",
            "totalTimerTime": 5400.0,
            "totalDistance": 42_500.0,
            "avgSpeed": 7.87,
            "totalCalories": 980,
            "avgHeartRate": 142.4,
            "maxHeartRate": 171
        }],
        "records": [
            { "timestamp": "2024-05-01T07:30:00Z", "distance": 0.0, "speed": 7.5, "power": 180 },
            { "timestamp": "2024-05-01T07:32:00Z", "distance": 900.0, "speed": 7.9, "power": 210 },
            { "timestamp": "2024-05-01T07:34:10Z", "distance": 1_850.0, "speed": 8.1, "power": 230, "heartRate": 150 }
        ]
    })
}

#[test]
fn parse_accepts_camel_case_aliases() {
    let doc = parse_document(&uploaded_document().to_string()).unwrap();

    assert_eq!(doc.sessions.len(), 1);
    assert_eq!(doc.sessions[0].total_timer_time, Some(5400.0));
    assert_eq!(doc.records[2].heart_rate, Some(150.0));
    assert!(doc.laps.is_empty(), "manglende liste leses som tom");
}

#[test]
fn parse_accepts_snake_case_and_enhanced_fields() {
    let raw = json!({
        "records": [
            { "timestamp": "2024-05-01T07:30:00Z", "enhanced_distance": 120.0, "enhanced_speed": 3.2 }
        ]
    });

    let doc = parse_document(&raw.to_string()).unwrap();
    assert_eq!(doc.records[0].distance, Some(120.0));
    assert_eq!(doc.records[0].speed, Some(3.2));
}

#[test]
fn garbage_input_is_malformed_document() {
    let err = parse_document("definitivt ikke json").unwrap_err();
    assert!(matches!(err, ActivityError::MalformedDocument(_)));
}

#[test]
fn wrong_shape_reports_json_path() {
    // records som tall i stedet for liste: feilen skal peke på stien.
    let err = parse_document(r#"{"records": 5}"#).unwrap_err();
    match err {
        ActivityError::MalformedDocument(msg) => {
            assert!(msg.contains("records"), "mangler sti i: {msg}")
        }
        other => panic!("uventet feil: {other}"),
    }
}

#[test]
fn analyze_document_json_returns_session_and_splits() {
    let metrics = Metrics::new();

    let out = analyze_document_json(&uploaded_document().to_string(), &metrics).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(v["session"]["sport"], "cycling");
    assert_eq!(v["session"]["activityType"], "Ciclismo");
    assert_eq!(v["session"]["duration"], "01:30:00");
    assert_eq!(v["session"]["distanceKm"], 42.5);

    let splits = v["splits"].as_array().unwrap();
    assert_eq!(splits.len(), 2);
    assert_eq!(splits[0]["kilometer"], 1);
    assert_eq!(splits[0]["avgPowerWatts"], 195); // (180+210)/2
    assert_eq!(splits[1]["kilometer"], 2);
    assert_eq!(splits[1]["avgPowerWatts"], 230);

    assert_eq!(sessions_resolved_total(&metrics, "session").get(), 1);
    assert_eq!(documents_rejected_total(&metrics).get(), 0);
}

#[test]
fn empty_document_is_rejected_and_counted() {
    let metrics = Metrics::new();

    let err = analyze_document_json("{}", &metrics).unwrap_err();

    assert!(matches!(err, ActivityError::NoActivityData));
    assert_eq!(documents_rejected_total(&metrics).get(), 1);
}

#[test]
fn analysis_is_pure_and_repeatable() {
    // Samme dokument analysert to ganger gir identisk utdata;
    // kjernen holder ingen tilstand mellom kall.
    let metrics = Metrics::new();
    let doc = parse_document(&uploaded_document().to_string()).unwrap();

    let first = analyze_document(&doc, &metrics).unwrap();
    let second = analyze_document(&doc, &metrics).unwrap();

    assert_eq!(first.session, second.session);
    assert_eq!(first.splits, second.splits);
    assert_eq!(sessions_resolved_total(&metrics, "session").get(), 2);
}
