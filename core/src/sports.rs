use once_cell::sync::Lazy;

/// En sportsoppføring: kanonisk nøkkel, visningsetikett og ikon-slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sport {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Fallback-oppføringen. Ligger utenfor tabellen slik at oppslag med
/// ukjent nøkkel alltid har noe å lande på.
pub static GENERIC_SPORT: Sport = Sport {
    value: "generic",
    label: "Otro",
    icon: "activity",
};

/// Statisk sportstabell. Bygges én gang ved oppstart, muteres aldri.
pub static SPORTS: Lazy<Vec<Sport>> = Lazy::new(|| {
    vec![
        Sport { value: "running", label: "Correr", icon: "footprints" },
        Sport { value: "trail_running", label: "Trail Running", icon: "mountain" },
        Sport { value: "cycling", label: "Ciclismo", icon: "bike" },
        Sport { value: "swimming", label: "Natación", icon: "waves" },
        Sport { value: "strength_training", label: "Entrenamiento", icon: "dumbbell" },
        Sport { value: "walking", label: "Caminar", icon: "person-standing" },
        Sport { value: "hiking", label: "Senderismo", icon: "backpack" },
        Sport { value: "yoga", label: "Yoga", icon: "flower-2" },
        GENERIC_SPORT,
    ]
});

/// Eksakt oppslag på kanonisk nøkkel. Ingen fuzzy-matching.
pub fn lookup_sport(value: &str) -> Option<&'static Sport> {
    SPORTS.iter().find(|s| s.value == value)
}

/// Oppslag med generic-fallback for ukjente nøkler.
pub fn lookup_sport_or_generic(value: &str) -> &'static Sport {
    lookup_sport(value).unwrap_or(&GENERIC_SPORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_nine_sports_and_generic_last() {
        assert_eq!(SPORTS.len(), 9);
        assert_eq!(SPORTS.last().unwrap().value, "generic");
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert_eq!(lookup_sport("running").unwrap().label, "Correr");
        assert!(lookup_sport("Running").is_none(), "case-sensitiv nøkkel");
        assert!(lookup_sport("jogging").is_none());
    }

    #[test]
    fn unknown_key_falls_back_to_generic() {
        let s = lookup_sport_or_generic("kitesurfing");
        assert_eq!(s.value, "generic");
        assert_eq!(s.label, "Otro");
    }
}
