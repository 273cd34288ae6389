use std::collections::HashSet;

use super::domain::{Applicant, RawApplicant, RoomClass, MAX_PREFERENCES};
use super::parser::parse_preference;

pub(crate) fn clean_string(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn clamp_seniority(raw: Option<i64>) -> u32 {
    let value = raw.unwrap_or(0).max(0);
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn room_priority(room_type: Option<&str>) -> u8 {
    room_type
        .and_then(RoomClass::parse)
        .map(RoomClass::priority)
        .unwrap_or(0)
}

/// Produces the canonical applicant. Missing or malformed fields fall back to empty values.
pub fn normalize_applicant(raw: &RawApplicant) -> Applicant {
    let preferences = raw
        .preferences
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|entry| clean_string(entry.as_deref()))
        .filter(|entry| !entry.is_empty())
        .take(MAX_PREFERENCES)
        .map(|entry| parse_preference(&entry))
        .collect();

    Applicant {
        name: clean_string(raw.name.as_deref()),
        seniority: clamp_seniority(raw.seniority),
        current_room_priority: room_priority(raw.current_room_type.as_deref()),
        current_room: clean_string(raw.current_room.as_deref()),
        preferences,
    }
}

/// Trims room ids, drops blanks and keeps the first occurrence of duplicates.
pub fn clean_room_list<S: AsRef<str>>(rooms: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    rooms
        .iter()
        .map(|room| room.as_ref().trim())
        .filter(|room| !room.is_empty())
        .filter(|room| seen.insert(room.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, seniority: i64, preferences: &[&str]) -> RawApplicant {
        RawApplicant {
            name: Some(name.to_string()),
            current_room: None,
            current_room_type: None,
            seniority: Some(seniority),
            preferences: Some(
                preferences
                    .iter()
                    .map(|entry| Some(entry.to_string()))
                    .collect(),
            ),
        }
    }

    #[test]
    fn trims_and_clamps_fields() {
        let mut input = raw("  Kari  ", -4, &["R1"]);
        input.current_room = Some("  B12 ".to_string());
        input.current_room_type = Some(" PARROM ".to_string());

        let applicant = normalize_applicant(&input);

        assert_eq!(applicant.name, "Kari");
        assert_eq!(applicant.seniority, 0);
        assert_eq!(applicant.current_room, "B12");
        assert_eq!(applicant.current_room_priority, 3);
    }

    #[test]
    fn unknown_or_missing_room_class_scores_zero() {
        let mut input = raw("Ola", 1, &[]);
        assert_eq!(normalize_applicant(&input).current_room_priority, 0);

        input.current_room_type = Some("penthouse".to_string());
        assert_eq!(normalize_applicant(&input).current_room_priority, 0);

        input.current_room_type = Some("Fleksirom".to_string());
        assert_eq!(normalize_applicant(&input).current_room_priority, 4);

        input.current_room_type = Some("porten".to_string());
        assert_eq!(normalize_applicant(&input).current_room_priority, 1);
    }

    #[test]
    fn preferences_drop_blanks_and_cap_at_limit() {
        let mut input = raw(
            "Ola",
            2,
            &["R1", "  ", "R2 X", "R3", "R4", "R5", "R6", "R7", "R8", "R9"],
        );
        input.preferences.as_mut().expect("preferences").insert(1, None);

        let applicant = normalize_applicant(&input);

        assert_eq!(applicant.preferences.len(), MAX_PREFERENCES);
        assert_eq!(applicant.preferences[0].room_id, "R1");
        assert_eq!(applicant.preferences[1].room_id, "R2");
        assert_eq!(applicant.preferences[1].group_tag, "X");
        assert_eq!(applicant.preferences[7].room_id, "R8");
    }

    #[test]
    fn empty_record_degrades_to_defaults() {
        let applicant = normalize_applicant(&RawApplicant::default());

        assert!(applicant.name.is_empty());
        assert_eq!(applicant.seniority, 0);
        assert_eq!(applicant.current_room_priority, 0);
        assert!(applicant.current_room.is_empty());
        assert!(applicant.preferences.is_empty());
    }

    #[test]
    fn oversized_seniority_saturates() {
        let applicant = normalize_applicant(&raw("Ola", i64::MAX, &[]));
        assert_eq!(applicant.seniority, u32::MAX);
    }

    #[test]
    fn normalization_is_idempotent() {
        let mut input = raw("  Kari ", 7, &[" R1  X ", "", "R2", "R3 Y extra"]);
        input.current_room = Some(" A1 ".to_string());
        input.current_room_type = Some("Enkeltrom".to_string());

        let once = normalize_applicant(&input);
        let twice = normalize_applicant(&once.to_raw());

        assert_eq!(once, twice);
    }

    #[test]
    fn room_list_is_trimmed_and_deduplicated() {
        let rooms = clean_room_list(&[" R1", "R2 ", "", "R1", "   ", "R3"]);
        assert_eq!(rooms, vec!["R1", "R2", "R3"]);
    }
}
