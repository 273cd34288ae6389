use super::domain::Preference;

/// Splits `"<room> [<tag>] ..."` on whitespace runs. Tokens after the tag are ignored.
pub(crate) fn parse_preference(raw: &str) -> Preference {
    let mut tokens = raw.split_whitespace();
    let room_id = tokens.next().unwrap_or_default().to_string();
    let group_tag = tokens.next().unwrap_or_default().to_string();

    Preference { room_id, group_tag }
}
