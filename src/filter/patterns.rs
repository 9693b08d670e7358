use lazy_static::lazy_static;
use regex::Regex;

/// Room kinds that appear in the free-text bed/bath and type fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Room {
    Bedroom,
    Bathroom,
}

/// Tokens accepted after a count, per room kind. Matching is case-insensitive.
/// Longer tokens come first so alternation prefers the full word.
pub const ROOM_TOKENS: &[(Room, &[&str])] = &[
    (Room::Bedroom, &["bedroom", "bed", "br"]),
    (Room::Bathroom, &["bath", "ba"]),
];

pub fn tokens_for(room: Room) -> &'static [&'static str] {
    ROOM_TOKENS
        .iter()
        .find(|(r, _)| *r == room)
        .map(|(_, tokens)| *tokens)
        .unwrap_or(&[])
}

fn token_alternation(room: Room) -> String {
    tokens_for(room).join("|")
}

lazy_static! {
    /// First "<number> bath" occurrence; fractional counts allowed ("1.5 Bath")
    static ref BATH_COUNT: Regex = Regex::new(&format!(
        r"(?i)(\d+(?:\.\d+)?)\s*(?:{})",
        token_alternation(Room::Bathroom)
    ))
    .unwrap();
}

/// Pattern matching a selected count followed by a room token anywhere in
/// the text, e.g. "2" matches "2 Bed", "2BR" and "2 bedroom".
pub fn count_pattern(room: Room, count: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?i){}\s*(?:{})",
        regex::escape(count.trim()),
        token_alternation(room)
    ))
}

/// Bathroom count stated in the text. Text without a parseable count reads
/// as zero bathrooms, so such units never match a specific selection.
pub fn bathroom_count(text: &str) -> f64 {
    BATH_COUNT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedroom_pattern_tokens() {
        let two = count_pattern(Room::Bedroom, "2").unwrap();
        assert!(two.is_match("2 Bed / 1 Bath"));
        assert!(two.is_match("2BR"));
        assert!(two.is_match("2 bedroom"));
        assert!(two.is_match("2 BED"));
        assert!(!two.is_match("3 Bed / 2 Bath"));
        assert!(!two.is_match("Studio / 2 Bath"));
    }

    #[test]
    fn test_count_is_escaped() {
        let pattern = count_pattern(Room::Bedroom, "1.5").unwrap();
        assert!(pattern.is_match("1.5 bed"));
        assert!(!pattern.is_match("125 bed"));
    }

    #[test]
    fn test_bathroom_count_extraction() {
        assert_eq!(bathroom_count("2 Bed / 1 Bath"), 1.0);
        assert_eq!(bathroom_count("3 Bed / 2.5 Bath"), 2.5);
        assert_eq!(bathroom_count("1BR/1BA"), 1.0);
        assert_eq!(bathroom_count("Studio"), 0.0);
        assert_eq!(bathroom_count("N/A"), 0.0);
    }

    #[test]
    fn test_token_table_covers_both_rooms() {
        assert!(tokens_for(Room::Bedroom).contains(&"br"));
        assert!(tokens_for(Room::Bathroom).contains(&"ba"));
    }
}
