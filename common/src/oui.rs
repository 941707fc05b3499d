//! Handling of MAC address and OUI search terms.

/// The number of characters of an OUI (24 bits, as hex digits)
pub const OUI_LENGTH: usize = 6;

/// The SQL `LIKE` wildcard users may type into a search term
pub const WILDCARD: char = '%';

/// Strip everything but alphanumeric characters and the wildcard.
///
/// Separators like `:`, `-` or `.` are optional in a MAC address, so `00:1A-2b.3c` becomes
/// `001A2b3c`. A term made up of wildcards only is a "match all", and so is returned as empty.
pub fn strip_separators(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == WILDCARD)
        .collect();

    if stripped.chars().all(|c| c == WILDCARD) {
        String::new()
    } else {
        stripped
    }
}

/// Normalize a MAC address or OUI prefix search term down to its OUI part.
///
/// The result is at most [`OUI_LENGTH`] characters. An empty result means "match all".
pub fn normalize(raw: &str) -> String {
    let stripped = strip_separators(raw);
    let oui: String = stripped.chars().take(OUI_LENGTH).collect();

    // truncating might have cut off everything but wildcards
    strip_separators(&oui)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn separators_and_truncation() {
        assert_eq!("AABBCC", normalize("AA:BB-CC.DD:EE:FF"));
    }

    #[test]
    fn short_prefix() {
        assert_eq!("00000c", normalize(" 00-00-0c "));
    }

    #[test]
    fn empty_matches_all() {
        assert_eq!("", normalize(""));
        assert_eq!("", normalize("%"));
        assert_eq!("", normalize("%%%"));
        assert_eq!("", normalize(":-."));
    }

    #[test]
    fn wildcards_are_kept() {
        assert_eq!("00%0C", normalize("00:%:0C"));
        assert_eq!("%1A", normalize("%1A"));
    }

    #[test]
    fn quotes_are_stripped() {
        assert_eq!("AORB", normalize("A' OR 'B"));
    }

    #[test]
    fn strip_keeps_full_length() {
        assert_eq!("0050C2123", strip_separators("00:50:C2:12:3"));
        assert_eq!("", strip_separators("%"));
    }
}
