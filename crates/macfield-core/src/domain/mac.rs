/// Returns true when the input is a syntactically valid MAC address in one of
/// the accepted shapes: six two-hex-digit groups where every separator is
/// independently `:` or `-` (so mixed styles pass), or twelve contiguous hex
/// digits. Case-insensitive; whitespace anywhere in the input is ignored.
pub fn is_valid_mac(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    is_grouped_mac(&compact) || is_bare_mac(&compact)
}

fn is_grouped_mac(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 17 {
        return false;
    }
    for (index, byte) in bytes.iter().enumerate() {
        if index % 3 == 2 {
            if *byte != b':' && *byte != b'-' {
                return false;
            }
        } else if !byte.is_ascii_hexdigit() {
            return false;
        }
    }
    true
}

fn is_bare_mac(value: &str) -> bool {
    value.len() == 12 && value.bytes().all(|byte| byte.is_ascii_hexdigit())
}

/// Normalizes a raw MAC value for storage: strips every character that is not
/// a hex digit, uppercases the rest, and regroups into the canonical
/// `XX:XX:XX:XX:XX:XX` form when exactly twelve digits remain.
///
/// Total by design. Input that does not strip down to twelve digits comes
/// back stripped and uppercased but ungrouped; callers that need the
/// canonical guarantee must check `is_valid_mac` first.
pub fn normalize_mac(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|ch| ch.to_ascii_uppercase())
        .collect();
    if stripped.len() != 12 {
        return stripped;
    }

    let mut out = String::with_capacity(17);
    for (index, ch) in stripped.chars().enumerate() {
        if index > 0 && index % 2 == 0 {
            out.push(':');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{is_valid_mac, normalize_mac};

    #[test]
    fn is_valid_mac_accepts_colon_and_dash_groups() {
        assert!(is_valid_mac("AA:BB:CC:DD:EE:FF"));
        assert!(is_valid_mac("AA-BB-CC-DD-EE-FF"));
    }

    #[test]
    fn is_valid_mac_accepts_mixed_separators() {
        assert!(is_valid_mac("AA:BB-CC:DD-EE:FF"));
    }

    #[test]
    fn is_valid_mac_accepts_bare_digits() {
        assert!(is_valid_mac("AABBCCDDEEFF"));
        assert!(is_valid_mac("aabbccddeeff"));
    }

    #[test]
    fn is_valid_mac_is_case_insensitive() {
        assert!(is_valid_mac("aa:bb:cc:dd:ee:ff"));
        assert!(is_valid_mac("Aa:bB:cC:Dd:Ee:fF"));
    }

    #[test]
    fn is_valid_mac_ignores_whitespace() {
        assert!(is_valid_mac("  AA:BB:CC:DD:EE:FF  "));
        assert!(is_valid_mac("AA: BB:CC:DD:EE:FF"));
        assert!(is_valid_mac("  aa bb cc dd ee ff  "));
    }

    #[test]
    fn is_valid_mac_rejects_short_and_long_inputs() {
        assert!(!is_valid_mac("AA:BB:CC:DD:EE"));
        assert!(!is_valid_mac("AA:BB:CC:DD:EE:FF:00"));
        assert!(!is_valid_mac("AABBCCDDEEF"));
        assert!(!is_valid_mac("AABBCCDDEEFF0"));
    }

    #[test]
    fn is_valid_mac_rejects_non_hex_characters() {
        assert!(!is_valid_mac("GG:BB:CC:DD:EE:FF"));
        assert!(!is_valid_mac("not-a-mac"));
    }

    #[test]
    fn is_valid_mac_rejects_wrong_grouping() {
        assert!(!is_valid_mac("AAB:BCC:DDE:EFF"));
        assert!(!is_valid_mac("AA:BB:CC:DD:EE:F:F"));
    }

    #[test]
    fn is_valid_mac_rejects_empty_and_blank() {
        assert!(!is_valid_mac(""));
        assert!(!is_valid_mac("   "));
    }

    #[test]
    fn normalize_mac_regroups_bare_digits() {
        assert_eq!(normalize_mac("aabbccddeeff"), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn normalize_mac_unifies_separator_styles() {
        assert_eq!(normalize_mac("AA-bb-CC-dd-EE-ff"), "AA:BB:CC:DD:EE:FF");
        assert_eq!(normalize_mac("aa:bb-cc:dd-ee:ff"), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn normalize_mac_is_idempotent_on_canonical_input() {
        let canonical = normalize_mac("aabbccddeeff");
        assert_eq!(normalize_mac(&canonical), canonical);
    }

    #[test]
    fn normalize_mac_strips_whitespace() {
        assert_eq!(normalize_mac("  aa bb cc dd ee ff  "), "AA:BB:CC:DD:EE:FF");
    }

    #[test]
    fn normalize_mac_leaves_wrong_length_input_ungrouped() {
        assert_eq!(normalize_mac("AA:BB:CC"), "AABBCC");
        assert_eq!(normalize_mac("not-a-mac"), "AAC");
        assert_eq!(normalize_mac(""), "");
    }
}
