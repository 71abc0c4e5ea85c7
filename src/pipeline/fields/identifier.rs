/// Format an NHS number as `XXX XXX XXXX` when exactly ten digits are
/// present; any other input is returned unchanged.
pub fn normalize_nhs_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return raw.to_string();
    }
    format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Modulus-11 check digit test. Only ever used to warn: a failed check
/// never alters or drops the value.
pub fn nhs_number_checksum_valid(raw: &str) -> bool {
    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 10 {
        return false;
    }

    let sum: u32 = digits[..9]
        .iter()
        .zip((2..=10).rev())
        .map(|(d, w)| d * w)
        .sum();
    let check = match 11 - (sum % 11) {
        11 => 0,
        10 => return false,
        c => c,
    };
    check == digits[9]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_digits_are_grouped() {
        assert_eq!(normalize_nhs_number("1234567890"), "123 456 7890");
        assert_eq!(normalize_nhs_number("123-456-7890"), "123 456 7890");
    }

    #[test]
    fn other_lengths_pass_through() {
        assert_eq!(normalize_nhs_number("12-34-5"), "12-34-5");
        assert_eq!(normalize_nhs_number("unknown"), "unknown");
    }

    #[test]
    fn checksum() {
        assert!(nhs_number_checksum_valid("943 476 5919"));
        assert!(!nhs_number_checksum_valid("943 476 5918"));
        // check digit would be 10
        assert!(!nhs_number_checksum_valid("1234567890"));
        assert!(!nhs_number_checksum_valid("12345"));
    }
}
