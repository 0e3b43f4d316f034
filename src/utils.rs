//! Small text helpers shared across the parsing pipeline.

use itertools::Itertools;

/// Collapses every run of whitespace (including line breaks) to a single
/// space and trims the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  complete \n  sequence\tof\r\n a plasmid "),
            "complete sequence of a plasmid"
        );
        assert_eq!(normalize_whitespace("   \n \t"), "");
    }
}
