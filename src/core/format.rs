//! Cell display formatting

/// Replace every underscore in a cell with a comma.
///
/// Source data often encodes thousand separators as underscores so the
/// values survive CSV quoting; rendering swaps them back. This is a display
/// substitution, not a numeric parse: it applies uniformly to any cell
/// regardless of content, and removing all underscores in one pass makes it
/// idempotent.
pub fn format_cell(cell: &str) -> String {
    cell.replace('_', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_numbers() {
        let cases = [
            ("6_692_587.586946 XRP", "6,692,587.586946 XRP"),
            ("350_491.824569 XRP", "350,491.824569 XRP"),
            ("XRP 6_692_587.586946", "XRP 6,692,587.586946"),
            ("No_underscores_here", "No,underscores,here"),
        ];
        for (input, expected) in cases {
            assert_eq!(format_cell(input), expected);
        }
    }

    #[test]
    fn test_no_underscores_unchanged() {
        assert_eq!(format_cell("Alice"), "Alice");
        assert_eq!(format_cell(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = format_cell("1_000_000");
        assert_eq!(format_cell(&once), once);
    }
}
