//! Output file naming

/// Name used when redacted text is written to disk.
pub const TEXT_OUTPUT_NAME: &str = "redacted_output.txt";

/// Derive the output name for a redacted file: `claims.csv` becomes
/// `claims_redacted.csv`. A name without an extension gets the suffix
/// appended.
pub fn redacted_file_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}_redacted.{ext}"),
        _ => format!("{name}_redacted"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_goes_before_extension() {
        assert_eq!(redacted_file_name("claims.csv"), "claims_redacted.csv");
        assert_eq!(redacted_file_name("report.pdf"), "report_redacted.pdf");
        assert_eq!(redacted_file_name("letter.docx"), "letter_redacted.docx");
    }

    #[test]
    fn test_inner_dots_are_kept() {
        assert_eq!(redacted_file_name("q3.claims.csv"), "q3.claims_redacted.csv");
    }

    #[test]
    fn test_name_without_extension() {
        assert_eq!(redacted_file_name("claims"), "claims_redacted");
    }
}
