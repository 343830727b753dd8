//! Invoice-number convention for PDF file names
//!
//! The invoice number is the 8 characters right before the `.pdf` suffix:
//! `RE-2024-12345678.pdf` carries `12345678`. The slice is not validated, so
//! any 8 characters are taken as-is.

pub const INVOICE_NUMBER_LEN: usize = 8;
pub const PDF_SUFFIX: &str = ".pdf";

/// Shortest file name that can carry an invoice number
pub const MIN_NAME_LEN: usize = INVOICE_NUMBER_LEN + PDF_SUFFIX.len();

/// Extract the invoice number from a PDF file name.
///
/// Returns `None` when the name does not end in `.pdf` or has fewer than
/// [`MIN_NAME_LEN`] characters. Counting is by character, not byte.
pub fn extract_invoice_number(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(PDF_SUFFIX)?;
    let (start, _) = stem.char_indices().rev().nth(INVOICE_NUMBER_LEN - 1)?;
    Some(&stem[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_eight_chars_before_suffix() {
        assert_eq!(extract_invoice_number("INV-12345678.pdf"), Some("12345678"));
        assert_eq!(extract_invoice_number("12345678.pdf"), Some("12345678"));
        assert_eq!(
            extract_invoice_number("Rechnung Kunde 4711 RE-00012345.pdf"),
            Some("00012345")
        );
    }

    #[test]
    fn test_slice_is_not_validated() {
        assert_eq!(extract_invoice_number("scan-ab_cd-ef.pdf"), Some("ab_cd-ef"));
    }

    #[test]
    fn test_matches_positional_slice_for_ascii_names() {
        for name in ["0000000000000.pdf", "abcdefgh.pdf", "x-y-z-1-2-3-4-5-6.pdf"] {
            let len = name.len();
            assert!(len >= MIN_NAME_LEN);
            assert_eq!(extract_invoice_number(name), Some(&name[len - 12..len - 4]));
        }
    }

    #[test]
    fn test_short_names_are_rejected() {
        assert_eq!(MIN_NAME_LEN, 12);
        assert_eq!(extract_invoice_number("x.pdf"), None);
        assert_eq!(extract_invoice_number(".pdf"), None);
        assert_eq!(extract_invoice_number("1234.pdf"), None);
        assert_eq!(extract_invoice_number("1234567.pdf"), None);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(extract_invoice_number("Ü-Größe1234.pdf"), Some("röße1234"));
        assert_eq!(extract_invoice_number("Größe12.pdf"), None);
    }

    #[test]
    fn test_requires_lowercase_pdf_suffix() {
        assert_eq!(extract_invoice_number("INV-12345678.PDF"), None);
        assert_eq!(extract_invoice_number("INV-12345678.csv"), None);
    }
}
