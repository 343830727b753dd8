/// One row of the open-items export.
///
/// Columns are positional and unvalidated:
///
/// | index | meaning        |
/// |-------|----------------|
/// | 1     | account number |
/// | 3     | invoice number |
/// | 6     | debit          |
/// | 7     | credit         |
/// | 8     | balance        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRecord {
    fields: Vec<String>,
}

pub const ACCOUNT_FIELD: usize = 1;
pub const INVOICE_NUMBER_FIELD: usize = 3;
pub const DEBIT_FIELD: usize = 6;
pub const CREDIT_FIELD: usize = 7;
pub const BALANCE_FIELD: usize = 8;

impl LedgerRecord {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn account(&self) -> Option<&str> {
        self.field(ACCOUNT_FIELD)
    }

    pub fn invoice_number(&self) -> Option<&str> {
        self.field(INVOICE_NUMBER_FIELD)
    }

    pub fn debit(&self) -> Option<&str> {
        self.field(DEBIT_FIELD)
    }

    pub fn credit(&self) -> Option<&str> {
        self.field(CREDIT_FIELD)
    }

    pub fn balance(&self) -> Option<&str> {
        self.field(BALANCE_FIELD)
    }
}

/// Fields that are not valid UTF-8 are decoded lossily; invoice numbers are
/// plain ASCII and survive unchanged.
impl From<&csv::ByteRecord> for LedgerRecord {
    fn from(record: &csv::ByteRecord) -> Self {
        Self::new(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        )
    }
}

impl<const N: usize> From<[&str; N]> for LedgerRecord {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields.iter().map(|f| f.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_accessors() {
        let record = LedgerRecord::from([
            "1000", "D10042", "Acme GmbH", "12345678", "2025-01-15", "EUR", "119,00", "0,00",
            "119,00",
        ]);

        assert_eq!(record.account(), Some("D10042"));
        assert_eq!(record.invoice_number(), Some("12345678"));
        assert_eq!(record.debit(), Some("119,00"));
        assert_eq!(record.credit(), Some("0,00"));
        assert_eq!(record.balance(), Some("119,00"));
    }

    #[test]
    fn test_short_row() {
        let record = LedgerRecord::from(["1000", "D10042"]);

        assert_eq!(record.account(), Some("D10042"));
        assert_eq!(record.invoice_number(), None);
        assert_eq!(record.balance(), None);
    }

    #[test]
    fn test_latin1_field_is_decoded_lossily() {
        let record = csv::ByteRecord::from(vec![
            &b"1000"[..],
            &b"D1"[..],
            &b"M\xfcller GmbH"[..],
            &b"12345678"[..],
        ]);

        let record = LedgerRecord::from(&record);
        assert_eq!(record.field(2), Some("M\u{FFFD}ller GmbH"));
        assert_eq!(record.invoice_number(), Some("12345678"));
    }
}
