use std::collections::HashMap;

use super::record::LedgerRecord;

/// In-memory lookup of ledger records by invoice number.
///
/// Lookups are exact (byte-wise, no trimming or case folding). When several
/// records share an invoice number the first one loaded wins.
#[derive(Debug, Default, Clone)]
pub struct LedgerIndex {
    records: Vec<LedgerRecord>,
    by_invoice: HashMap<String, usize>,
}

impl LedgerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<LedgerRecord>) -> Self {
        let mut index = Self::new();
        index.extend(records);
        index
    }

    /// Append records, keeping earlier entries for duplicate numbers
    pub(crate) fn extend(&mut self, records: Vec<LedgerRecord>) {
        self.records.reserve(records.len());
        for record in records {
            let position = self.records.len();
            if let Some(number) = record.invoice_number() {
                self.by_invoice.entry(number.to_string()).or_insert(position);
            }
            self.records.push(record);
        }
    }

    pub fn contains(&self, invoice_number: &str) -> bool {
        self.by_invoice.contains_key(invoice_number)
    }

    pub fn find(&self, invoice_number: &str) -> Option<&LedgerRecord> {
        self.by_invoice
            .get(invoice_number)
            .map(|&position| &self.records[position])
    }

    /// Number of records loaded, including rows without an invoice number
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct invoice numbers
    pub fn invoice_count(&self) -> usize {
        self.by_invoice.len()
    }
}
