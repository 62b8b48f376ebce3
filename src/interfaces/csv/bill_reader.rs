use crate::error::{QrBillError, Result};
use crate::interfaces::record::BillRecord;
use std::io::Read;

/// Reads bill records from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<BillRecord>`.
/// Whitespace trimming and flexible record lengths are handled automatically.
pub struct BillReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> BillReader<R> {
    /// Creates a new `BillReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes bill records.
    pub fn bills(self) -> impl Iterator<Item = Result<BillRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(QrBillError::from))
    }
}
