use crate::error::Result;
use crate::interfaces::record::BillRecord;
use std::io::Read;

/// Reads a JSON array of bill records from any `Read` source.
pub fn read_bills<R: Read>(source: R) -> Result<Vec<BillRecord>> {
    let records = serde_json::from_reader(source)?;
    Ok(records)
}
