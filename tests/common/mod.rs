use std::io::Error;
use std::path::Path;

pub const CSV_HEADER: [&str; 16] = [
    "iban",
    "creditor_name",
    "creditor_street",
    "creditor_zip",
    "creditor_city",
    "creditor_country",
    "debtor_name",
    "debtor_street",
    "debtor_zip",
    "debtor_city",
    "debtor_country",
    "amount",
    "currency",
    "reference_type",
    "reference",
    "additional_info",
];

/// Writes a bills CSV with the standard header and the given rows.
pub fn write_bills_csv(path: &Path, rows: &[[&str; 16]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// A valid row for the Mustermann/Alexis sample bill.
pub fn sample_row() -> [&'static str; 16] {
    [
        "CH9300762011623852957",
        "Max Mustermann",
        "Musterstrasse 37",
        "6000",
        "Luzern",
        "CH",
        "Alexandra Alexis",
        "Musterweg 1",
        "8000",
        "Zürich",
        "CH",
        "199.95",
        "CHF",
        "",
        "",
        "Invoice 123",
    ]
}
