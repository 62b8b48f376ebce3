use crate::domain::bill::QrBill;
use crate::domain::party::ContactInfo;

/// Controls how the reference-type and reference lines are emitted.
///
/// The original library this crate replaces always wrote the literal `NON`
/// and an empty reference line, whatever the bill declared — almost certainly
/// a defect against the QR-bill standard, but one existing consumers may rely
/// on. `Compat` reproduces that behavior exactly; `Standard` serializes the
/// declared kind and the reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncoderMode {
    #[default]
    Compat,
    Standard,
}

/// Encodes a [`QrBill`] into the fixed-format Swiss QR-bill payload text.
///
/// Encoding is a total function: it performs no validation and no I/O, and
/// identical input always yields a byte-identical output string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadEncoder {
    mode: EncoderMode,
}

impl PayloadEncoder {
    pub fn new(mode: EncoderMode) -> Self {
        Self { mode }
    }

    /// Produces the payload: 31 lines joined with `\n`, no trailing newline.
    ///
    /// Absent optional fields render as empty lines, never as a placeholder
    /// literal.
    pub fn encode(&self, bill: &QrBill) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(31);

        // Header: format marker, version, coding type.
        lines.push("SPC".to_string());
        lines.push("0200".to_string());
        lines.push("1".to_string());
        lines.push(bill.account.value().to_string());

        push_address_block(&mut lines, &bill.creditor);

        // Ultimate creditor block, unused.
        for _ in 0..7 {
            lines.push(String::new());
        }

        lines.push(bill.amount.to_payload_string());
        lines.push(bill.currency.clone());

        push_address_block(&mut lines, &bill.debtor);

        match self.mode {
            EncoderMode::Compat => {
                lines.push("NON".to_string());
                lines.push(String::new());
            }
            EncoderMode::Standard => {
                lines.push(bill.reference_kind.as_str().to_string());
                lines.push(bill.reference.clone().unwrap_or_default());
            }
        }

        lines.push(bill.additional_info.clone().unwrap_or_default());
        lines.push("EPD".to_string());

        lines.join("\n")
    }
}

/// Combined ("K") address block: type marker, name, street, "zip city", two
/// reserved lines, country.
fn push_address_block(lines: &mut Vec<String>, contact: &impl ContactInfo) {
    lines.push("K".to_string());
    lines.push(contact.name().to_string());
    lines.push(contact.street().to_string());
    lines.push(format!("{} {}", contact.zip_code(), contact.city()));
    lines.push(String::new());
    lines.push(String::new());
    lines.push(contact.country().to_string());
}
