use crate::domain::bill::{Amount, QrBill, ReferenceKind};
use crate::domain::iban::Iban;
use crate::domain::party::{Creditor, Debtor};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A flat, serde-friendly bill record as it appears in input files.
///
/// Converting into a [`QrBill`] is the fallible step: it runs the IBAN
/// checksum and the positive-amount check. Optional columns left empty
/// deserialize as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    pub iban: String,
    pub creditor_name: String,
    pub creditor_street: String,
    pub creditor_zip: String,
    pub creditor_city: String,
    pub creditor_country: String,
    pub debtor_name: String,
    pub debtor_street: String,
    pub debtor_zip: String,
    pub debtor_city: String,
    pub debtor_country: String,
    pub amount: Decimal,
    pub currency: String,
    #[serde(default)]
    pub reference_type: Option<ReferenceKind>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

impl BillRecord {
    /// Builds the validated aggregate from the raw record.
    pub fn into_bill(self) -> Result<QrBill> {
        let account = Iban::parse(&self.iban)?;
        let amount = Amount::new(self.amount)?;

        Ok(QrBill::new(
            account,
            Creditor::new(
                self.creditor_name,
                self.creditor_street,
                self.creditor_zip,
                self.creditor_city,
                self.creditor_country,
            ),
            Debtor::new(
                self.debtor_name,
                self.debtor_street,
                self.debtor_zip,
                self.debtor_city,
                self.debtor_country,
            ),
            amount,
            self.currency,
            self.reference_type.unwrap_or_default(),
            self.reference,
            self.additional_info,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QrBillError;
    use rust_decimal_macros::dec;

    fn sample_record() -> BillRecord {
        BillRecord {
            iban: "CH9300762011623852957".to_string(),
            creditor_name: "Max Mustermann".to_string(),
            creditor_street: "Musterstrasse 37".to_string(),
            creditor_zip: "6000".to_string(),
            creditor_city: "Luzern".to_string(),
            creditor_country: "CH".to_string(),
            debtor_name: "Alexandra Alexis".to_string(),
            debtor_street: "Musterweg 1".to_string(),
            debtor_zip: "8000".to_string(),
            debtor_city: "Zürich".to_string(),
            debtor_country: "CH".to_string(),
            amount: dec!(199.95),
            currency: "CHF".to_string(),
            reference_type: None,
            reference: None,
            additional_info: Some("Invoice 123".to_string()),
        }
    }

    #[test]
    fn test_record_into_bill() {
        let bill = sample_record().into_bill().unwrap();
        assert_eq!(bill.account.value(), "CH9300762011623852957");
        assert_eq!(bill.reference_kind, ReferenceKind::Non);
        assert_eq!(bill.additional_info.as_deref(), Some("Invoice 123"));
    }

    #[test]
    fn test_record_rejects_bad_iban() {
        let mut record = sample_record();
        record.iban = "CH9300762011623852958".to_string();
        assert!(matches!(
            record.into_bill(),
            Err(QrBillError::InvalidIban(_))
        ));
    }

    #[test]
    fn test_record_rejects_non_positive_amount() {
        let mut record = sample_record();
        record.amount = dec!(0);
        assert!(matches!(
            record.into_bill(),
            Err(QrBillError::Validation(_))
        ));
    }
}
