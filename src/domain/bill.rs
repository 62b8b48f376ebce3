use crate::domain::iban::Iban;
use crate::domain::party::{Creditor, Debtor};
use crate::error::{QrBillError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A positive monetary amount.
///
/// Wraps `rust_decimal::Decimal` to keep non-positive values out of the
/// aggregate; the payload rendering with exactly two fractional digits lives
/// here as well.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(QrBillError::Validation(
                "amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Formats the amount with exactly two fractional digits and a plain `.`
    /// separator, e.g. `199.95`, never `199.9` or `199.950`.
    ///
    /// Excess precision is rounded half-to-even (banker's rounding), so
    /// `199.953` becomes `199.95` and `0.125` becomes `0.12`.
    pub fn to_payload_string(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        format!("{rounded:.2}")
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = QrBillError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// The declared payment reference scheme.
///
/// `Qrr` is the structured Swiss reference, `Scor` the structured ISO 11649
/// reference, `Non` means no reference. The shape of the reference text is
/// not validated against the declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReferenceKind {
    Qrr,
    Scor,
    #[default]
    Non,
}

impl ReferenceKind {
    /// The wire literal emitted on the reference-type payload line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Qrr => "QRR",
            ReferenceKind::Scor => "SCOR",
            ReferenceKind::Non => "NON",
        }
    }
}

/// A complete payment instruction, ready to be encoded into a payload.
///
/// Built once via [`QrBill::new`] and immutable afterwards. Field-level
/// validation is limited to what [`Iban`] and [`Amount`] already guarantee;
/// currency and reference text are taken as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct QrBill {
    pub account: Iban,
    pub creditor: Creditor,
    pub debtor: Debtor,
    pub amount: Amount,
    pub currency: String,
    pub reference_kind: ReferenceKind,
    pub reference: Option<String>,
    pub additional_info: Option<String>,
}

impl QrBill {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account: Iban,
        creditor: Creditor,
        debtor: Debtor,
        amount: Amount,
        currency: impl Into<String>,
        reference_kind: ReferenceKind,
        reference: Option<String>,
        additional_info: Option<String>,
    ) -> Self {
        Self {
            account,
            creditor,
            debtor,
            amount,
            currency: currency.into(),
            reference_kind,
            reference,
            additional_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(QrBillError::Validation(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-1.0)),
            Err(QrBillError::Validation(_))
        ));
    }

    #[test]
    fn test_amount_two_fractional_digits() {
        assert_eq!(Amount::new(dec!(199.95)).unwrap().to_payload_string(), "199.95");
        assert_eq!(Amount::new(dec!(199.9)).unwrap().to_payload_string(), "199.90");
        assert_eq!(Amount::new(dec!(5)).unwrap().to_payload_string(), "5.00");
    }

    #[test]
    fn test_amount_rounds_half_to_even() {
        assert_eq!(Amount::new(dec!(199.953)).unwrap().to_payload_string(), "199.95");
        assert_eq!(Amount::new(dec!(199.956)).unwrap().to_payload_string(), "199.96");
        // Midpoints go to the even neighbour.
        assert_eq!(Amount::new(dec!(0.125)).unwrap().to_payload_string(), "0.12");
        assert_eq!(Amount::new(dec!(0.135)).unwrap().to_payload_string(), "0.14");
    }

    #[test]
    fn test_reference_kind_literals() {
        assert_eq!(ReferenceKind::Qrr.as_str(), "QRR");
        assert_eq!(ReferenceKind::Scor.as_str(), "SCOR");
        assert_eq!(ReferenceKind::Non.as_str(), "NON");
    }

    #[test]
    fn test_reference_kind_deserializes_from_wire_literal() {
        let kind: ReferenceKind = serde_json::from_str("\"QRR\"").unwrap();
        assert_eq!(kind, ReferenceKind::Qrr);
    }
}
