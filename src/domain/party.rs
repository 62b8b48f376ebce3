use serde::{Deserialize, Serialize};

/// Read access to the contact fields shared by both bill parties.
///
/// The encoder renders both address blocks through this trait so the two
/// roles stay distinct types without duplicating the serialization logic.
pub trait ContactInfo {
    fn name(&self) -> &str;
    fn street(&self) -> &str;
    fn zip_code(&self) -> &str;
    fn city(&self) -> &str;
    fn country(&self) -> &str;
}

/// The party receiving the payment (payee).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creditor {
    pub name: String,
    pub street: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

/// The party paying the bill (payer).
///
/// Same field set as [`Creditor`], but a separate type so the two roles
/// cannot be swapped accidentally when constructing a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debtor {
    pub name: String,
    pub street: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

impl Creditor {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street: street.into(),
            zip_code: zip_code.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

impl Debtor {
    pub fn new(
        name: impl Into<String>,
        street: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            street: street.into(),
            zip_code: zip_code.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}

impl ContactInfo for Creditor {
    fn name(&self) -> &str {
        &self.name
    }
    fn street(&self) -> &str {
        &self.street
    }
    fn zip_code(&self) -> &str {
        &self.zip_code
    }
    fn city(&self) -> &str {
        &self.city
    }
    fn country(&self) -> &str {
        &self.country
    }
}

impl ContactInfo for Debtor {
    fn name(&self) -> &str {
        &self.name
    }
    fn street(&self) -> &str {
        &self.street
    }
    fn zip_code(&self) -> &str {
        &self.zip_code
    }
    fn city(&self) -> &str {
        &self.city
    }
    fn country(&self) -> &str {
        &self.country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_info_accessors() {
        let creditor = Creditor::new("Max Mustermann", "Musterstrasse 37", "6000", "Luzern", "CH");
        assert_eq!(creditor.name(), "Max Mustermann");
        assert_eq!(creditor.zip_code(), "6000");
        assert_eq!(creditor.country(), "CH");
    }
}
