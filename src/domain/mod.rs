pub mod bill;
pub mod iban;
pub mod party;
pub mod ports;
