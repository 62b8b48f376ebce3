pub mod bill_reader;
