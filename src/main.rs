use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use qrbill::application::encoder::{EncoderMode, PayloadEncoder};
use qrbill::domain::bill::QrBill;
use qrbill::interfaces::csv::bill_reader::BillReader;
use qrbill::interfaces::json;
use qrbill::interfaces::record::BillRecord;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with bill records
    input: PathBuf,

    /// Input file format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Reference-line behavior of the encoder
    #[arg(long, value_enum, default_value_t = Mode::Compat)]
    mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Always emit `NON` and an empty reference line
    Compat,
    /// Emit the declared reference kind and reference text
    Standard,
}

impl From<Mode> for EncoderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Compat => EncoderMode::Compat,
            Mode::Standard => EncoderMode::Standard,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let encoder = PayloadEncoder::new(cli.mode.into());

    let file = File::open(&cli.input).into_diagnostic()?;
    match cli.format {
        Format::Csv => {
            for record in BillReader::new(file).bills() {
                emit(&encoder, record.and_then(BillRecord::into_bill));
            }
        }
        Format::Json => {
            for record in json::read_bills(file).into_diagnostic()? {
                emit(&encoder, record.into_bill());
            }
        }
    }

    Ok(())
}

fn emit(encoder: &PayloadEncoder, bill: qrbill::error::Result<QrBill>) {
    match bill {
        Ok(bill) => println!("{}", encoder.encode(&bill)),
        Err(e) => eprintln!("Error reading bill: {e}"),
    }
}
