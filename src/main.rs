use clap::Parser;
use log::{debug, info};
use shareable_codes::{decode, encode, MAX_NUMBER};
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;

/// Turn reference numbers into short shareable codes and back.
///
/// Reads one entry per line from INPUT, or from stdin when no file is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    input: Option<String>,

    /// Read codes and print the numbers they stand for
    #[arg(short, long, conflicts_with = "encode")]
    decode: bool,

    /// Read numbers and print their codes (default)
    #[arg(short, long)]
    encode: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

#[derive(thiserror::Error, Debug)]
enum EntryError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("'{0}' must be 8 or 9 characters long")]
    InvalidLength(String),

    #[error("'{0}' does not stand for a reference number")]
    Zero(String),

    #[error(transparent)]
    Codec(#[from] shareable_codes::Error),
}

fn encode_entry(entry: &str) -> Result<String, EntryError> {
    let n: i64 = entry
        .parse()
        .map_err(|_| EntryError::NotANumber(entry.to_owned()))?;
    if n < 1 || n >= MAX_NUMBER {
        return Err(shareable_codes::Error::OutOfRange(n).into());
    }
    Ok(encode(n)?)
}

fn decode_entry(entry: &str) -> Result<String, EntryError> {
    // A formatted code, with or without its dash. Codes padded to six
    // symbols ("YYYY-BN") are shorter and get turned away here.
    if !(8..=9).contains(&entry.chars().count()) {
        return Err(EntryError::InvalidLength(entry.to_owned()));
    }
    match decode(entry)? {
        0 => Err(EntryError::Zero(entry.to_owned())),
        n => Ok(n.to_string()),
    }
}

/// Converts every non-blank line of `reader` and returns how many failed.
fn run<R: BufRead, W: Write, E: Write>(
    reader: R,
    writer: &mut W,
    errors: &mut E,
    mode: Mode,
) -> io::Result<usize> {
    let mut failed = 0;
    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }

        let result = match mode {
            Mode::Encode => encode_entry(entry),
            Mode::Decode => decode_entry(entry),
        };
        match result {
            Ok(output) => writeln!(writer, "{output}")?,
            Err(err) => {
                debug!("{mode:?} failed for {entry:?}: {err:?}");
                writeln!(errors, "shareable-codes: {err}")?;
                failed += 1;
            }
        }
    }
    writer.flush()?;
    Ok(failed)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let reader = {
        if let Some(ref path) = args.input {
            Box::new(BufReader::new(match File::open(path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("shareable-codes: cannot open {path}: {err}");
                    return ExitCode::FAILURE;
                }
            })) as Box<dyn BufRead>
        } else {
            Box::new(BufReader::new(io::stdin())) as Box<dyn BufRead>
        }
    };

    let mode = match (args.encode, args.decode) {
        (false, true) => Mode::Decode,
        _ => Mode::Encode,
    };
    let mut writer = BufWriter::new(io::stdout());

    match run(reader, &mut writer, &mut io::stderr(), mode) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            info!("{failed} entries could not be converted");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("shareable-codes: {err}");
            ExitCode::FAILURE
        }
    }
}
