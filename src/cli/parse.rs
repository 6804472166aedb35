use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("missing required password length")]
    MissingLength,
    #[error("enable at least one character class or add custom characters with --additional")]
    NoCharacterSources,
}

/// Parse command-line arguments into flags. `args[0]` is the program name.
/// Pure parsing only; cross-field validation lives on `CliFlags`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--uppercase" => flags.upper = true,
            "-l" | "--lowercase" => flags.lower = true,
            "-d" | "--digits" => flags.digits = true,
            "-p" | "--punctuation" => flags.punctuation = true,
            "-s" | "--space" => flags.space = true,
            "-n" | "--amount" => flags.amount = Some(numeric_value(args, &mut i)?),
            "-m" | "--max-duplicate-chars" => {
                flags.max_duplicates = Some(numeric_value(args, &mut i)?)
            }
            "-a" | "--additional" => flags.additional = string_value(args, &mut i)?,
            "-b" | "--blacklist" => flags.blacklist = string_value(args, &mut i)?,
            arg if !arg.starts_with('-') => {
                // Bare argument: the positional password length.
                if flags.length.is_some() {
                    return Err(ParseError::UnknownArg(arg.to_string()));
                }
                flags.length =
                    Some(arg.parse().map_err(|_| ParseError::InvalidNumber(arg.to_string()))?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn string_value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = args[*i].clone();
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.clone()),
        None => Err(ParseError::MissingValue(flag)),
    }
}

fn numeric_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let value = string_value(args, i)?;
    value.parse().map_err(|_| ParseError::InvalidNumber(value))
}
