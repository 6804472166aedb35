use crate::pass::CharsetSpec;

use super::parse::ParseError;

/// Parsed command-line options for batch mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub space: bool,
    pub additional: String,
    pub blacklist: String,
    pub length: Option<usize>,
    pub amount: Option<usize>,
    pub max_duplicates: Option<usize>,
}

impl CliFlags {
    /// Reject requests that could never produce a password: a length is
    /// required, and at least one character source must be selected.
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.length.is_none() {
            return Err(ParseError::MissingLength);
        }
        if !self.charset_spec().has_sources() {
            return Err(ParseError::NoCharacterSources);
        }
        Ok(())
    }

    /// Snapshot the charset-relevant flags into the core's config struct.
    pub fn charset_spec(&self) -> CharsetSpec {
        CharsetSpec {
            upper: self.upper,
            lower: self.lower,
            digits: self.digits,
            punctuation: self.punctuation,
            space: self.space,
            additional: self.additional.clone(),
            blacklist: self.blacklist.clone(),
        }
    }
}
