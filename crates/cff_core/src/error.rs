/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Error types for reading and validating CFF data.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Which rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// A required key is absent or null.
    Missing,
    /// A value is not an ISO 8601 calendar date.
    Date,
    /// A value is not a URL.
    Url,
    /// A value does not match a fixed pattern (ORCID iDs).
    Pattern,
    /// A value is not in the fixed set allowed for its key.
    Undefined,
}

/// Coarse grouping of [`ValidationKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCategory {
    Presence,
    Format,
    EnumMembership,
}

impl ValidationKind {
    pub fn category(self) -> ValidationCategory {
        match self {
            ValidationKind::Missing => ValidationCategory::Presence,
            ValidationKind::Date | ValidationKind::Url | ValidationKind::Pattern => {
                ValidationCategory::Format
            }
            ValidationKind::Undefined => ValidationCategory::EnumMembership,
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationKind::Missing => "missing value",
            ValidationKind::Date => "invalid date",
            ValidationKind::Url => "invalid URL",
            ValidationKind::Pattern => "pattern mismatch",
            ValidationKind::Undefined => "undefined value",
        };
        f.write_str(name)
    }
}

/// A field-level rule violation found while building a record.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationKind,
    field: Option<&'static str>,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationKind, message: impl Into<String>) -> Self {
        ValidationError {
            kind,
            field: None,
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub(crate) fn caused_by(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ValidationKind {
        self.kind
    }

    /// The CFF key the failing value belongs to, if the rule is tied to one.
    pub fn field_name(&self) -> Option<&'static str> {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A string that is not a member of a closed value set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a known {set}")]
pub struct UnknownValue {
    set: &'static str,
    value: String,
}

impl UnknownValue {
    pub(crate) fn new(set: &'static str, value: &str) -> Self {
        UnknownValue {
            set,
            value: value.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Everything that can go wrong reading a CFF document.
#[derive(Debug, Error)]
pub enum Error {
    /// A file was given whose base name is not `CITATION.cff`.
    #[error("{0}")]
    FileName(String),

    /// The document parsed but its data breaks the format's rules.
    #[error(transparent)]
    DataValidation(#[from] ValidationError),

    /// The input could not be read or does not have the shape of a CFF document.
    #[error("{message}: {source}")]
    ReadFailure {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    pub(crate) fn read_failure(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::ReadFailure {
            message: message.into(),
            source: source.into(),
        }
    }

    /// The validation error, if this is a data validation failure.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::DataValidation(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
