/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Field validators.
//!
//! Every function here takes the raw value of one key and either returns it
//! in validated form or explains what is wrong with it. Optional values that
//! are absent are passed through as `None` without being looked at.

use cff_date::Date;
use url::Url;

use crate::error::{ValidationError, ValidationKind};
use crate::reference::{ReferenceStatus, ReferenceType};
use crate::tables;

/// The record type whose required keys are being checked; used to phrase messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    Citation,
    Reference,
    Person,
    Entity,
}

impl Record {
    fn scope(self) -> &'static str {
        match self {
            Record::Citation => "",
            Record::Reference => " in references",
            Record::Person => " in persons",
            Record::Entity => " in entities",
        }
    }
}

/// Whose URL is being checked, so that a failure can say where it happened.
#[derive(Debug, Clone, Copy)]
pub enum UrlOwner<'a> {
    Citation { title: &'a str },
    Reference { title: &'a str, r#type: ReferenceType },
    Subject,
}

impl UrlOwner<'_> {
    fn message(&self, field: &str, value: &str) -> String {
        match self {
            UrlOwner::Citation { title } => format!(
                "The citation metadata for '{title}' contains an invalid URL in field '{field}'!"
            ),
            UrlOwner::Reference { title, r#type } => format!(
                "The reference '{title}' of type '{}' contains an invalid URL in field '{field}'!",
                r#type.as_str()
            ),
            UrlOwner::Subject => format!("The '{field}' URL '{value}' is not valid."),
        }
    }
}

fn missing(field: &'static str, record: Record) -> ValidationError {
    ValidationError::new(
        ValidationKind::Missing,
        format!(
            "'{field}' is a required key{} and must be present and not null!",
            record.scope()
        ),
    )
    .field(field)
}

/// A required scalar must be present.
pub fn required<T>(value: Option<T>, field: &'static str, record: Record) -> Result<T, ValidationError> {
    value.ok_or_else(|| missing(field, record))
}

/// A required list must be present and hold at least one element.
pub fn non_empty<T>(
    value: Option<Vec<T>>,
    field: &'static str,
    record: Record,
) -> Result<Vec<T>, ValidationError> {
    match value {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(missing(field, record)),
    }
}

/// `cff-version` must be exactly the supported version.
pub fn cff_version(value: Option<String>, supported: &str) -> Result<String, ValidationError> {
    let version = required(value, "cff-version", Record::Citation)?;
    if version != supported {
        return Err(ValidationError::new(
            ValidationKind::Undefined,
            format!("'cff-version' must be {supported}!"),
        )
        .field("cff-version"));
    }
    Ok(version)
}

/// A required date, already known to be present.
pub fn parse_date(value: &str, field: &'static str) -> Result<Date, ValidationError> {
    cff_date::parse(value).map_err(|e| {
        ValidationError::new(
            ValidationKind::Date,
            format!("The value '{value}' in field '{field}' is not a valid calendar date!"),
        )
        .field(field)
        .caused_by(e)
    })
}

pub fn date(value: Option<&str>, field: &'static str) -> Result<Option<Date>, ValidationError> {
    value.map(|v| parse_date(v, field)).transpose()
}

pub fn url(
    value: Option<&str>,
    field: &'static str,
    owner: UrlOwner<'_>,
) -> Result<Option<Url>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    Url::parse(value).map(Some).map_err(|e| {
        ValidationError::new(ValidationKind::Url, owner.message(field, value))
            .field(field)
            .caused_by(e)
    })
}

/// ORCID iDs must match the ORCID URL pattern first, and only then parse as a URL.
pub fn orcid(value: Option<&str>) -> Result<Option<Url>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if !tables::is_orcid(value) {
        return Err(ValidationError::new(
            ValidationKind::Pattern,
            format!(
                "ORCID id {value} is not a valid ORCID URL with pattern \
                 'https://orcid.org/[0-9]{{4}}-[0-9]{{4}}-[0-9]{{4}}-[0-9]{{4}}'!"
            ),
        )
        .field("orcid"));
    }
    Url::parse(value).map(Some).map_err(|e| {
        ValidationError::new(
            ValidationKind::Url,
            format!("The ORCID URL '{value}' is not valid!"),
        )
        .field("orcid")
        .caused_by(e)
    })
}

pub fn country(value: Option<String>) -> Result<Option<String>, ValidationError> {
    match value {
        Some(code) if !tables::is_country(&code) => Err(ValidationError::new(
            ValidationKind::Undefined,
            format!("'country' value '{code}' is not a valid ISO 3166-1 alpha-2 code."),
        )
        .field("country")),
        other => Ok(other),
    }
}

/// Every language must be a known ISO 639-1 or 639-3 code; the first one that
/// is not fails the whole list.
pub fn languages(value: Option<Vec<String>>) -> Result<Vec<String>, ValidationError> {
    let languages = value.unwrap_or_default();
    if let Some(bad) = languages.iter().find(|l| !tables::is_language(l)) {
        return Err(ValidationError::new(
            ValidationKind::Undefined,
            format!("The language '{bad}' is not a valid ISO 639-1 or 639-3 code."),
        )
        .field("languages"));
    }
    Ok(languages)
}

pub fn reference_type(value: Option<String>) -> Result<ReferenceType, ValidationError> {
    let value = required(value, "type", Record::Reference)?;
    value.parse().map_err(|_| {
        ValidationError::new(
            ValidationKind::Undefined,
            format!("The reference type '{value}' is not defined in the CFF format specifications."),
        )
        .field("type")
    })
}

pub fn reference_status(value: Option<String>) -> Result<Option<ReferenceStatus>, ValidationError> {
    let Some(value) = value else {
        return Ok(None);
    };
    value.parse().map(Some).map_err(|_| {
        ValidationError::new(
            ValidationKind::Undefined,
            format!("The status '{value}' is not defined in the CFF format specifications."),
        )
        .field("status")
    })
}
