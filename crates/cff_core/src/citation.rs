/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! The root record of a `CITATION.cff` document.

use cff_date::Date;
use serde::Serialize;
use url::Url;

use crate::error::Result;
use crate::raw::RawCitation;
use crate::reference::Reference;
use crate::subject::{self, Subject};
use crate::validate::{self, Record, UrlOwner};

/// The only `cff-version` this crate reads.
pub const CFF_VERSION: &str = "1.0.3";

/// Citation metadata for one piece of software.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Citation {
    cff_version: String,
    message: String,
    authors: Vec<Subject>,
    date_released: Date,
    title: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#abstract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    contact: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doi: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository_code: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository_artifact: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    references: Vec<Reference>,
}

impl Citation {
    /// Validate a raw document, failing on the first broken rule.
    ///
    /// Required keys come first, then authors and contacts are built, then
    /// `date-released` and the URLs are checked, then the references.
    pub fn from_raw(raw: RawCitation) -> Result<Self> {
        let cff_version = validate::cff_version(raw.cff_version, CFF_VERSION)?;
        let message = validate::required(raw.message, "message", Record::Citation)?;
        let authors = validate::non_empty(raw.authors, "authors", Record::Citation)?;
        let date_released =
            validate::required(raw.date_released, "date-released", Record::Citation)?;
        let title = validate::required(raw.title, "title", Record::Citation)?;
        let version = validate::required(raw.version, "version", Record::Citation)?;

        let authors = subject::resolve_all(Some(authors))?;
        let contact = subject::resolve_all(raw.contact)?;

        let date_released = validate::parse_date(&date_released, "date-released")?;
        let owner = UrlOwner::Citation { title: &title };
        let license_url = validate::url(raw.license_url.as_deref(), "license-url", owner)?;
        let repository = validate::url(raw.repository.as_deref(), "repository", owner)?;
        let repository_code =
            validate::url(raw.repository_code.as_deref(), "repository-code", owner)?;
        let repository_artifact = validate::url(
            raw.repository_artifact.as_deref(),
            "repository-artifact",
            owner,
        )?;
        let url = validate::url(raw.url.as_deref(), "url", owner)?;

        let references = raw
            .references
            .unwrap_or_default()
            .into_iter()
            .map(Reference::from_raw)
            .collect::<Result<Vec<_>>>()?;

        Ok(Citation {
            cff_version,
            message,
            authors,
            date_released,
            title,
            version,
            r#abstract: raw.r#abstract,
            commit: raw.commit,
            contact,
            doi: raw.doi,
            keywords: raw.keywords.unwrap_or_default(),
            license: raw.license,
            license_url,
            repository,
            repository_code,
            repository_artifact,
            url,
            references,
        })
    }

    pub fn cff_version(&self) -> &str {
        &self.cff_version
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn date_released(&self) -> Date {
        self.date_released
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

getters!(Citation {
    slice authors: Subject,
    str r#abstract: String,
    str commit: String,
    slice contact: Subject,
    str doi: String,
    slice keywords: String,
    str license: String,
    opt license_url: Url,
    opt repository: Url,
    opt repository_code: Url,
    opt repository_artifact: Url,
    opt url: Url,
    slice references: Reference,
});

subject_views!(Citation {
    authors => person_authors, entity_authors;
    contact => person_contacts, entity_contacts;
});
