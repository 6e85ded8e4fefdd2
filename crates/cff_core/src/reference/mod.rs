/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! References: other works the software relies on or should be cited with.

mod types;

#[cfg(test)]
mod tests;

pub use types::{ReferenceStatus, ReferenceType};

use cff_date::Date;
use serde::Serialize;
use url::Url;

use crate::error::Result;
use crate::raw::RawReference;
use crate::subject::{self, Entity, Subject, SubjectNode};
use crate::validate::{self, Record, UrlOwner};

fn opt_entity(node: Option<SubjectNode>) -> Result<Option<Entity>> {
    Ok(node.map(SubjectNode::into_entity).transpose()?)
}

/// A validated reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reference {
    r#type: ReferenceType,
    title: String,
    authors: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#abstract: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conference: Option<Entity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    contact: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    copyright: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    database_provider: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_accessed: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_downloaded: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_released: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_published: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    edition: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    editors: Vec<Subject>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    editors_series: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    institution: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    journal: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loc_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loc_end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nihmsid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number_volumes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pages: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    patent_states: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pmcid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publisher: Option<Entity>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    recipients: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository_code: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository_artifact: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    senders: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ReferenceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thesis_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    translators: Vec<Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    volume_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year_original: Option<i64>,
}

impl Reference {
    /// Validate a raw reference.
    ///
    /// Required keys are checked first (`type`, `title`, `authors`). Then
    /// every subject and entity key is built, and then the value formats are
    /// checked, each group in a fixed order. The first violation is returned.
    pub fn from_raw(raw: RawReference) -> Result<Self> {
        let r#type = validate::reference_type(raw.r#type)?;
        let title = validate::required(raw.title, "title", Record::Reference)?;
        let authors = validate::non_empty(raw.authors, "authors", Record::Reference)?;

        let authors = subject::resolve_all(Some(authors))?;
        let conference = opt_entity(raw.conference)?;
        let contact = subject::resolve_all(raw.contact)?;
        let database_provider = opt_entity(raw.database_provider)?;
        let editors = subject::resolve_all(raw.editors)?;
        let editors_series = subject::resolve_all(raw.editors_series)?;
        let institution = opt_entity(raw.institution)?;
        let location = opt_entity(raw.location)?;
        let publisher = opt_entity(raw.publisher)?;
        let recipients = subject::resolve_all(raw.recipients)?;
        let senders = subject::resolve_all(raw.senders)?;
        let translators = subject::resolve_all(raw.translators)?;

        let owner = UrlOwner::Reference {
            title: &title,
            r#type,
        };
        let date_accessed = validate::date(raw.date_accessed.as_deref(), "date-accessed")?;
        let date_downloaded = validate::date(raw.date_downloaded.as_deref(), "date-downloaded")?;
        let date_released = validate::date(raw.date_released.as_deref(), "date-released")?;
        let date_published = validate::date(raw.date_published.as_deref(), "date-published")?;
        let languages = validate::languages(raw.languages)?;
        let license_url = validate::url(raw.license_url.as_deref(), "license-url", owner)?;
        let repository = validate::url(raw.repository.as_deref(), "repository", owner)?;
        let repository_code =
            validate::url(raw.repository_code.as_deref(), "repository-code", owner)?;
        let repository_artifact = validate::url(
            raw.repository_artifact.as_deref(),
            "repository-artifact",
            owner,
        )?;
        let status = validate::reference_status(raw.status)?;
        let url = validate::url(raw.url.as_deref(), "url", owner)?;

        Ok(Reference {
            r#type,
            title,
            authors,
            abbreviation: raw.abbreviation,
            r#abstract: raw.r#abstract,
            collection_doi: raw.collection_doi,
            collection_title: raw.collection_title,
            collection_type: raw.collection_type,
            commit: raw.commit,
            conference,
            contact,
            copyright: raw.copyright,
            data_type: raw.data_type,
            database: raw.database,
            database_provider,
            date_accessed,
            date_downloaded,
            date_released,
            date_published,
            department: raw.department,
            doi: raw.doi,
            edition: raw.edition,
            editors,
            editors_series,
            end: raw.end,
            entry: raw.entry,
            filename: raw.filename,
            format: raw.format,
            institution,
            isbn: raw.isbn,
            issn: raw.issn,
            issue: raw.issue,
            issue_date: raw.issue_date,
            issue_title: raw.issue_title,
            journal: raw.journal,
            keywords: raw.keywords.unwrap_or_default(),
            languages,
            license: raw.license,
            license_url,
            loc_start: raw.loc_start,
            loc_end: raw.loc_end,
            location,
            medium: raw.medium,
            month: raw.month,
            nihmsid: raw.nihmsid,
            notes: raw.notes,
            number: raw.number,
            number_volumes: raw.number_volumes,
            pages: raw.pages,
            patent_states: raw.patent_states.unwrap_or_default(),
            pmcid: raw.pmcid,
            publisher,
            recipients,
            repository,
            repository_code,
            repository_artifact,
            scope: raw.scope,
            section: raw.section,
            senders,
            start: raw.start,
            status,
            thesis_type: raw.thesis_type,
            translators,
            url,
            version: raw.version,
            volume: raw.volume,
            volume_title: raw.volume_title,
            year: raw.year,
            year_original: raw.year_original,
        })
    }

    pub fn r#type(&self) -> ReferenceType {
        self.r#type
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

getters!(Reference {
    slice authors: Subject,
    str abbreviation: String,
    str r#abstract: String,
    str collection_doi: String,
    str collection_title: String,
    str collection_type: String,
    str commit: String,
    opt conference: Entity,
    slice contact: Subject,
    str copyright: String,
    str data_type: String,
    str database: String,
    opt database_provider: Entity,
    copy date_accessed: Option<Date>,
    copy date_downloaded: Option<Date>,
    copy date_released: Option<Date>,
    copy date_published: Option<Date>,
    str department: String,
    str doi: String,
    str edition: String,
    slice editors: Subject,
    slice editors_series: Subject,
    copy end: Option<i64>,
    str entry: String,
    str filename: String,
    str format: String,
    opt institution: Entity,
    str isbn: String,
    str issn: String,
    str issue: String,
    str issue_date: String,
    str issue_title: String,
    str journal: String,
    slice keywords: String,
    slice languages: String,
    str license: String,
    opt license_url: Url,
    copy loc_start: Option<i64>,
    copy loc_end: Option<i64>,
    opt location: Entity,
    str medium: String,
    copy month: Option<i64>,
    str nihmsid: String,
    str notes: String,
    str number: String,
    copy number_volumes: Option<i64>,
    copy pages: Option<i64>,
    slice patent_states: String,
    str pmcid: String,
    opt publisher: Entity,
    slice recipients: Subject,
    opt repository: Url,
    opt repository_code: Url,
    opt repository_artifact: Url,
    str scope: String,
    str section: String,
    slice senders: Subject,
    copy start: Option<i64>,
    copy status: Option<ReferenceStatus>,
    str thesis_type: String,
    slice translators: Subject,
    opt url: Url,
    str version: String,
    copy volume: Option<i64>,
    str volume_title: String,
    copy year: Option<i64>,
    copy year_original: Option<i64>,
});

subject_views!(Reference {
    authors => person_authors, entity_authors;
    contact => person_contacts, entity_contacts;
    editors => person_editors, entity_editors;
    editors_series => person_editors_series, entity_editors_series;
    recipients => person_recipients, entity_recipients;
    senders => person_senders, entity_senders;
    translators => person_translators, entity_translators;
});
