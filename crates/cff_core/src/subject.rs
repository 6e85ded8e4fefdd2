/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Persons and entities: the things that can author, edit or receive a work.
//!
//! A subject arrives as a mapping holding the keys of either kind. Its kind
//! is decided once by looking for a `name` key, and the node is then built
//! as that kind only.

use cff_date::Date;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;
use url::Url;

use crate::de::Mapping;
use crate::error::{Result, ValidationError};
use crate::raw::{RawContact, RawEntity, RawPerson, RawSubject};
use crate::validate::{self, Record, UrlOwner};

/// Contact details shared by persons and entities.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post_code: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    orcid: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    website: Option<Url>,
}

impl Contact {
    pub(crate) fn from_raw(raw: RawContact) -> Result<Self, ValidationError> {
        let country = validate::country(raw.country)?;
        let orcid = validate::orcid(raw.orcid.as_deref())?;
        let website = validate::url(raw.website.as_deref(), "website", UrlOwner::Subject)?;
        Ok(Contact {
            address: raw.address,
            city: raw.city,
            region: raw.region,
            post_code: raw.post_code,
            country,
            orcid,
            email: raw.email,
            tel: raw.tel,
            fax: raw.fax,
            website,
        })
    }
}

getters!(Contact {
    str address: String,
    str city: String,
    str region: String,
    str post_code: String,
    str country: String,
    opt orcid: Url,
    str email: String,
    str tel: String,
    str fax: String,
    opt website: Url,
});

/// A human author, editor, contact, etc.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Person {
    family_names: String,
    given_names: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_particle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    affiliation: Option<String>,
    #[serde(flatten)]
    contact: Contact,
}

impl Person {
    pub(crate) fn from_raw(raw: RawPerson) -> Result<Self, ValidationError> {
        let family_names = validate::required(raw.family_names, "family-names", Record::Person)?;
        let given_names = validate::required(raw.given_names, "given-names", Record::Person)?;
        let contact = Contact::from_raw(raw.contact)?;
        Ok(Person {
            family_names,
            given_names,
            name_particle: raw.name_particle,
            name_suffix: raw.name_suffix,
            affiliation: raw.affiliation,
            contact,
        })
    }

    pub fn family_names(&self) -> &str {
        &self.family_names
    }

    pub fn given_names(&self) -> &str {
        &self.given_names
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }
}

getters!(Person {
    str name_particle: String,
    str name_suffix: String,
    str affiliation: String,
});

/// An organisation, team, conference or other non-human agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Entity {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_start: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_end: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(flatten)]
    contact: Contact,
}

impl Entity {
    pub(crate) fn from_raw(raw: RawEntity) -> Result<Self, ValidationError> {
        let name = validate::required(raw.name, "name", Record::Entity)?;
        let date_start = validate::date(raw.date_start.as_deref(), "date-start")?;
        let date_end = validate::date(raw.date_end.as_deref(), "date-end")?;
        let contact = Contact::from_raw(raw.contact)?;
        Ok(Entity {
            name,
            date_start,
            date_end,
            location: raw.location,
            contact,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }
}

getters!(Entity {
    copy date_start: Option<Date>,
    copy date_end: Option<Date>,
    str location: String,
});

/// Which shape a subject node has, or would be built as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectKind {
    Person,
    Entity,
}

/// A person or an entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Subject {
    Person(Person),
    Entity(Entity),
}

impl Subject {
    pub fn kind(&self) -> SubjectKind {
        match self {
            Subject::Person(_) => SubjectKind::Person,
            Subject::Entity(_) => SubjectKind::Entity,
        }
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            Subject::Person(p) => Some(p),
            Subject::Entity(_) => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Subject::Entity(e) => Some(e),
            Subject::Person(_) => None,
        }
    }

    pub fn contact(&self) -> &Contact {
        match self {
            Subject::Person(p) => &p.contact,
            Subject::Entity(e) => &e.contact,
        }
    }
}

impl From<Person> for Subject {
    fn from(p: Person) -> Self {
        Subject::Person(p)
    }
}

impl From<Entity> for Subject {
    fn from(e: Entity) -> Self {
        Subject::Entity(e)
    }
}

/// A subject that has been read but not yet classified or validated.
///
/// Only a mapping can be read as a node; a list or a bare scalar in a
/// subject position fails when the document is read.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubjectNode(RawSubject);

impl<'de> Deserialize<'de> for SubjectNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Mapping(raw) = Mapping::<RawSubject>::deserialize(deserializer)?;
        Ok(SubjectNode(raw))
    }
}

impl SubjectNode {
    pub fn new(raw: RawSubject) -> Self {
        SubjectNode(raw)
    }

    /// A node is an entity iff it has a `name` key, whatever its value.
    pub fn kind(&self) -> SubjectKind {
        match self.0.name {
            Some(_) => SubjectKind::Entity,
            None => SubjectKind::Person,
        }
    }

    /// Build the node as the kind [`kind`](Self::kind) picks.
    pub fn resolve(self) -> Result<Subject> {
        let kind = self.kind();
        trace!(?kind, "resolving subject");
        let subject = match kind {
            SubjectKind::Entity => Subject::Entity(Entity::from_raw(self.0.into_entity())?),
            SubjectKind::Person => Subject::Person(Person::from_raw(self.0.into_person())?),
        };
        Ok(subject)
    }

    /// Build the node as an entity, without looking at its keys.
    pub(crate) fn into_entity(self) -> Result<Entity, ValidationError> {
        Entity::from_raw(self.0.into_entity())
    }
}

/// Resolve a subject list in order, stopping at the first failure.
pub(crate) fn resolve_all(nodes: Option<Vec<SubjectNode>>) -> Result<Vec<Subject>> {
    nodes
        .unwrap_or_default()
        .into_iter()
        .map(SubjectNode::resolve)
        .collect()
}

/// The persons in `subjects`, in their original order.
pub fn persons(subjects: &[Subject]) -> Vec<&Person> {
    subjects.iter().filter_map(Subject::as_person).collect()
}

/// The entities in `subjects`, in their original order.
pub fn entities(subjects: &[Subject]) -> Vec<&Entity> {
    subjects.iter().filter_map(Subject::as_entity).collect()
}
