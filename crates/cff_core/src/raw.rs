/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Raw CFF records as they come out of the YAML document.
//!
//! These mirror the document's keys one to one (kebab-case) and hold every
//! value unvalidated and optional. Text values are kept as written. The typed model in [`crate::citation`],
//! [`crate::reference`] and [`crate::subject`] is built from them.

use serde::{Deserialize, Serialize};

use crate::de::{opt_i64, opt_string, opt_string_list, present_string};
use crate::subject::SubjectNode;

/// Raw top-level document.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RawCitation {
    #[serde(default, deserialize_with = "opt_string")]
    pub cff_version: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub message: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<SubjectNode>>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_released: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub r#abstract: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub commit: Option<String>,
    #[serde(default)]
    pub contact: Option<Vec<SubjectNode>>,
    #[serde(default, deserialize_with = "opt_string")]
    pub doi: Option<String>,
    #[serde(default, deserialize_with = "opt_string_list")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_string")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub license_url: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub repository_code: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub repository_artifact: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub url: Option<String>,
    #[serde(default)]
    pub references: Option<Vec<RawReference>>,
}

/// Raw person or entity.
///
/// A subject is read before its kind is known, so this holds the keys of
/// both kinds. `name` is `Some(None)` when the key is written with a null
/// value, which still marks the node as an entity.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RawSubject {
    #[serde(
        default,
        deserialize_with = "present_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "opt_string")]
    pub family_names: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub given_names: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub name_particle: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub name_suffix: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub affiliation: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_start: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_end: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub post_code: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub orcid: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub tel: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub fax: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub website: Option<String>,
}

impl RawSubject {
    fn contact(&mut self) -> RawContact {
        RawContact {
            address: self.address.take(),
            city: self.city.take(),
            region: self.region.take(),
            post_code: self.post_code.take(),
            country: self.country.take(),
            orcid: self.orcid.take(),
            email: self.email.take(),
            tel: self.tel.take(),
            fax: self.fax.take(),
            website: self.website.take(),
        }
    }

    /// The person keys of this node. Entity keys are dropped.
    pub fn into_person(mut self) -> RawPerson {
        let contact = self.contact();
        RawPerson {
            family_names: self.family_names,
            given_names: self.given_names,
            name_particle: self.name_particle,
            name_suffix: self.name_suffix,
            affiliation: self.affiliation,
            contact,
        }
    }

    /// The entity keys of this node. Person keys are dropped.
    pub fn into_entity(mut self) -> RawEntity {
        let contact = self.contact();
        RawEntity {
            name: self.name.flatten(),
            date_start: self.date_start,
            date_end: self.date_end,
            location: self.location,
            contact,
        }
    }
}

/// Contact keys shared by persons and entities.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawContact {
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub orcid: Option<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawPerson {
    pub family_names: Option<String>,
    pub given_names: Option<String>,
    pub name_particle: Option<String>,
    pub name_suffix: Option<String>,
    pub affiliation: Option<String>,
    pub contact: RawContact,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawEntity {
    pub name: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub location: Option<String>,
    pub contact: RawContact,
}

/// Raw reference; fields are in the order they are validated.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RawReference {
    #[serde(default, deserialize_with = "opt_string")]
    pub r#type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<SubjectNode>>,
    #[serde(default)]
    pub conference: Option<SubjectNode>,
    #[serde(default, deserialize_with = "opt_string")]
    pub abbreviation: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub r#abstract: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub collection_doi: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub collection_title: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub collection_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub commit: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub copyright: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub data_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub database: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_accessed: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_downloaded: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_released: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_published: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub doi: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub edition: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub end: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub entry: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub isbn: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub issn: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub issue: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub issue_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub issue_title: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub journal: Option<String>,
    #[serde(default, deserialize_with = "opt_string_list")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_string_list")]
    pub languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_string")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub license_url: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub loc_start: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub loc_end: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub medium: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub month: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub nihmsid: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub number_volumes: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub pages: Option<i64>,
    #[serde(default, deserialize_with = "opt_string_list")]
    pub patent_states: Option<Vec<String>>,
    #[serde(default, deserialize_with = "opt_string")]
    pub pmcid: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub repository: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub repository_code: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub repository_artifact: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub scope: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub start: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub thesis_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub volume: Option<i64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub volume_title: Option<String>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "opt_i64")]
    pub year_original: Option<i64>,
    #[serde(default)]
    pub contact: Option<Vec<SubjectNode>>,
    #[serde(default)]
    pub database_provider: Option<SubjectNode>,
    #[serde(default)]
    pub editors: Option<Vec<SubjectNode>>,
    #[serde(default)]
    pub editors_series: Option<Vec<SubjectNode>>,
    #[serde(default)]
    pub institution: Option<SubjectNode>,
    #[serde(default)]
    pub location: Option<SubjectNode>,
    #[serde(default)]
    pub publisher: Option<SubjectNode>,
    #[serde(default)]
    pub recipients: Option<Vec<SubjectNode>>,
    #[serde(default)]
    pub senders: Option<Vec<SubjectNode>>,
    #[serde(default)]
    pub translators: Option<Vec<SubjectNode>>,
}
