/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

use super::*;
use crate::error::{Error, ValidationKind};

fn reference(yaml: &str) -> Result<Reference> {
    let raw: RawReference = serde_yaml::from_str(yaml).unwrap();
    Reference::from_raw(raw)
}

fn failure(yaml: &str) -> crate::error::ValidationError {
    match reference(yaml).unwrap_err() {
        Error::DataValidation(e) => e,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

const MINIMAL: &str = "
type: book
title: Book Title
authors:
  - family-names: Doe
    given-names: Jane
";

#[test]
fn test_minimal_reference() {
    let r = reference(MINIMAL).unwrap();
    assert_eq!(r.r#type(), ReferenceType::Book);
    assert_eq!(r.title(), "Book Title");
    assert_eq!(r.authors().len(), 1);
    assert!(r.languages().is_empty());
    assert!(r.editors().is_empty());
    assert!(r.status().is_none());
    assert!(r.publisher().is_none());
    assert!(r.year().is_none());
}

#[test]
fn test_full_reference() {
    let r = reference(
        "
type: article
title: An Article
authors:
  - family-names: Doe
    given-names: Jane
  - name: The Lab
conference:
  name: RSE Conference
  date-start: 2017-09-07
date-published: 2017-10-31
languages: [en, deu]
keywords: [one, 2]
license-url: https://www.apache.org/licenses/LICENSE-2.0
status: preprint
loc-start: \"14\"
loc-end: 54
year: 2017
editors:
  - name: Editorial Board
  - family-names: Smith
    given-names: Sam
publisher:
  name: Publisher
  city: Berlin
",
    )
    .unwrap();

    assert_eq!(r.r#type(), ReferenceType::Article);
    assert_eq!(r.person_authors().len(), 1);
    assert_eq!(r.entity_authors()[0].name(), "The Lab");
    assert_eq!(r.conference().unwrap().date_start(), Date::new(2017, 9, 7));
    assert_eq!(r.date_published(), Date::new(2017, 10, 31));
    assert_eq!(r.languages(), ["en", "deu"]);
    assert_eq!(r.keywords(), ["one", "2"]);
    assert_eq!(
        r.license_url().map(Url::as_str),
        Some("https://www.apache.org/licenses/LICENSE-2.0")
    );
    assert_eq!(r.status(), Some(ReferenceStatus::Preprint));
    assert_eq!(r.loc_start(), Some(14));
    assert_eq!(r.loc_end(), Some(54));
    assert_eq!(r.year(), Some(2017));
    assert_eq!(r.entity_editors()[0].name(), "Editorial Board");
    assert_eq!(r.person_editors()[0].family_names(), "Smith");
    assert_eq!(r.publisher().unwrap().contact().city(), Some("Berlin"));
}

#[test]
fn test_undefined_type() {
    let err = failure("type: singularity\ntitle: T\nauthors: [{name: X}]");
    assert_eq!(err.kind(), ValidationKind::Undefined);
    assert_eq!(
        err.to_string(),
        "The reference type 'singularity' is not defined in the CFF format specifications."
    );
}

#[test]
fn test_required_order() {
    let err = failure("title: T\nauthors: [{name: X}]");
    assert_eq!(err.field_name(), Some("type"));
    assert_eq!(
        err.to_string(),
        "'type' is a required key in references and must be present and not null!"
    );

    // a later invalid value does not mask an earlier missing key
    let err = failure("type: book\nauthors: [{name: X}]\nstatus: BAD STATUS!");
    assert_eq!(err.field_name(), Some("title"));

    let err = failure("type: book\ntitle: T\nlanguages: [BAD LANGUAGE!]");
    assert_eq!(err.field_name(), Some("authors"));
}

#[test]
fn test_empty_authors_is_missing() {
    let err = failure("type: book\ntitle: T\nauthors: []");
    assert_eq!(err.kind(), ValidationKind::Missing);
    assert_eq!(err.field_name(), Some("authors"));
}

#[test]
fn test_bad_language() {
    let err = failure(&format!("{MINIMAL}languages: [en, BAD LANGUAGE!]"));
    assert_eq!(
        err.to_string(),
        "The language 'BAD LANGUAGE!' is not a valid ISO 639-1 or 639-3 code."
    );
}

#[test]
fn test_bad_status() {
    let err = failure(&format!("{MINIMAL}status: BAD STATUS!"));
    assert_eq!(
        err.to_string(),
        "The status 'BAD STATUS!' is not defined in the CFF format specifications."
    );
}

#[test]
fn test_bad_url_names_reference() {
    let err = failure(&format!("{MINIMAL}repository-code: not a url"));
    assert_eq!(err.kind(), ValidationKind::Url);
    assert_eq!(
        err.to_string(),
        "The reference 'Book Title' of type 'book' contains an invalid URL in field 'repository-code'!"
    );
}

#[test]
fn test_formats_in_declaration_order() {
    // dates come before languages, languages before URLs
    let err = failure(&format!(
        "{MINIMAL}url: bad\nlanguages: [zz!]\ndate-accessed: 2017-13-01"
    ));
    assert_eq!(err.field_name(), Some("date-accessed"));

    let err = failure(&format!("{MINIMAL}url: bad\nlanguages: [zz!]"));
    assert_eq!(err.field_name(), Some("languages"));
}

#[test]
fn test_entity_fields_skip_discrimination() {
    let err = failure(&format!(
        "{MINIMAL}institution:\n  family-names: Doe\n  given-names: Jane"
    ));
    assert_eq!(
        err.to_string(),
        "'name' is a required key in entities and must be present and not null!"
    );
}

#[test]
fn test_invalid_author_orcid() {
    let err = failure(
        "type: book\ntitle: T\nauthors:\n  - family-names: Doe\n    given-names: Jane\n    orcid: BAD ORCID",
    );
    assert_eq!(err.kind(), ValidationKind::Pattern);
}

#[test]
fn test_construction_is_deterministic() {
    assert_eq!(reference(MINIMAL).unwrap(), reference(MINIMAL).unwrap());
}

#[test]
fn test_subjects_built_before_formats() {
    let err = failure(&format!(
        "{MINIMAL}date-accessed: 2017-13-01\nurl: bad\ntranslators:\n  - family-names: Roe\n"
    ));
    assert_eq!(err.kind(), ValidationKind::Missing);
    assert_eq!(err.field_name(), Some("given-names"));

    let err = failure(&format!(
        "{MINIMAL}status: lost\npublisher:\n  name: Press\n  website: not a url\n"
    ));
    assert_eq!(err.field_name(), Some("website"));
}

#[test]
fn test_negative_integers() {
    let r = reference(&format!("{MINIMAL}start: -1\nend: \"-3\"\nyear: -44\n")).unwrap();
    assert_eq!(r.start(), Some(-1));
    assert_eq!(r.end(), Some(-3));
    assert_eq!(r.year(), Some(-44));
}

#[test]
fn test_number_like_text_is_kept() {
    let r = reference(&format!("{MINIMAL}version: 1.10\nissue: 007\nisbn: 9780262510875\n")).unwrap();
    assert_eq!(r.version(), Some("1.10"));
    assert_eq!(r.issue(), Some("007"));
    assert_eq!(r.isbn(), Some("9780262510875"));
}
