/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

mod common;

use cff_core::{
    entities, persons, read_from_str, Error, Subject, SubjectKind, SubjectNode, ValidationCategory,
    ValidationError, ValidationKind,
};
use common::MINIMAL;

fn rejected(doc: &str) -> ValidationError {
    match read_from_str(doc).unwrap_err() {
        Error::DataValidation(e) => e,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

fn with_reference(reference: &str) -> String {
    format!("{MINIMAL}references:\n{reference}")
}

#[test]
fn test_minimal_document() {
    let citation = read_from_str(MINIMAL).unwrap();
    assert_eq!(citation.title(), "My Research Tool");
    assert_eq!(citation.authors().len(), 1);
    assert!(citation.r#abstract().is_none());
    assert!(citation.commit().is_none());
    assert!(citation.contact().is_empty());
    assert!(citation.keywords().is_empty());
    assert!(citation.license().is_none());
    assert!(citation.license_url().is_none());
    assert!(citation.repository().is_none());
    assert!(citation.references().is_empty());
}

#[test]
fn test_wrong_cff_version() {
    let err = rejected(&MINIMAL.replace("1.0.3", "1.0.2"));
    assert_eq!(err.message(), "'cff-version' must be 1.0.3!");
}

#[test]
fn test_undefined_reference_type() {
    let err = rejected(&with_reference(
        "  - type: singularity\n    title: Event Horizon\n    authors:\n      - name: Team\n",
    ));
    assert_eq!(err.kind().category(), ValidationCategory::EnumMembership);
    assert_eq!(
        err.message(),
        "The reference type 'singularity' is not defined in the CFF format specifications."
    );
}

#[test]
fn test_bad_language() {
    let err = rejected(&with_reference(
        "  - type: book\n    title: T\n    authors:\n      - name: Team\n    languages:\n      - BAD LANGUAGE!\n",
    ));
    assert_eq!(err.kind(), ValidationKind::Undefined);
    assert!(err.message().contains("'BAD LANGUAGE!'"));
}

#[test]
fn test_bad_orcid() {
    let err = rejected(&MINIMAL.replace(
        "given-names: Stephan",
        "given-names: Stephan\n    orcid: BAD ORCID",
    ));
    assert_eq!(err.kind(), ValidationKind::Pattern);
    assert_eq!(
        err.message(),
        "ORCID id BAD ORCID is not a valid ORCID URL with pattern \
         'https://orcid.org/[0-9]{4}-[0-9]{4}-[0-9]{4}-[0-9]{4}'!"
    );
}

#[test]
fn test_orcid_shaped_but_unicode_digits() {
    let err = rejected(&MINIMAL.replace(
        "given-names: Stephan",
        "given-names: Stephan\n    orcid: https://orcid.org/٠٠٠٠-0001-2345-6789",
    ));
    assert_eq!(err.kind(), ValidationKind::Pattern);
}

#[test]
fn test_first_error_wins() {
    // type is checked before anything else in the reference
    let err = rejected(&with_reference(
        "  - type: singularity\n    title: T\n    authors:\n      - name: Team\n    \
         languages: [BAD LANGUAGE!]\n    status: BAD STATUS!\n",
    ));
    assert_eq!(err.field_name(), Some("type"));

    // the root record is checked before its references
    let doc = with_reference("  - type: singularity\n    title: T\n    authors: [{name: Team}]\n")
        .replace("title: My Research Tool\n", "");
    assert_eq!(rejected(&doc).field_name(), Some("title"));
}

#[test]
fn test_date_error_keeps_cause() {
    let err = rejected(&MINIMAL.replace("2017-12-11", "2017-12-1"));
    assert_eq!(err.kind().category(), ValidationCategory::Format);
    let cause = std::error::Error::source(&err).unwrap();
    let parse = cause.downcast_ref::<cff_date::DateParseError>().unwrap();
    assert_eq!(parse.input(), "2017-12-1");
    assert_eq!(parse.position(), 8);
}

#[test]
fn test_discrimination() {
    let cases = [
        ("name: Team", SubjectKind::Entity),
        ("name: Team\nfamily-names: Doe\ngiven-names: Jane", SubjectKind::Entity),
        ("name: ~", SubjectKind::Entity),
        ("family-names: Doe\ngiven-names: Jane", SubjectKind::Person),
        ("family-names: Doe", SubjectKind::Person),
        ("email: someone@example.org", SubjectKind::Person),
    ];
    for (yaml, kind) in cases {
        let node: SubjectNode = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(node.kind(), kind, "{yaml}");
        match node.resolve() {
            Ok(subject) => assert_eq!(subject.kind(), kind, "{yaml}"),
            Err(Error::DataValidation(e)) => {
                let expected = match kind {
                    SubjectKind::Entity => "entities",
                    SubjectKind::Person => "persons",
                };
                assert!(e.message().contains(expected), "{yaml}: {e}");
            }
            Err(other) => panic!("{yaml}: {other:?}"),
        }
    }
}

#[test]
fn test_partition_is_complete_and_disjoint() {
    let doc = MINIMAL.replace(
        "authors:\n",
        "authors:\n  - name: A\n  - family-names: B\n    given-names: B\n  - name: C\n",
    );
    let citation = read_from_str(&doc).unwrap();
    let authors: &[Subject] = citation.authors();
    let people = persons(authors);
    let orgs = entities(authors);

    assert_eq!(people.len() + orgs.len(), authors.len());
    assert_eq!(
        orgs.iter().map(|e| e.name()).collect::<Vec<_>>(),
        ["A", "C"]
    );
    assert_eq!(
        people.iter().map(|p| p.family_names()).collect::<Vec<_>>(),
        ["B", "Druskat"]
    );
    for subject in authors {
        let in_people = people.iter().any(|p| subject.as_person() == Some(*p));
        let in_orgs = orgs.iter().any(|e| subject.as_entity() == Some(*e));
        assert!(in_people != in_orgs);
    }
}

#[test]
fn test_construction_is_deterministic() {
    assert_eq!(read_from_str(MINIMAL).unwrap(), read_from_str(MINIMAL).unwrap());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let citation = read_from_str(&format!("{MINIMAL}date-updated: 2018-01-01\n")).unwrap();
    assert_eq!(citation.version(), "1.0.4");
}
