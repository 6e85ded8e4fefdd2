/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! Fixed value sets that CFF 1.0.3 validates against.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// The pattern an ORCID iD must match.
pub const ORCID_URL_PATTERN: &str = r"https://orcid\.org/\d{4}-\d{4}-\d{4}-\d{4}";

// ASCII digits only, anchored at both ends.
static ORCID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?-u:{ORCID_URL_PATTERN})$")).expect("valid ORCID pattern")
});

/// ISO 3166-1 alpha-2 country codes, sorted.
pub const COUNTRIES: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ", "BR", "BS",
    "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN",
    "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM", "DO", "DZ", "EC", "EE",
    "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR", "GA", "GB", "GD", "GE", "GF",
    "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS", "GT", "GU", "GW", "GY", "HK", "HM",
    "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT", "JE", "JM",
    "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC",
    "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK",
    "ML", "MM", "MN", "MO", "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA",
    "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG",
    "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS",
    "ST", "SV", "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO",
    "TR", "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

/// ISO 639-1 and ISO 639-3 codes, whitespace separated.
const LANGUAGE_DATA: &str = include_str!("../data/languages.txt");

static LANGUAGES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LANGUAGE_DATA.split_whitespace().collect());

/// Whether `orcid` is exactly an ORCID iD URL.
pub fn is_orcid(orcid: &str) -> bool {
    ORCID_RE.is_match(orcid)
}

pub fn is_country(code: &str) -> bool {
    COUNTRIES.binary_search(&code).is_ok()
}

/// Whether `code` is a two-letter ISO 639-1 or three-letter ISO 639-3 code.
pub fn is_language(code: &str) -> bool {
    matches!(code.len(), 2 | 3) && LANGUAGES.contains(code)
}
