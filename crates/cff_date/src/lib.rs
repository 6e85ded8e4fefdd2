/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

//! cff_date - A strict ISO 8601 calendar date parser
//!
//! This crate implements the extended calendar date form (`YYYY-MM-DD`) that
//! the Citation File Format uses for all of its date-valued keys. Failures
//! report the byte position of the component that could not be read.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar date in the proleptic Gregorian calendar.
///
/// Values of this type are always valid: the month is in `1..=12` and the day
/// exists in that month of that year.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Date {
    year: u32,
    month: u32,
    day: u32,
}

impl Date {
    /// Build a date from its components, or `None` if no such day exists.
    pub fn new(year: u32, month: u32, day: u32) -> Option<Self> {
        if year > 9999 || !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Date { year, month, day })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether `year` has a 29th of February.
pub fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The number of days in `month` (1-based) of `year`; 0 for a month outside `1..=12`.
pub fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// What part of the input could not be read as a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateErrorKind {
    /// The year is not four ASCII digits.
    Year,
    /// A `-` separator is missing.
    Separator,
    /// The month is not two ASCII digits.
    Month,
    /// The day is not two ASCII digits.
    Day,
    /// The month is outside `01..=12`.
    MonthOutOfRange,
    /// The day does not exist in the given month.
    DayOutOfRange,
    /// Characters follow the day.
    TrailingInput,
}

impl fmt::Display for DateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DateErrorKind::Year => "expected a four-digit year",
            DateErrorKind::Separator => "expected '-'",
            DateErrorKind::Month => "expected a two-digit month",
            DateErrorKind::Day => "expected a two-digit day",
            DateErrorKind::MonthOutOfRange => "month must be between 01 and 12",
            DateErrorKind::DayOutOfRange => "day does not exist in this month",
            DateErrorKind::TrailingInput => "unexpected characters after the day",
        };
        f.write_str(text)
    }
}

/// A failure to read a string as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse '{input}' as a calendar date at position {position}: {kind}")]
pub struct DateParseError {
    input: String,
    position: usize,
    kind: DateErrorKind,
}

impl DateParseError {
    fn at(input: &str, rest: &str, kind: DateErrorKind) -> Self {
        DateParseError {
            input: input.to_string(),
            position: input.len() - rest.len(),
            kind,
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset into [`input`](Self::input) where the offending component starts.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> DateErrorKind {
        self.kind
    }
}

fn digits<'i>(count: usize) -> impl Parser<&'i str, u32, ErrMode<ContextError>> {
    take_while(count, |c: char| c.is_ascii_digit()).try_map(|s: &str| s.parse::<u32>())
}

/// Runs one component parser, mapping a failure to the offset where it started.
fn component<'i, O, P>(
    input: &'i str,
    rest: &mut &'i str,
    mut parser: P,
    kind: DateErrorKind,
) -> Result<O, DateParseError>
where
    P: Parser<&'i str, O, ErrMode<ContextError>>,
{
    let start = *rest;
    parser
        .parse_next(rest)
        .map_err(|_| DateParseError::at(input, start, kind))
}

/// Main entry point for parsing a `YYYY-MM-DD` string.
pub fn parse(input: &str) -> Result<Date, DateParseError> {
    let mut rest = input;

    let year = component(input, &mut rest, digits(4), DateErrorKind::Year)?;
    component(input, &mut rest, '-', DateErrorKind::Separator)?;
    let month_at = rest;
    let month = component(input, &mut rest, digits(2), DateErrorKind::Month)?;
    component(input, &mut rest, '-', DateErrorKind::Separator)?;
    let day_at = rest;
    let day = component(input, &mut rest, digits(2), DateErrorKind::Day)?;

    if !rest.is_empty() {
        return Err(DateParseError::at(input, rest, DateErrorKind::TrailingInput));
    }
    if !(1..=12).contains(&month) {
        return Err(DateParseError::at(
            input,
            month_at,
            DateErrorKind::MonthOutOfRange,
        ));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(DateParseError::at(
            input,
            day_at,
            DateErrorKind::DayOutOfRange,
        ));
    }

    Ok(Date { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let res = parse("2017-12-11").unwrap();
        assert_eq!(res.year(), 2017);
        assert_eq!(res.month(), 12);
        assert_eq!(res.day(), 11);
    }

    #[test]
    fn test_display_is_canonical() {
        let res: Date = "0042-01-09".parse().unwrap();
        assert_eq!(res.to_string(), "0042-01-09");
    }

    #[test]
    fn test_leap_day() {
        assert!(parse("2016-02-29").is_ok());
        assert!(parse("2000-02-29").is_ok());

        let err = parse("1900-02-29").unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::DayOutOfRange);
        assert_eq!(err.position(), 8);
    }

    #[test]
    fn test_month_out_of_range() {
        let err = parse("2017-13-01").unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::MonthOutOfRange);
        assert_eq!(err.position(), 5);
        assert_eq!(err.input(), "2017-13-01");
    }

    #[test]
    fn test_short_year() {
        let err = parse("17-01-01").unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::Year);
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn test_missing_separator() {
        let err = parse("2017/01/01").unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::Separator);
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn test_single_digit_day() {
        let err = parse("2017-01-1").unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::Day);
        assert_eq!(err.position(), 8);
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("2017-01-01T10:00:00").unwrap_err();
        assert_eq!(err.kind(), DateErrorKind::TrailingInput);
        assert_eq!(err.position(), 10);
    }

    #[test]
    fn test_error_message() {
        let err = parse("yesterday").unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot parse 'yesterday' as a calendar date at position 0: expected a four-digit year"
        );
    }

    #[test]
    fn test_new_rejects_missing_days() {
        assert!(Date::new(2018, 4, 31).is_none());
        assert!(Date::new(2018, 0, 1).is_none());
        assert_eq!(Date::new(2018, 4, 30), Some(parse("2018-04-30").unwrap()));
    }

    #[test]
    fn test_ordering() {
        let earlier = parse("2017-01-31").unwrap();
        let later = parse("2017-02-01").unwrap();
        assert!(earlier < later);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let date: Date = serde_json::from_str("\"2017-10-31\"").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2017-10-31\"");
        assert!(serde_json::from_str::<Date>("\"2017-10-32\"").is_err());
    }
}
