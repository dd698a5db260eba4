//! Parsing of structured filters given as `field=value` arguments.
//!
//! `created_at=2024-01-01..2024-01-31` selects an inclusive date range, any
//! other value (including `0xab..cd`) is an exact match.

use chrono::NaiveDate;

use crate::domain::types::FieldName;
use crate::forms::FormError;
use crate::query::StructuredFilter;

const RANGE_SEPARATOR: &str = "..";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_filter(input: &str) -> Result<StructuredFilter, FormError> {
    let (field, value) = input
        .split_once('=')
        .ok_or_else(|| FormError::InvalidFilter(input.to_string()))?;
    let field = FieldName::new(field).map_err(|_| FormError::InvalidFilter(input.to_string()))?;

    match parse_date_range(value) {
        Some((from, to)) if from > to => Err(FormError::InvalidFilter(input.to_string())),
        Some((from, to)) => Ok(StructuredFilter::date_range(field, from, to)),
        None => Ok(StructuredFilter::equals(field, value.trim())),
    }
}

/// Parses every argument, stopping at the first invalid one.
pub fn parse_filters<'a, I>(inputs: I) -> Result<Vec<StructuredFilter>, FormError>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs.into_iter().map(parse_filter).collect()
}

/// Both sides must be dates, otherwise the value is matched literally.
fn parse_date_range(value: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (from, to) = value.split_once(RANGE_SEPARATOR)?;
    let from = NaiveDate::parse_from_str(from.trim(), DATE_FORMAT).ok()?;
    let to = NaiveDate::parse_from_str(to.trim(), DATE_FORMAT).ok()?;
    Some((from, to))
}
