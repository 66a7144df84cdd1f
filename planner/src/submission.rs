//! Decoding a submitted planner form into a [`PlanRequest`].
//!
//! Rows are read for the indices below `project_count` and
//! `constraint_count` that actually appear in the body, so the work is bounded
//! by the body size, not by the counts. Indices left behind by removed rows
//! are simply absent and are skipped, as are rows whose required text is
//! blank.

use std::collections::HashMap;

use crate::clock::{ClockError, ClockTime};
use crate::fields::{self, ConstraintField, ProjectField};
use crate::form::{DEFAULT_BLOCKS_PER_WEEK, DEFAULT_HOURS_PER_BLOCK, MAX_HOURS_PER_BLOCK};
use crate::model::{FixedConstraint, PlanRequest, Project};
use crate::weekday::{Weekday, WeekdayError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmissionError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` has invalid number '{value}'")]
    InvalidNumber { field: String, value: String },
    #[error("field `{field}`: {source}")]
    InvalidTime { field: String, source: ClockError },
    #[error("field `{field}`: {source}")]
    InvalidDay { field: String, source: WeekdayError },
}

/// Body fields grouped by `(group, index)` for indexed keys.
struct FieldMap<'a> {
    plain: HashMap<&'a str, Vec<&'a str>>,
    indexed: HashMap<(&'a str, usize), HashMap<&'a str, &'a str>>,
}

impl<'a> FieldMap<'a> {
    fn new(pairs: &'a [(String, String)]) -> Self {
        let mut plain: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut indexed: HashMap<(&str, usize), HashMap<&str, &str>> = HashMap::new();
        for (key, value) in pairs {
            if let Some((group, index, field)) = fields::parse_indexed(key) {
                // First value wins, like a form library's `get`.
                indexed.entry((group, index)).or_default().entry(field).or_insert(value);
            } else {
                plain.entry(key).or_default().push(value);
            }
        }
        Self { plain, indexed }
    }

    fn first(&self, key: &str) -> Option<&'a str> {
        self.plain.get(key).and_then(|values| values.first().copied())
    }

    fn all(&self, key: &str) -> &[&'a str] {
        match self.plain.get(key) {
            Some(values) => values,
            None => &[],
        }
    }

    /// Indices of `group` rows present in the body, ascending.
    fn indices(&self, group: &str) -> Vec<usize> {
        let mut indices: Vec<usize> = self.indexed.keys().filter(|(g, _)| *g == group).map(|(_, i)| *i).collect();
        indices.sort_unstable();
        indices
    }

    fn row(&self, group: &'static str, index: usize, field: &str) -> Option<&'a str> {
        self.indexed.get(&(group, index)).and_then(|row| row.get(field).copied())
    }
}

/// Decode `application/x-www-form-urlencoded` pairs into a plan request.
///
/// # Errors
///
/// Returns [`SubmissionError`] when the window is missing, or when a count,
/// number, time or day fails to parse.
pub fn decode(pairs: &[(String, String)]) -> Result<PlanRequest, SubmissionError> {
    let map = FieldMap::new(pairs);

    let available_days = map
        .all(fields::AVAILABLE_DAYS)
        .iter()
        .map(|raw| {
            raw.parse::<Weekday>()
                .map_err(|source| SubmissionError::InvalidDay { field: fields::AVAILABLE_DAYS.to_owned(), source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let start_time = required_time(&map, fields::START_TIME)?;
    let end_time = required_time(&map, fields::END_TIME)?;

    let project_count = parse_count(&map, fields::PROJECT_COUNT)?;
    let mut projects = Vec::new();
    for i in map.indices("projects").into_iter().take_while(|i| *i < project_count) {
        let Some(name) = map.row("projects", i, ProjectField::Name.as_str()).filter(|n| !n.is_empty()) else {
            continue;
        };
        let blocks_field = fields::project_field(i, ProjectField::BlocksPerWeek);
        let blocks_per_week = match map.row("projects", i, ProjectField::BlocksPerWeek.as_str()) {
            Some(raw) => parse_number::<u32>(&blocks_field, raw)?,
            None => DEFAULT_BLOCKS_PER_WEEK,
        };
        let hours_field = fields::project_field(i, ProjectField::HoursPerBlock);
        let hours_per_block = match map.row("projects", i, ProjectField::HoursPerBlock.as_str()) {
            Some(raw) => parse_hours(&hours_field, raw)?,
            None => DEFAULT_HOURS_PER_BLOCK,
        };
        projects.push(Project { name: name.to_owned(), blocks_per_week, hours_per_block });
    }

    let constraint_count = parse_count(&map, fields::CONSTRAINT_COUNT)?;
    let mut constraints = Vec::new();
    for i in map.indices("constraints").into_iter().take_while(|i| *i < constraint_count) {
        let get = |field: ConstraintField| map.row("constraints", i, field.as_str()).filter(|v| !v.is_empty());
        let (Some(name), Some(day), Some(start), Some(end)) = (
            get(ConstraintField::Name),
            get(ConstraintField::Day),
            get(ConstraintField::StartTime),
            get(ConstraintField::EndTime),
        ) else {
            continue;
        };
        constraints.push(FixedConstraint {
            name: name.to_owned(),
            day: day.parse::<Weekday>().map_err(|source| SubmissionError::InvalidDay {
                field: fields::constraint_field(i, ConstraintField::Day),
                source,
            })?,
            start_time: parse_time(fields::constraint_field(i, ConstraintField::StartTime), start)?,
            end_time: parse_time(fields::constraint_field(i, ConstraintField::EndTime), end)?,
        });
    }

    let mut request = PlanRequest { available_days, start_time, end_time, projects, constraints };
    // A repeated checkbox value must not become a second column for the same day.
    request.available_days = request.days();
    Ok(request)
}

fn required_time(map: &FieldMap<'_>, key: &'static str) -> Result<ClockTime, SubmissionError> {
    let raw = map.first(key).ok_or(SubmissionError::MissingField(key))?;
    parse_time(key.to_owned(), raw)
}

fn parse_time(field: String, raw: &str) -> Result<ClockTime, SubmissionError> {
    raw.parse().map_err(|source| SubmissionError::InvalidTime { field, source })
}

fn parse_count(map: &FieldMap<'_>, key: &str) -> Result<usize, SubmissionError> {
    map.first(key).map_or(Ok(0), |raw| parse_number(key, raw))
}

/// Hours per block must be a finite number in `0..=24`. Zero is accepted and
/// yields a project with nothing to place.
fn parse_hours(field: &str, raw: &str) -> Result<f64, SubmissionError> {
    let hours = parse_number::<f64>(field, raw)?;
    if hours.is_finite() && (0.0..=MAX_HOURS_PER_BLOCK).contains(&hours) {
        Ok(hours)
    } else {
        Err(SubmissionError::InvalidNumber { field: field.to_owned(), value: raw.to_owned() })
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, SubmissionError> {
    raw.trim().parse().map_err(|_| SubmissionError::InvalidNumber { field: field.to_owned(), value: raw.to_owned() })
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
