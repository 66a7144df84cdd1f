//! Field names of the planner form as submitted in the POST body.
//!
//! The server-side decoder and the client page both build names through this
//! module so the two sides cannot drift apart.

pub const START_TIME: &str = "start_time";
pub const END_TIME: &str = "end_time";
pub const AVAILABLE_DAYS: &str = "available_days";
pub const PROJECT_COUNT: &str = "project_count";
pub const CONSTRAINT_COUNT: &str = "constraint_count";

const PROJECTS: &str = "projects";
const CONSTRAINTS: &str = "constraints";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    BlocksPerWeek,
    HoursPerBlock,
}

impl ProjectField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BlocksPerWeek => "blocks_per_week",
            Self::HoursPerBlock => "hours_per_block",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintField {
    Day,
    StartTime,
    EndTime,
    Name,
}

impl ConstraintField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::StartTime => "start_time",
            Self::EndTime => "end_time",
            Self::Name => "name",
        }
    }
}

/// `projects[{index}][{field}]`
#[must_use]
pub fn project_field(index: usize, field: ProjectField) -> String {
    format!("{PROJECTS}[{index}][{}]", field.as_str())
}

/// `constraints[{index}][{field}]`
#[must_use]
pub fn constraint_field(index: usize, field: ConstraintField) -> String {
    format!("{CONSTRAINTS}[{index}][{}]", field.as_str())
}

/// DOM id of a constraint's start-time input.
#[must_use]
pub fn constraint_start_id(index: usize) -> String {
    format!("constraint_start_{index}")
}

/// DOM id of a constraint's end-time input.
#[must_use]
pub fn constraint_end_id(index: usize) -> String {
    format!("constraint_end_{index}")
}

/// Split `group[index][field]` into its parts.
#[must_use]
pub fn parse_indexed(key: &str) -> Option<(&str, usize, &str)> {
    let (group, rest) = key.split_once('[')?;
    let (index, rest) = rest.split_once("][")?;
    let field = rest.strip_suffix(']')?;
    if group.is_empty() || field.is_empty() || field.contains(['[', ']']) {
        return None;
    }
    Some((group, index.parse().ok()?, field))
}
