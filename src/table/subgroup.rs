//! Stored subgroups and the user-facing sex selection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DeckError;

/// One of the two subgroups a statistics row is recorded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Subgroup {
    Male,
    Female,
}

impl Subgroup {
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Value stored in the statistics table's subgroup column.
    #[must_use]
    pub const fn table_value(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl fmt::Display for Subgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_value())
    }
}

impl FromStr for Subgroup {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "男" => Ok(Self::Male),
            "女" => Ok(Self::Female),
            other => Err(DeckError::InvalidSubgroup(other.to_string())),
        }
    }
}

/// Which subgroups a run draws. `Both` is a union of the two stored
/// subgroups, never a third stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SexSelection {
    Male,
    Female,
    #[default]
    Both,
}

impl SexSelection {
    /// Label used in chart titles, figure names and the artifact name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
            Self::Both => "総数",
        }
    }

    #[must_use]
    pub const fn includes(self, subgroup: Subgroup) -> bool {
        matches!(
            (self, subgroup),
            (Self::Both, _) | (Self::Male, Subgroup::Male) | (Self::Female, Subgroup::Female)
        )
    }
}

impl fmt::Display for SexSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "subgroup_tests.rs"]
mod tests;
