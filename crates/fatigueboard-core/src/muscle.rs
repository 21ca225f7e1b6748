//! Muscle group registry.
//!
//! The set of trackable muscle groups is closed and fixed at compile time.
//! Each group carries a display label and a directional list of synergists
//! that receive spillover fatigue when the group is trained. The synergist
//! table is intentionally asymmetric (Chest spills into Triceps, Triceps
//! only spills back into Chest).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A trackable muscle group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quads,
    Hamstrings,
    Glutes,
    Calves,
    Core,
    Cardio,
}

impl MuscleGroup {
    /// Number of groups in the registry.
    pub const COUNT: usize = 11;

    /// Every group, in registry (display) order.
    pub const ALL: [MuscleGroup; Self::COUNT] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Quads,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::Core,
        MuscleGroup::Cardio,
    ];

    /// Position of this group in [`MuscleGroup::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in persisted data.
    pub const fn id(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Quads => "quads",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Core => "core",
            MuscleGroup::Cardio => "cardio",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::Core => "Core",
            MuscleGroup::Cardio => "Cardio",
        }
    }

    /// Groups that receive spillover when this group is trained.
    ///
    /// Returns zero to two neighbors. The relation is directional.
    pub const fn synergists(self) -> &'static [MuscleGroup] {
        match self {
            MuscleGroup::Chest => &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
            MuscleGroup::Back => &[MuscleGroup::Biceps],
            MuscleGroup::Shoulders => &[MuscleGroup::Triceps],
            MuscleGroup::Biceps => &[MuscleGroup::Back],
            MuscleGroup::Triceps => &[MuscleGroup::Chest],
            MuscleGroup::Quads => &[MuscleGroup::Glutes],
            MuscleGroup::Hamstrings => &[MuscleGroup::Glutes],
            MuscleGroup::Glutes => &[MuscleGroup::Hamstrings],
            MuscleGroup::Calves => &[],
            MuscleGroup::Core => &[],
            MuscleGroup::Cardio => &[MuscleGroup::Quads, MuscleGroup::Calves],
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MuscleGroup {
    type Err = ValidationError;

    /// Accepts the identifier or the label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        MuscleGroup::ALL
            .into_iter()
            .find(|g| g.id().eq_ignore_ascii_case(needle) || g.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownMuscle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, group) in MuscleGroup::ALL.iter().enumerate() {
            assert_eq!(group.index(), i);
        }
    }

    #[test]
    fn synergist_table_is_directional() {
        assert_eq!(
            MuscleGroup::Chest.synergists(),
            &[MuscleGroup::Triceps, MuscleGroup::Shoulders]
        );
        assert_eq!(MuscleGroup::Triceps.synergists(), &[MuscleGroup::Chest]);
        assert!(!MuscleGroup::Shoulders
            .synergists()
            .contains(&MuscleGroup::Chest));
    }

    #[test]
    fn synergists_never_exceed_two_or_include_self() {
        for group in MuscleGroup::ALL {
            let syn = group.synergists();
            assert!(syn.len() <= 2, "{group} has {} synergists", syn.len());
            assert!(!syn.contains(&group));
        }
    }

    #[test]
    fn some_groups_have_no_synergists() {
        assert!(MuscleGroup::Calves.synergists().is_empty());
        assert!(MuscleGroup::Core.synergists().is_empty());
    }

    #[test]
    fn parse_accepts_id_and_label() {
        assert_eq!("chest".parse::<MuscleGroup>(), Ok(MuscleGroup::Chest));
        assert_eq!("Hamstrings".parse::<MuscleGroup>(), Ok(MuscleGroup::Hamstrings));
        assert_eq!("  CARDIO ".parse::<MuscleGroup>(), Ok(MuscleGroup::Cardio));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "forearms".parse::<MuscleGroup>(),
            Err(ValidationError::UnknownMuscle("forearms".into()))
        );
    }

    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&MuscleGroup::Hamstrings).unwrap();
        assert_eq!(json, "\"hamstrings\"");
        for group in MuscleGroup::ALL {
            assert_eq!(serde_json::to_string(&group).unwrap(), format!("\"{}\"", group.id()));
        }
    }
}
