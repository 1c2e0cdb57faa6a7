//! Fixed-size condition set

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Condition, ConditionAction};

/// Set of [`Condition`]s present in one cycle.
///
/// # RT Safety
///
/// - `Copy`, one word
/// - No heap allocations on insert, lookup or iteration
///
/// Serializes as the list of condition names in code order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Condition>", into = "Vec<Condition>")]
pub struct ConditionSet {
    bits: u32,
}

impl ConditionSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    fn bit(condition: Condition) -> u32 {
        1 << condition.code()
    }

    pub fn insert(&mut self, condition: Condition) {
        self.bits |= Self::bit(condition);
    }

    /// Insert `condition` when `present` holds.
    pub fn set(&mut self, condition: Condition, present: bool) {
        if present {
            self.insert(condition);
        }
    }

    pub fn remove(&mut self, condition: Condition) {
        self.bits &= !Self::bit(condition);
    }

    pub fn contains(&self, condition: Condition) -> bool {
        self.bits & Self::bit(condition) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Present conditions in code order.
    pub fn iter(&self) -> impl Iterator<Item = Condition> + '_ {
        Condition::ALL
            .into_iter()
            .filter(move |condition| self.contains(*condition))
    }

    /// Returns true if any present condition carries `action`.
    pub fn any_action(&self, action: ConditionAction) -> bool {
        self.iter().any(|condition| condition.has_action(action))
    }

    /// Returns true if any present condition keeps the system from engaging.
    pub fn blocks_engagement(&self) -> bool {
        self.any_action(ConditionAction::NoEntry)
    }
}

impl fmt::Debug for ConditionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Condition> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        let mut set = Self::new();
        for condition in iter {
            set.insert(condition);
        }
        set
    }
}

impl Extend<Condition> for ConditionSet {
    fn extend<I: IntoIterator<Item = Condition>>(&mut self, iter: I) {
        for condition in iter {
            self.insert(condition);
        }
    }
}

impl From<Vec<Condition>> for ConditionSet {
    fn from(conditions: Vec<Condition>) -> Self {
        conditions.into_iter().collect()
    }
}

impl From<ConditionSet> for Vec<Condition> {
    fn from(set: ConditionSet) -> Self {
        set.iter().collect()
    }
}
