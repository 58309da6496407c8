//! Separation-set catalog keyed by canonical pair.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::pair::{VarId, VarPair};
use crate::errors::ConsistencyError;

/// Serialised form of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparationEntry {
    pub pair: VarPair,
    pub set: BTreeSet<VarId>,
}

/// Conditioning sets that rendered removed pairs independent.
/// Entries are write-once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SeparationEntry>", into = "Vec<SeparationEntry>")]
pub struct SeparationSets {
    entries: BTreeMap<VarPair, BTreeSet<VarId>>,
}

impl SeparationSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the separation set for `{a, b}`. A pair can be recorded once.
    pub fn insert(
        &mut self,
        a: VarId,
        b: VarId,
        set: impl IntoIterator<Item = VarId>,
    ) -> Result<(), ConsistencyError> {
        let pair = VarPair::try_new(a, b)?;
        if self.entries.contains_key(&pair) {
            return Err(ConsistencyError::SeparationSetAlreadyRecorded { pair });
        }
        self.entries.insert(pair, set.into_iter().collect());
        Ok(())
    }

    /// Lookup for either argument order.
    pub fn get(&self, a: VarId, b: VarId) -> Option<&BTreeSet<VarId>> {
        VarPair::try_new(a, b)
            .ok()
            .and_then(|pair| self.entries.get(&pair))
    }

    pub fn contains_pair(&self, a: VarId, b: VarId) -> bool {
        self.get(a, b).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarPair, &BTreeSet<VarId>)> {
        self.entries.iter().map(|(pair, set)| (*pair, set))
    }
}

impl TryFrom<Vec<SeparationEntry>> for SeparationSets {
    type Error = ConsistencyError;

    fn try_from(entries: Vec<SeparationEntry>) -> Result<Self, Self::Error> {
        let mut sets = Self::new();
        for entry in entries {
            sets.insert(entry.pair.low(), entry.pair.high(), entry.set)?;
        }
        Ok(sets)
    }
}

impl From<SeparationSets> for Vec<SeparationEntry> {
    fn from(sets: SeparationSets) -> Self {
        sets.entries
            .into_iter()
            .map(|(pair, set)| SeparationEntry { pair, set })
            .collect()
    }
}
