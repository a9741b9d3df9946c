use serde::{Deserialize, Serialize};

use crate::errors::RankfuseError;
use crate::object::ObjectId;

/// One rank position in a ranking.
///
/// Supports both the bare-identifier shorthand (an implicit singleton
/// tier) and the array form for a group of tied objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tier {
    Single(ObjectId),
    Group(Vec<ObjectId>),
}

impl Tier {
    /// The objects occupying this tier.
    pub fn members(&self) -> &[ObjectId] {
        match self {
            Tier::Single(id) => std::slice::from_ref(id),
            Tier::Group(ids) => ids,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Tier::Group(_))
    }
}

/// A ranking-with-ties: an ordered sequence of tiers, earlier tiers
/// preferred over later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    pub tiers: Vec<Tier>,
}

impl Ranking {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers }
    }

    /// Decode an encoded ranking from JSON and validate it.
    pub fn from_json(text: &str) -> Result<Self, RankfuseError> {
        let ranking: Ranking =
            serde_json::from_str(text).map_err(|e| RankfuseError::InvalidRanking {
                message: e.to_string(),
            })?;
        ranking.validate()?;
        Ok(ranking)
    }

    /// Encode this ranking back to its JSON wire shape.
    pub fn to_json(&self) -> Result<String, RankfuseError> {
        serde_json::to_string(self).map_err(|e| RankfuseError::Encode {
            message: e.to_string(),
        })
    }

    /// Encode with indentation, for human consumption.
    pub fn to_json_pretty(&self) -> Result<String, RankfuseError> {
        serde_json::to_string_pretty(self).map_err(|e| RankfuseError::Encode {
            message: e.to_string(),
        })
    }

    /// Structural validation beyond what deserialization enforces.
    ///
    /// A tier is a non-empty set of objects; an empty group carries no
    /// rank position and is rejected.
    pub fn validate(&self) -> Result<(), RankfuseError> {
        for (position, tier) in self.tiers.iter().enumerate() {
            if tier.members().is_empty() {
                return Err(RankfuseError::InvalidRanking {
                    message: format!("tier {position} is an empty group"),
                });
            }
        }
        Ok(())
    }

    /// All objects in ranking order, tiers flattened.
    pub fn objects(&self) -> impl Iterator<Item = &ObjectId> {
        self.tiers.iter().flat_map(|t| t.members().iter())
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
