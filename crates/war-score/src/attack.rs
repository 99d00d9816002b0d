use std::ops::Deref;

use serde::Serialize;

use crate::rules::{MAX_LEVEL, MIN_LEVEL};
use crate::validate::{Field, ValidationError};

/// A validated attack. Only the validator builds these, so every instance
/// satisfies the level range and the stars/destruction rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Attack {
    #[serde(rename = "enemy_th")]
    enemy_level: u8,
    stars: u8,
    #[serde(rename = "destruction")]
    destruction_percent: f64,
}

impl Attack {
    pub(crate) fn new(enemy_level: u8, stars: u8, destruction_percent: f64) -> Self {
        Self {
            enemy_level,
            stars,
            destruction_percent,
        }
    }

    pub fn enemy_level(&self) -> u8 {
        self.enemy_level
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn destruction_percent(&self) -> f64 {
        self.destruction_percent
    }
}

/// The attacker's Town Hall level, fixed for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerLevel(u8);

impl PlayerLevel {
    pub fn new(level: u8) -> Result<Self, ValidationError> {
        if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ValidationError::OutOfRange {
                field: Field::PlayerTh,
                value: level.to_string(),
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PlayerLevel {
    type Error = ValidationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

/// Attacks accepted for one computation, in the order they were entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttackBatch(Vec<Attack>);

impl AttackBatch {
    pub(crate) fn from_vec(attacks: Vec<Attack>) -> Self {
        Self(attacks)
    }

    pub fn into_inner(self) -> Vec<Attack> {
        self.0
    }
}

impl Deref for AttackBatch {
    type Target = [Attack];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AttackBatch {
    type Item = &'a Attack;
    type IntoIter = std::slice::Iter<'a, Attack>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
