use models::{RawAttack, RawField};
use strum::Display;
use thiserror::Error;
use tracing::debug;

use crate::attack::{Attack, AttackBatch, PlayerLevel};
use crate::rules::{FULL_DESTRUCTION, MAX_LEVEL, MAX_STARS, MIN_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[strum(serialize = "enemy TH")]
    EnemyTh,
    #[strum(serialize = "stars")]
    Stars,
    #[strum(serialize = "destruction")]
    Destruction,
    #[strum(serialize = "player TH")]
    PlayerTh,
}

impl Field {
    pub const fn expected(self) -> &'static str {
        match self {
            Self::EnemyTh | Self::PlayerTh => "a whole number from 7 to 18",
            Self::Stars => "a whole number from 0 to 3",
            Self::Destruction => "a percentage from 0 to 100",
        }
    }
}

/// The stars/destruction pairing that an attack broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ConsistencyRule {
    #[strum(serialize = "100% destruction always earns 3 stars")]
    FullDestructionWithoutThreeStars,
    #[strum(serialize = "2 stars need at least 50% destruction")]
    TwoStarsUnderHalfDestruction,
    #[strum(serialize = "50% destruction or more earns at least 1 star")]
    ZeroStarsAtHalfDestruction,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing {field}")]
    MissingField { field: Field },
    #[error("{field} out of range: got {value:?}, expected {}", .field.expected())]
    OutOfRange { field: Field, value: String },
    #[error("{stars} star(s) at {destruction}% is not possible: {rule}")]
    InconsistentStarsDestruction {
        rule: ConsistencyRule,
        stars: u8,
        destruction: f64,
    },
}

impl ValidationError {
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingField { field } | Self::OutOfRange { field, .. } => Some(*field),
            Self::InconsistentStarsDestruction { .. } => None,
        }
    }
}

/// Every invalid attack of a batch, keyed by its 0-based position.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} of {total} attacks rejected", .errors.len())]
pub struct BatchRejection {
    pub total: usize,
    pub errors: Vec<(usize, ValidationError)>,
}

/// Checks run in a fixed order and stop at the first failure. A 3-star attack
/// always counts as 100% destruction, whatever value was supplied for it.
pub fn validate(raw: &RawAttack) -> Result<Attack, ValidationError> {
    let enemy_th = present(raw.enemy_th.as_ref(), Field::EnemyTh)?;
    let stars = present(raw.stars.as_ref(), Field::Stars)?;
    let destruction = present(raw.destruction.as_ref(), Field::Destruction)?;

    let enemy_level = whole_number_in(enemy_th, Field::EnemyTh, MIN_LEVEL, MAX_LEVEL)?;
    let stars = whole_number_in(stars, Field::Stars, 0, MAX_STARS)?;
    let destruction = if stars == MAX_STARS {
        FULL_DESTRUCTION
    } else {
        percentage(destruction)?
    };
    check_consistency(stars, destruction)?;

    Ok(Attack::new(enemy_level, stars, destruction))
}

pub fn validate_player_level(raw: &RawField) -> Result<PlayerLevel, ValidationError> {
    let raw = present(Some(raw), Field::PlayerTh)?;
    let level = whole_number_in(raw, Field::PlayerTh, MIN_LEVEL, MAX_LEVEL)?;
    PlayerLevel::new(level)
}

/// Validates every attack, even after one fails, and only hands back a batch
/// when all of them passed.
pub fn validate_batch(raws: &[RawAttack]) -> Result<AttackBatch, BatchRejection> {
    let mut attacks = Vec::with_capacity(raws.len());
    let mut errors = Vec::new();

    for (index, raw) in raws.iter().enumerate() {
        match validate(raw) {
            Ok(attack) => attacks.push(attack),
            Err(e) => {
                debug!(attack = index + 1, error = %e, "attack rejected");
                errors.push((index, e));
            }
        }
    }

    if errors.is_empty() {
        Ok(AttackBatch::from_vec(attacks))
    } else {
        Err(BatchRejection {
            total: raws.len(),
            errors,
        })
    }
}

fn present(raw: Option<&RawField>, field: Field) -> Result<&RawField, ValidationError> {
    match raw {
        Some(v) if !v.is_blank() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

fn whole_number_in(raw: &RawField, field: Field, min: u8, max: u8) -> Result<u8, ValidationError> {
    let out_of_range = || ValidationError::OutOfRange {
        field,
        value: raw.to_string(),
    };

    let v = raw.as_number().ok_or_else(out_of_range)?;
    if !v.is_finite() || v.fract() != 0.0 || v < f64::from(min) || v > f64::from(max) {
        return Err(out_of_range());
    }
    Ok(v as u8)
}

fn percentage(raw: &RawField) -> Result<f64, ValidationError> {
    match raw.as_number() {
        Some(v) if v.is_finite() && (0.0..=FULL_DESTRUCTION).contains(&v) => Ok(v),
        _ => Err(ValidationError::OutOfRange {
            field: Field::Destruction,
            value: raw.to_string(),
        }),
    }
}

fn check_consistency(stars: u8, destruction: f64) -> Result<(), ValidationError> {
    let rule = match stars {
        MAX_STARS => None,
        _ if destruction >= FULL_DESTRUCTION => {
            Some(ConsistencyRule::FullDestructionWithoutThreeStars)
        }
        2 if destruction < 50.0 => Some(ConsistencyRule::TwoStarsUnderHalfDestruction),
        0 if destruction >= 50.0 => Some(ConsistencyRule::ZeroStarsAtHalfDestruction),
        _ => None,
    };

    match rule {
        Some(rule) => Err(ValidationError::InconsistentStarsDestruction {
            rule,
            stars,
            destruction,
        }),
        None => Ok(()),
    }
}
