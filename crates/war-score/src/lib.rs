pub mod aggregate;
pub mod attack;
pub mod leagues;
pub mod rules;
pub mod scoring;
pub mod validate;

use models::RawAttack;

pub use aggregate::{aggregate, BucketStats, MatchupStats, StarsBreakdown, Summary};
pub use attack::{Attack, AttackBatch, PlayerLevel};
pub use rules::RuleTables;
pub use scoring::{score, score_batch, ScoredAttack};
pub use validate::{
    validate, validate_batch, validate_player_level, BatchRejection, ConsistencyRule, Field,
    ValidationError,
};

/// Scoring entry point with one set of rule tables injected.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    rules: RuleTables,
}

impl Calculator {
    pub fn new(rules: RuleTables) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    pub fn score(&self, attack: &Attack, player: PlayerLevel) -> f64 {
        scoring::score(attack, player, &self.rules)
    }

    pub fn aggregate(&self, attacks: &[Attack], player: PlayerLevel) -> Summary {
        aggregate::aggregate(attacks, player, &self.rules)
    }

    /// Validate then aggregate; no summary unless every attack is valid.
    pub fn evaluate(
        &self,
        raws: &[RawAttack],
        player: PlayerLevel,
    ) -> Result<Summary, BatchRejection> {
        let batch = validate_batch(raws)?;
        Ok(self.aggregate(&batch, player))
    }
}
