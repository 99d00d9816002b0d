use serde::Serialize;

use crate::attack::{Attack, PlayerLevel};
use crate::rules::RuleTables;

/// An attack together with its score and its position in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredAttack {
    pub index: usize,
    pub attack: Attack,
    pub score: f64,
}

/// Star points plus weighted destruction, scaled by the matchup multiplier and
/// capped, so the result always lies in `0..=score_cap`.
pub fn score(attack: &Attack, player: PlayerLevel, rules: &RuleTables) -> f64 {
    let base = rules.star_base_score(attack.stars())
        + attack.destruction_percent() * rules.destruction_weight;

    let th_diff = i32::from(attack.enemy_level()) - i32::from(player.get());
    let multiplier = rules.matchup_multiplier(th_diff);

    (base * multiplier).min(rules.score_cap)
}

pub fn score_batch(
    attacks: &[Attack],
    player: PlayerLevel,
    rules: &RuleTables,
) -> Vec<ScoredAttack> {
    attacks
        .iter()
        .enumerate()
        .map(|(index, attack)| ScoredAttack {
            index,
            attack: *attack,
            score: score(attack, player, rules),
        })
        .collect()
}
