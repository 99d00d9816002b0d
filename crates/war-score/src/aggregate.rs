//! Folds a batch of validated attacks into summary statistics.

use models::{Grade, MatchupBucket};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::attack::{Attack, PlayerLevel};
use crate::rules::RuleTables;
use crate::scoring::{score, ScoredAttack};

/// Running count and total for one matchup bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BucketStats {
    pub count: usize,
    pub total: f64,
    /// Mean score of the bucket; 0 when the bucket is empty.
    pub average: f64,
}

impl BucketStats {
    fn record(&mut self, score: f64) {
        self.count += 1;
        self.total += score;
    }

    fn finish(&mut self) {
        self.average = if self.count > 0 {
            self.total / self.count as f64
        } else {
            0.0
        };
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MatchupStats {
    pub lower: BucketStats,
    pub equal: BucketStats,
    pub higher: BucketStats,
}

impl MatchupStats {
    pub fn get(&self, bucket: MatchupBucket) -> &BucketStats {
        match bucket {
            MatchupBucket::Lower => &self.lower,
            MatchupBucket::Equal => &self.equal,
            MatchupBucket::Higher => &self.higher,
        }
    }

    fn get_mut(&mut self, bucket: MatchupBucket) -> &mut BucketStats {
        match bucket {
            MatchupBucket::Lower => &mut self.lower,
            MatchupBucket::Equal => &mut self.equal,
            MatchupBucket::Higher => &mut self.higher,
        }
    }

    fn finish(&mut self) {
        self.lower.finish();
        self.equal.finish();
        self.higher.finish();
    }
}

/// Attack counts per star value. All four star values are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarsBreakdown([usize; 4]);

impl StarsBreakdown {
    pub fn count(&self, stars: u8) -> usize {
        self.0.get(stars as usize).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0.iter().enumerate().map(|(stars, n)| (stars as u8, *n))
    }

    fn record(&mut self, stars: u8) {
        if let Some(n) = self.0.get_mut(stars as usize) {
            *n += 1;
        }
    }
}

impl Serialize for StarsBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (stars, n) in self.iter() {
            map.serialize_entry(&stars.to_string(), &n)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub player_th: PlayerLevel,
    pub attack_count: usize,
    pub overall_efficiency: f64,
    pub grade: Grade,
    pub stars_breakdown: StarsBreakdown,
    pub matchup_stats: MatchupStats,
    pub best_attack: Option<ScoredAttack>,
    pub worst_attack: Option<ScoredAttack>,
    pub scores: Vec<ScoredAttack>,
}

/// Best and worst use strict comparisons, so the earliest attack wins a tie.
pub fn aggregate(attacks: &[Attack], player: PlayerLevel, rules: &RuleTables) -> Summary {
    let mut stars_breakdown = StarsBreakdown::default();
    let mut matchup_stats = MatchupStats::default();
    let mut best: Option<ScoredAttack> = None;
    let mut worst: Option<ScoredAttack> = None;
    let mut scores = Vec::with_capacity(attacks.len());
    let mut total = 0.0;

    for (index, attack) in attacks.iter().enumerate() {
        let scored = ScoredAttack {
            index,
            attack: *attack,
            score: score(attack, player, rules),
        };

        total += scored.score;
        stars_breakdown.record(attack.stars());
        matchup_stats
            .get_mut(MatchupBucket::classify(attack.enemy_level(), player.get()))
            .record(scored.score);

        if best.map_or(true, |b| scored.score > b.score) {
            best = Some(scored);
        }
        if worst.map_or(true, |w| scored.score < w.score) {
            worst = Some(scored);
        }

        scores.push(scored);
    }

    matchup_stats.finish();

    let overall_efficiency = if attacks.is_empty() {
        0.0
    } else {
        total / attacks.len() as f64
    };
    let grade = rules.grade_of(overall_efficiency);

    debug!(
        player_th = player.get(),
        attacks = attacks.len(),
        efficiency = overall_efficiency,
        %grade,
        "summary computed"
    );

    Summary {
        player_th: player,
        attack_count: attacks.len(),
        overall_efficiency,
        grade,
        stars_breakdown,
        matchup_stats,
        best_attack: best,
        worst_attack: worst,
        scores,
    }
}
