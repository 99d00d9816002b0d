use models::Grade;

pub const MIN_LEVEL: u8 = 7;
pub const MAX_LEVEL: u8 = 18;
pub const MAX_STARS: u8 = 3;
pub const FULL_DESTRUCTION: f64 = 100.0;

/// Fixed scoring configuration. Injected into the engine so that a rule variant
/// never needs engine changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleTables {
    /// Indexed by stars; the non-destruction part of a score.
    pub star_base_scores: [f64; 4],
    /// Converts destruction (0..=100) into points.
    pub destruction_weight: f64,
    /// Multipliers for attacking 1, 2 and 3+ levels above the player.
    pub punch_up_multipliers: [f64; 3],
    pub even_multiplier: f64,
    pub punch_down_multiplier: f64,
    /// Ordered from the highest grade down.
    pub grade_thresholds: [(Grade, f64); 4],
    pub score_cap: f64,
}

impl RuleTables {
    pub const STANDARD: Self = Self {
        star_base_scores: [0.0, 20.0, 40.0, 60.0],
        destruction_weight: 0.4,
        punch_up_multipliers: [1.1, 1.2, 1.3],
        even_multiplier: 1.0,
        punch_down_multiplier: 0.9,
        grade_thresholds: [
            (Grade::S, 90.0),
            (Grade::A, 80.0),
            (Grade::B, 70.0),
            (Grade::C, 0.0),
        ],
        score_cap: 100.0,
    };

    pub fn star_base_score(&self, stars: u8) -> f64 {
        self.star_base_scores
            .get(stars as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// `th_diff` is enemy level minus player level.
    pub fn matchup_multiplier(&self, th_diff: i32) -> f64 {
        if th_diff >= 3 {
            self.punch_up_multipliers[2]
        } else if th_diff == 2 {
            self.punch_up_multipliers[1]
        } else if th_diff == 1 {
            self.punch_up_multipliers[0]
        } else if th_diff == 0 {
            self.even_multiplier
        } else {
            self.punch_down_multiplier
        }
    }

    /// First threshold met wins; anything below every threshold (or NaN) is a C.
    pub fn grade_of(&self, efficiency: f64) -> Grade {
        self.grade_thresholds
            .iter()
            .find(|(_, min)| efficiency >= *min)
            .map(|(grade, _)| *grade)
            .unwrap_or(Grade::C)
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::STANDARD
    }
}
