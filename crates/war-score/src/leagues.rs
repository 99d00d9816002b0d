//! League tables: how many attacks a league season has, and which leagues a
//! Town Hall level may enter. Only the input side uses these; scoring does not.

use models::{League, MAX_LEAGUE_NUMBER};

use crate::attack::PlayerLevel;

pub use crate::rules::MIN_LEVEL as MIN_RANKED_LEVEL;

/// Legend League is played as one daily block.
pub const LEGEND_DAILY_ATTACKS: usize = 8;

/// `None` for a ranked number outside the league table.
pub fn attack_count(league: League) -> Option<usize> {
    let count = match league {
        League::Legend => LEGEND_DAILY_ATTACKS,
        League::Ranked(n) => match n {
            1..=6 => 6,
            7..=15 => 8,
            16..=18 => 10,
            19..=23 => 12,
            24..=25 => 14,
            26..=27 => 18,
            28..=30 => 24,
            31..=MAX_LEAGUE_NUMBER => 30,
            _ => return None,
        },
    };
    Some(count)
}

pub fn min_league_number(level: PlayerLevel) -> u8 {
    match level.get() {
        0..=7 => 1,
        8 => 2,
        9 => 3,
        10 => 4,
        11 => 6,
        12 => 8,
        13 => 11,
        14 => 14,
        15 => 17,
        16 => 21,
        _ => 25,
    }
}

/// Ranked leagues from the level's minimum upwards, then Legend League.
pub fn available_leagues(level: PlayerLevel) -> Vec<League> {
    (min_league_number(level)..=MAX_LEAGUE_NUMBER)
        .map(League::Ranked)
        .chain(std::iter::once(League::Legend))
        .collect()
}

pub fn is_available(level: PlayerLevel, league: League) -> bool {
    match league {
        League::Legend => true,
        League::Ranked(n) => n >= min_league_number(level) && n <= MAX_LEAGUE_NUMBER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(th: u8) -> PlayerLevel {
        PlayerLevel::new(th).unwrap()
    }

    #[test]
    fn attack_count_table() {
        let expected: [(u8, usize); 14] = [
            (1, 6),
            (6, 6),
            (7, 8),
            (15, 8),
            (16, 10),
            (18, 10),
            (19, 12),
            (23, 12),
            (24, 14),
            (25, 14),
            (26, 18),
            (27, 18),
            (28, 24),
            (31, 30),
        ];
        for (number, count) in expected {
            assert_eq!(attack_count(League::Ranked(number)), Some(count), "league {number}");
        }
        assert_eq!(attack_count(League::Ranked(33)), Some(30));
        assert_eq!(attack_count(League::Legend), Some(8));
    }

    #[test]
    fn attack_count_is_none_outside_the_table() {
        assert_eq!(attack_count(League::Ranked(0)), None);
        assert_eq!(attack_count(League::Ranked(34)), None);
        assert_eq!(attack_count(League::Ranked(200)), None);
    }

    #[test]
    fn min_league_by_level() {
        let expected: [(u8, u8); 12] = [
            (7, 1),
            (8, 2),
            (9, 3),
            (10, 4),
            (11, 6),
            (12, 8),
            (13, 11),
            (14, 14),
            (15, 17),
            (16, 21),
            (17, 25),
            (18, 25),
        ];
        for (th, min) in expected {
            assert_eq!(min_league_number(level(th)), min, "TH {th}");
        }
    }

    #[test]
    fn available_leagues_start_at_minimum_and_end_with_legend() {
        let leagues = available_leagues(level(17));
        assert_eq!(leagues.first(), Some(&League::Ranked(25)));
        assert_eq!(leagues.last(), Some(&League::Legend));
        assert_eq!(leagues.len(), 10);

        assert_eq!(available_leagues(level(7)).len(), 34);
    }

    #[test]
    fn availability_respects_minimum() {
        assert!(!is_available(level(13), League::Ranked(10)));
        assert!(is_available(level(13), League::Ranked(11)));
        assert!(is_available(level(18), League::Legend));
        assert!(!is_available(level(7), League::Ranked(34)));
    }
}
