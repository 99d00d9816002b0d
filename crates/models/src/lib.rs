use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// One unvalidated input value, as it arrives from a form, a CLI argument or a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    /// Any other JSON shape (bool, array, object). Never a valid value.
    Other(serde_json::Value),
}

impl RawField {
    /// Empty or whitespace-only text counts as not supplied.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) | Self::Other(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{}", s.trim()),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for RawField {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAttack {
    #[serde(default, alias = "enemyTh", alias = "enemy_level")]
    pub enemy_th: Option<RawField>,
    #[serde(default)]
    pub stars: Option<RawField>,
    #[serde(default, alias = "destruction_percent", alias = "destructionPercent")]
    pub destruction: Option<RawField>,
}

impl RawAttack {
    pub fn new(enemy_th: f64, stars: f64, destruction: f64) -> Self {
        Self {
            enemy_th: Some(RawField::Number(enemy_th)),
            stars: Some(RawField::Number(stars)),
            destruction: Some(RawField::Number(destruction)),
        }
    }

    /// Build from three text inputs; empty strings become missing fields.
    pub fn from_text(enemy_th: &str, stars: &str, destruction: &str) -> Self {
        fn field(s: &str) -> Option<RawField> {
            let s = s.trim();
            (!s.is_empty()).then(|| RawField::Text(s.to_string()))
        }

        Self {
            enemy_th: field(enemy_th),
            stars: field(stars),
            destruction: field(destruction),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
pub enum Grade {
    #[serde(rename = "S")]
    #[strum(serialize = "S")]
    S,
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    A,
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    B,
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    C,
}

impl Grade {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

/// Where an opponent sits relative to the attacker's own level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchupBucket {
    Lower,
    Equal,
    Higher,
}

impl MatchupBucket {
    pub fn classify(enemy_level: u8, player_level: u8) -> Self {
        match enemy_level.cmp(&player_level) {
            std::cmp::Ordering::Less => Self::Lower,
            std::cmp::Ordering::Equal => Self::Equal,
            std::cmp::Ordering::Greater => Self::Higher,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lower => "Lower TH",
            Self::Equal => "Equal TH",
            Self::Higher => "Higher TH",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    EnumIter,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum LeagueTier {
    Skeleton,
    Barbarian,
    Archer,
    Wizard,
    Valkyrie,
    Witch,
    Golem,
    #[strum(to_string = "P.E.K.K.A", serialize = "PEKKA")]
    Pekka,
    Titan,
    Dragon,
    Electro,
}

impl LeagueTier {
    /// Each tier spans three consecutive league numbers, starting at 1.
    pub fn of_number(number: u8) -> Option<Self> {
        Some(match number {
            1..=3 => Self::Skeleton,
            4..=6 => Self::Barbarian,
            7..=9 => Self::Archer,
            10..=12 => Self::Wizard,
            13..=15 => Self::Valkyrie,
            16..=18 => Self::Witch,
            19..=21 => Self::Golem,
            22..=24 => Self::Pekka,
            25..=27 => Self::Titan,
            28..=30 => Self::Dragon,
            31..=33 => Self::Electro,
            _ => return None,
        })
    }
}

pub const MAX_LEAGUE_NUMBER: u8 = 33;

/// A ranked war league (numbered 1..=33) or the daily Legend League.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    Ranked(u8),
    Legend,
}

impl League {
    pub fn ranked(number: u8) -> Option<Self> {
        LeagueTier::of_number(number).map(|_| Self::Ranked(number))
    }

    pub fn number(self) -> Option<u8> {
        match self {
            Self::Ranked(n) => Some(n),
            Self::Legend => None,
        }
    }

    pub fn tier(self) -> Option<LeagueTier> {
        self.number().and_then(LeagueTier::of_number)
    }

    pub fn is_legend(self) -> bool {
        matches!(self, Self::Legend)
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legend => write!(f, "Legend League"),
            Self::Ranked(n) => match LeagueTier::of_number(*n) {
                Some(tier) => write!(f, "{tier} {n}"),
                None => write!(f, "League {n}"),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown league: {0:?}")]
pub struct ParseLeagueError(String);

impl FromStr for League {
    type Err = ParseLeagueError;

    /// Accepts "Wizard 11", "11", "legend" or "Legend League".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLeagueError(s.to_string());
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower == "legend" || lower == "legend league" {
            return Ok(Self::Legend);
        }

        let (tier, number) = match trimmed.rsplit_once(char::is_whitespace) {
            Some((tier, number)) => (Some(tier.trim()), number),
            None => (None, trimmed),
        };
        let number: u8 = number.parse().map_err(|_| err())?;
        let expected = LeagueTier::of_number(number).ok_or_else(err)?;

        if let Some(tier) = tier {
            let tier = LeagueTier::from_str(tier).map_err(|_| err())?;
            if tier != expected {
                return Err(err());
            }
        }

        Ok(Self::Ranked(number))
    }
}

impl Serialize for League {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for League {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_display_uses_tier_names() {
        assert_eq!(League::Ranked(1).to_string(), "Skeleton 1");
        assert_eq!(League::Ranked(11).to_string(), "Wizard 11");
        assert_eq!(League::Ranked(22).to_string(), "P.E.K.K.A 22");
        assert_eq!(League::Ranked(33).to_string(), "Electro 33");
        assert_eq!(League::Legend.to_string(), "Legend League");
    }

    #[test]
    fn league_parses_display_number_and_legend() {
        assert_eq!("Wizard 11".parse::<League>(), Ok(League::Ranked(11)));
        assert_eq!("wizard 11".parse::<League>(), Ok(League::Ranked(11)));
        assert_eq!("P.E.K.K.A 24".parse::<League>(), Ok(League::Ranked(24)));
        assert_eq!("11".parse::<League>(), Ok(League::Ranked(11)));
        assert_eq!("Legend League".parse::<League>(), Ok(League::Legend));
        assert_eq!(" legend ".parse::<League>(), Ok(League::Legend));
    }

    #[test]
    fn league_rejects_mismatched_tier_and_unknown_numbers() {
        assert!("Archer 11".parse::<League>().is_err());
        assert!("Titan 34".parse::<League>().is_err());
        assert!("0".parse::<League>().is_err());
        assert!("Crystal 5".parse::<League>().is_err());
        assert!("".parse::<League>().is_err());

        let err = "Archer 11".parse::<League>().unwrap_err();
        assert_eq!(err.to_string(), r#"unknown league: "Archer 11""#);
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(err);
        assert!(boxed.to_string().starts_with("unknown league"));
    }

    #[test]
    fn league_serde_uses_display_form() {
        let json = serde_json::to_string(&League::Ranked(16)).unwrap();
        assert_eq!(json, "\"Witch 16\"");
        let back: League = serde_json::from_str(&json).unwrap();
        assert_eq!(back, League::Ranked(16));
    }

    #[test]
    fn matchup_bucket_classifies_by_level() {
        assert_eq!(MatchupBucket::classify(9, 12), MatchupBucket::Lower);
        assert_eq!(MatchupBucket::classify(12, 12), MatchupBucket::Equal);
        assert_eq!(MatchupBucket::classify(13, 12), MatchupBucket::Higher);
        assert_eq!(MatchupBucket::Higher.to_string(), "higher");
    }

    #[test]
    fn raw_attack_accepts_numbers_and_text() {
        let json = r#"{"enemy_th": 13, "stars": "2", "destruction": "  "}"#;
        let raw: RawAttack = serde_json::from_str(json).unwrap();
        assert_eq!(raw.enemy_th, Some(RawField::Number(13.0)));
        assert_eq!(raw.stars.as_ref().and_then(RawField::as_number), Some(2.0));
        assert!(raw.destruction.as_ref().is_some_and(RawField::is_blank));

        let raw: RawAttack = serde_json::from_str(r#"{"enemyTh": 10}"#).unwrap();
        assert_eq!(raw.enemy_th, Some(RawField::Number(10.0)));
        assert_eq!(raw.stars, None);
    }

    #[test]
    fn raw_attack_keeps_other_json_shapes() {
        let json = r#"{"enemy_th": true, "stars": [2], "destruction": {"pct": 80}}"#;
        let raw: RawAttack = serde_json::from_str(json).unwrap();

        let enemy_th = raw.enemy_th.unwrap();
        assert_eq!(enemy_th, RawField::Other(serde_json::Value::Bool(true)));
        assert_eq!(enemy_th.as_number(), None);
        assert!(!enemy_th.is_blank());
        assert_eq!(enemy_th.to_string(), "true");
        assert_eq!(raw.stars.unwrap().to_string(), "[2]");
        assert_eq!(raw.destruction.and_then(|d| d.as_number()), None);
    }

    #[test]
    fn raw_attack_from_text_drops_empty_parts() {
        let raw = RawAttack::from_text("13", "", " 80 ");
        assert_eq!(raw.enemy_th, Some(RawField::Text("13".to_string())));
        assert_eq!(raw.stars, None);
        assert_eq!(raw.destruction, Some(RawField::Text("80".to_string())));
    }

    #[test]
    fn grade_round_trips_through_strum() {
        assert_eq!("A".parse::<Grade>(), Ok(Grade::A));
        assert_eq!(Grade::S.to_string(), "S");
        assert_eq!(Grade::C.as_str(), "C");
    }
}
