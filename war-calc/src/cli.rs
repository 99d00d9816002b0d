use std::path::PathBuf;

use clap::{Parser, Subcommand};
use models::{League, RawAttack};
use strum::{Display, EnumString};

#[derive(Debug, Parser)]
#[command(name = "war-calc")]
#[command(about = "War attack efficiency calculator")]
#[command(arg_required_else_help = true)]
pub struct RootArgs {
    #[arg(
        long,
        global = true,
        value_name = "FORMAT",
        help = "Output format: text or json (defaults to WAR_CALC_FORMAT, then text)"
    )]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Score a war's attacks and print efficiency, grade and stats")]
    Calc {
        #[arg(long, value_name = "TH", help = "Your Town Hall level (7..18)")]
        player_th: Option<u8>,

        #[arg(
            long,
            value_name = "LEAGUE",
            help = "League, e.g. \"Wizard 11\", \"11\" or \"legend\""
        )]
        league: Option<League>,

        #[arg(
            long = "attack",
            value_name = "TH:STARS:PCT",
            value_parser = parse_attack_arg,
            conflicts_with = "input",
            help = "One attack as enemy TH, stars and destruction; repeat per attack"
        )]
        attacks: Vec<RawAttack>,

        #[arg(
            long,
            value_name = "FILE",
            help = "JSON file with an \"attacks\" array (and optionally player_th, league)"
        )]
        input: Option<PathBuf>,
    },
    #[command(about = "List the leagues open to a Town Hall level and their attack counts")]
    Leagues {
        #[arg(long, value_name = "TH", help = "Your Town Hall level (7..18)")]
        player_th: u8,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `13:3:100`; an empty part (`13::80`) is kept as a missing field for the validator.
pub fn parse_attack_arg(s: &str) -> Result<RawAttack, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [enemy_th, stars, destruction] = parts.as_slice() else {
        return Err(format!("expected TH:STARS:PCT, got {s:?}"));
    };
    Ok(RawAttack::from_text(enemy_th, stars, destruction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::RawField;

    #[test]
    fn attack_arg_splits_three_parts() {
        let raw = parse_attack_arg("13:3:100").unwrap();
        assert_eq!(raw.enemy_th, Some(RawField::Text("13".to_string())));
        assert_eq!(raw.stars, Some(RawField::Text("3".to_string())));
        assert_eq!(raw.destruction, Some(RawField::Text("100".to_string())));
    }

    #[test]
    fn attack_arg_keeps_gaps_as_missing() {
        let raw = parse_attack_arg("13::80").unwrap();
        assert_eq!(raw.stars, None);
    }

    #[test]
    fn attack_arg_needs_exactly_three_parts() {
        assert!(parse_attack_arg("13:3").is_err());
        assert!(parse_attack_arg("13:3:100:1").is_err());
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
