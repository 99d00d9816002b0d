pub mod cli;
pub mod config;
pub mod input;
pub mod render;

use std::path::Path;

use eyre::{bail, eyre, WrapErr};
use models::{League, RawAttack};
use tracing::info;
use war_score::leagues::{self, MIN_RANKED_LEVEL};
use war_score::{validate_batch, validate_player_level, Calculator, PlayerLevel};

use crate::cli::{Command, RootArgs};
use crate::config::CalcConfig;
use crate::input::AttackFile;
use crate::render::Report;

/// Runs one command and returns what should be printed to stdout.
pub fn execute(args: &RootArgs, config: &CalcConfig) -> eyre::Result<String> {
    match &args.command {
        Command::Calc {
            player_th,
            league,
            attacks,
            input,
        } => {
            let report = build_report(*player_th, *league, attacks, input.as_deref())?;
            render::render_report(&report, config.format)
        }
        Command::Leagues { player_th } => {
            let level = player_level(*player_th)?;
            render::render_leagues(level, config.format)
        }
    }
}

/// Command-line values take precedence over the input file's.
pub fn build_report(
    player_th: Option<u8>,
    league: Option<League>,
    attacks: &[RawAttack],
    input: Option<&Path>,
) -> eyre::Result<Report> {
    let file = match input {
        Some(path) => AttackFile::load_from_path(path)?,
        None => AttackFile::default(),
    };

    let level = match (player_th, file.player_th.as_ref()) {
        (Some(th), _) => player_level(th)?,
        (None, Some(raw)) => validate_player_level(raw).wrap_err("player_th in attack file")?,
        (None, None) => {
            bail!("missing player TH: pass --player-th or set player_th in the input file")
        }
    };
    let player_th = level.get();

    let league = league
        .or(file.league)
        .ok_or_else(|| eyre!("select a league first (--league)"))?;
    if !leagues::is_available(level, league) {
        bail!(
            "{league} is not open to TH {player_th}; the lowest league is {}",
            League::Ranked(leagues::min_league_number(level))
        );
    }

    let raws = if attacks.is_empty() {
        file.attacks.as_slice()
    } else {
        attacks
    };
    let expected = leagues::attack_count(league)
        .ok_or_else(|| eyre!("{league} is not a war league"))?;
    if raws.len() != expected {
        bail!(
            "{league} has {expected} attacks but {} were given; fill in every attack",
            raws.len()
        );
    }

    let batch =
        validate_batch(raws).map_err(|rejection| eyre!(render::rejection_text(&rejection)))?;
    let summary = Calculator::default().aggregate(&batch, level);

    info!(
        player_th,
        %league,
        efficiency = summary.overall_efficiency,
        grade = %summary.grade,
        "war scored"
    );

    Ok(Report {
        league,
        league_attacks: expected,
        summary,
    })
}

fn player_level(player_th: u8) -> eyre::Result<PlayerLevel> {
    if player_th < MIN_RANKED_LEVEL {
        bail!("ranked battles require TH {MIN_RANKED_LEVEL}+ (got TH {player_th})");
    }
    Ok(PlayerLevel::new(player_th)?)
}
