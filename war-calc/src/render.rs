use eyre::WrapErr;
use models::{League, MatchupBucket};
use serde::Serialize;
use strum::IntoEnumIterator;
use war_score::leagues;
use war_score::{BatchRejection, PlayerLevel, ScoredAttack, Summary};

use crate::cli::OutputFormat;

const LEGEND_DISCLAIMER: &str =
    "Legend League is scored as a single day of attacks, not a full season.";

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub league: League,
    pub league_attacks: usize,
    pub summary: Summary,
}

pub fn render_report(report: &Report, format: OutputFormat) -> eyre::Result<String> {
    match format {
        OutputFormat::Text => Ok(report_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).wrap_err("serialize report"),
    }
}

pub fn report_text(report: &Report) -> String {
    let summary = &report.summary;
    let mut lines = Vec::new();

    lines.push(format!("War efficiency: {:.2}%", summary.overall_efficiency));
    lines.push(format!("Grade: {}", summary.grade));
    lines.push(format!(
        "TH {} • {} ({} attacks)",
        summary.player_th.get(),
        report.league,
        report.league_attacks
    ));
    if report.league.is_legend() {
        lines.push(format!("Note: {LEGEND_DISCLAIMER}"));
    }

    lines.push(String::new());
    lines.push("Stars Breakdown".to_string());
    let stars: Vec<String> = summary
        .stars_breakdown
        .iter()
        .map(|(stars, n)| format!("{stars}⭐: {n}"))
        .collect();
    lines.push(stars.join(" | "));

    lines.push(String::new());
    lines.push("TH Matchup".to_string());
    for bucket in MatchupBucket::iter() {
        let stats = summary.matchup_stats.get(bucket);
        lines.push(format!(
            "{}: {} attacks, avg {:.1}%",
            bucket.label(),
            stats.count,
            stats.average
        ));
    }

    lines.push(String::new());
    lines.push("Best Attack".to_string());
    lines.push(format_scored_attack(summary.best_attack.as_ref()));

    lines.push(String::new());
    lines.push("Worst Attack".to_string());
    lines.push(format_scored_attack(summary.worst_attack.as_ref()));

    lines.join("\n")
}

fn format_scored_attack(scored: Option<&ScoredAttack>) -> String {
    match scored {
        Some(s) => format!(
            "#{} TH {}, {}⭐, {}% → {:.1}",
            s.index + 1,
            s.attack.enemy_level(),
            s.attack.stars(),
            s.attack.destruction_percent(),
            s.score
        ),
        None => "N/A".to_string(),
    }
}

/// One line per rejected attack, numbered from 1 the way they were entered.
pub fn rejection_text(rejection: &BatchRejection) -> String {
    let mut lines = vec![format!("{rejection}; fix these attacks and try again:")];
    for (index, e) in &rejection.errors {
        lines.push(format!("  Attack {}: {e}", index + 1));
    }
    lines.join("\n")
}

#[derive(Debug, Clone, Serialize)]
struct LeagueRow {
    league: League,
    attacks: usize,
}

pub fn render_leagues(level: PlayerLevel, format: OutputFormat) -> eyre::Result<String> {
    let rows: Vec<LeagueRow> = leagues::available_leagues(level)
        .into_iter()
        .filter_map(|league| {
            Some(LeagueRow {
                league,
                attacks: leagues::attack_count(league)?,
            })
        })
        .collect();

    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(&rows).wrap_err("serialize leagues");
    }

    let mut lines = vec![format!("Leagues open to TH {}:", level.get())];
    for row in &rows {
        let suffix = if row.league.is_legend() { " (daily)" } else { "" };
        lines.push(format!(
            "  {:<14} {:>2} attacks{suffix}",
            row.league.to_string(),
            row.attacks
        ));
    }
    Ok(lines.join("\n"))
}
