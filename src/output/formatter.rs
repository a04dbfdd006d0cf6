use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::roster::{Player, Team};
use crate::scoring::{standings, DivisionScore, TeamScore};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format points with at most two decimals and no trailing zeros
/// (34 -> "34", 34.5 -> "34.5", 19.299999 -> "19.3").
pub fn format_points(points: f64) -> String {
    let formatted = format!("{:.2}", points);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format ranked teams as `<rank>. <owner>: <points>`, one per line.
pub fn format_standings(ranked: &[Team], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No teams configured.".to_string();
    }

    standings(ranked)
        .iter()
        .map(|standing| {
            let rank = format!("{}.", standing.rank);
            let points = format_points(standing.points);
            if use_colors {
                format!("{} {}: {}", rank.dimmed(), standing.owner.bold(), points)
            } else {
                format!("{} {}: {}", rank, standing.owner, points)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_player_line(player: &Player, counted: bool, use_colors: bool) -> String {
    let marker = if counted { "+" } else { " " };
    let points = format!("{:>8}", format_points(player.points));
    if !use_colors {
        format!("    {} {}  {}", marker, points, player.name)
    } else if counted {
        format!("    {} {}  {}", marker.green(), points.bold(), player.name)
    } else {
        format!("    {} {}  {}", marker, points.dimmed(), player.name.dimmed())
    }
}

fn format_division(division: &DivisionScore, use_colors: bool) -> Vec<String> {
    let header = format!(
        "  {} (top {}): {}",
        division.division,
        division.counted.len(),
        format_points(division.points)
    );
    let mut lines = vec![if use_colors {
        header.cyan().to_string()
    } else {
        header
    }];
    lines.extend(
        division
            .counted
            .iter()
            .map(|p| format_player_line(p, true, use_colors)),
    );
    lines.extend(
        division
            .benched
            .iter()
            .map(|p| format_player_line(p, false, use_colors)),
    );
    lines
}

/// Format one team's score with every player per division.
/// Counting players are marked with `+`, best first.
pub fn format_breakdown(rank: usize, score: &TeamScore, use_colors: bool) -> String {
    let title = format!("{}. {}: {}", rank, score.owner, format_points(score.total));
    let mut lines = vec![if use_colors {
        title.bold().to_string()
    } else {
        title
    }];
    for division in &score.divisions {
        lines.extend(format_division(division, use_colors));
    }
    lines.join("\n")
}
