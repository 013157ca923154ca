//! Presentation glue: one function per chart turns a summary table into an
//! SVG document, and `render_all` writes the twelve files. A chart whose
//! summary is empty is skipped and reported, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::breakdowns;
use crate::dataset::Dataset;
use crate::rankings;
use crate::svg::{self, Bar};
use crate::trends;

pub const CHART_FILES: [&str; 12] = [
    "01_match_volume_trends.svg",
    "02_home_advantage_value.svg",
    "03_tournament_type_performance.svg",
    "04_top_teams_win_rate.svg",
    "05_goal_timing_patterns.svg",
    "06_shootout_success_rates.svg",
    "07_scoring_evolution.svg",
    "08_tournament_frequency.svg",
    "09_neutral_venue_impact.svg",
    "10_goal_scoring_methods.svg",
    "11_top_goal_scorers.svg",
    "12_match_intensity_distribution.svg",
];

#[derive(Debug, Default)]
pub struct RenderSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<&'static str>,
}

pub fn render_all(out_dir: &Path, data: &Dataset) -> Result<RenderSummary> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let docs: [(usize, Option<String>); 12] = [
        (0, match_volume(data)),
        (1, home_advantage(data)),
        (2, tournament_performance(data)),
        (3, team_win_rates(data)),
        (4, goal_timing(data)),
        (5, shootout_success(data)),
        (6, scoring_evolution(data)),
        (7, tournament_frequency(data)),
        (8, neutral_venue(data)),
        (9, goal_methods(data)),
        (10, top_scorers(data)),
        (11, match_intensity(data)),
    ];

    let mut summary = RenderSummary::default();
    for (idx, doc) in docs {
        let name = CHART_FILES[idx];
        match doc {
            Some(doc) => {
                let path = out_dir.join(name);
                fs::write(&path, doc)
                    .with_context(|| format!("write chart {}", path.display()))?;
                summary.written.push(path);
            }
            None => summary.skipped.push(name),
        }
    }
    Ok(summary)
}

fn match_volume(data: &Dataset) -> Option<String> {
    let rows = trends::matches_per_year(&data.matches);
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| Bar::new(r.year.to_string(), r.matches as f64))
        .collect();
    Some(svg::bar_chart(
        "International Match Volume by Year",
        "Matches",
        &bars,
        &[svg::BLUE],
    ))
}

fn home_advantage(data: &Dataset) -> Option<String> {
    let rows = breakdowns::home_advantage(&data.matches);
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::with_caption(
                r.outcome.label(),
                r.pct,
                format!("{}% ({} matches)", r.pct, r.matches),
            )
        })
        .collect();
    Some(svg::bar_chart(
        "Home Advantage: Outcomes at Non-Neutral Venues",
        "Share of Matches (%)",
        &bars,
        &[svg::GREEN, svg::YELLOW, svg::RED],
    ))
}

fn tournament_performance(data: &Dataset) -> Option<String> {
    let rows = breakdowns::scoring_by_class(&data.matches);
    if rows.is_empty() {
        return None;
    }
    let mut bars = Vec::new();
    for r in &rows {
        bars.push(Bar::with_caption(
            format!("{} home", r.class.label()),
            r.avg_home_goals,
            format!("{:.2} ({} matches)", r.avg_home_goals, r.matches),
        ));
        bars.push(Bar::with_caption(
            format!("{} away", r.class.label()),
            r.avg_away_goals,
            format!("{:.2}", r.avg_away_goals),
        ));
    }
    Some(svg::bar_chart(
        "Goal Scoring: Competitive vs Friendly Matches",
        "Average Goals per Match",
        &bars,
        &[svg::GREEN, svg::ORANGE],
    ))
}

fn team_win_rates(data: &Dataset) -> Option<String> {
    let rows = rankings::team_win_rates(
        &data.matches,
        rankings::MIN_TEAM_MATCHES,
        rankings::TEAM_LIMIT,
    );
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::with_caption(
                r.team.clone(),
                r.win_rate,
                format!("{}% ({} matches)", r.win_rate, r.matches),
            )
        })
        .collect();
    Some(svg::barh_chart(
        "Top 15 National Teams by Win Rate",
        "Win Rate (%)",
        &bars,
        svg::BLUE,
    ))
}

fn goal_timing(data: &Dataset) -> Option<String> {
    let rows = breakdowns::goals_by_period(&data.goals);
    if rows.is_empty() {
        return None;
    }
    let total: usize = rows.iter().map(|r| r.goals).sum();
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            let pct = r.goals as f64 / total as f64 * 100.0;
            Bar::with_caption(
                r.period.label(),
                r.goals as f64,
                format!("{} ({pct:.1}%)", r.goals),
            )
        })
        .collect();
    Some(svg::bar_chart(
        "Goal Scoring by Match Period",
        "Goals",
        &bars,
        &[svg::RED, svg::ORANGE, svg::YELLOW, svg::GREEN, svg::BLUE, svg::PURPLE],
    ))
}

fn shootout_success(data: &Dataset) -> Option<String> {
    let rows = rankings::shootout_win_rates(
        &data.shootouts,
        rankings::MIN_SHOOTOUTS,
        rankings::TEAM_LIMIT,
    );
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::with_caption(
                r.team.clone(),
                r.win_rate,
                format!("{}% ({}/{})", r.win_rate, r.wins, r.shootouts),
            )
        })
        .collect();
    Some(svg::barh_chart(
        "Top 15 Teams in Penalty Shootouts",
        "Shootout Win Rate (%)",
        &bars,
        svg::RED,
    ))
}

fn scoring_evolution(data: &Dataset) -> Option<String> {
    let (decades, fit) = trends::scoring_trend(&data.matches);
    if decades.is_empty() {
        return None;
    }
    let points: Vec<(f64, f64)> = decades
        .iter()
        .map(|d| (f64::from(d.decade), d.avg_goals))
        .collect();
    let trend: Option<Vec<(f64, f64)>> =
        fit.map(|fit| points.iter().map(|&(x, _)| (x, fit.eval(x))).collect());
    Some(svg::line_chart(
        "Average Goals per Match by Decade",
        "Average Goals per Match",
        &points,
        trend.as_deref(),
    ))
}

fn tournament_frequency(data: &Dataset) -> Option<String> {
    let rows = breakdowns::top_tournaments(&data.matches, breakdowns::TOURNAMENT_LIMIT);
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| Bar::new(r.tournament.clone(), r.matches as f64))
        .collect();
    Some(svg::barh_chart(
        "Top 15 Tournaments by Match Count",
        "Matches",
        &bars,
        svg::PURPLE,
    ))
}

fn neutral_venue(data: &Dataset) -> Option<String> {
    let rows = breakdowns::venue_split(&data.matches);
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            let label = if r.neutral { "Neutral Venue" } else { "Home/Away" };
            Bar::with_caption(
                label,
                r.avg_goals,
                format!("{:.2} goals ({} matches)", r.avg_goals, r.matches),
            )
        })
        .collect();
    Some(svg::bar_chart(
        "Scoring by Venue Type",
        "Average Goals per Match",
        &bars,
        &[svg::BLUE, svg::RED],
    ))
}

fn goal_methods(data: &Dataset) -> Option<String> {
    let rows = breakdowns::goal_methods(&data.goals);
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::with_caption(
                r.method.label(),
                r.pct,
                format!("{}% ({} goals)", r.pct, r.goals),
            )
        })
        .collect();
    Some(svg::bar_chart(
        "How Goals Are Scored",
        "Share of All Goals (%)",
        &bars,
        &[svg::GREEN, svg::ORANGE, svg::RED],
    ))
}

fn top_scorers(data: &Dataset) -> Option<String> {
    let rows = rankings::top_scorers(&data.goals, rankings::SCORER_LIMIT);
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| Bar::new(r.scorer.clone(), r.goals as f64))
        .collect();
    Some(svg::barh_chart(
        "Top 20 All-Time International Goal Scorers",
        "Goals",
        &bars,
        svg::ORANGE,
    ))
}

fn match_intensity(data: &Dataset) -> Option<String> {
    let rows = breakdowns::margin_bands(&data.matches);
    if rows.is_empty() {
        return None;
    }
    let bars: Vec<Bar> = rows
        .iter()
        .map(|r| {
            Bar::with_caption(
                r.band.label(),
                r.matches as f64,
                format!("{} ({}%)", r.matches, r.pct),
            )
        })
        .collect();
    Some(svg::bar_chart(
        "Match Competitiveness by Goal Margin",
        "Matches",
        &bars,
        &[svg::GREEN, svg::YELLOW, svg::RED],
    ))
}
