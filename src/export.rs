//! Writes the twelve summary tables into one workbook, one worksheet per
//! non-empty summary. Values are written as strings; the sheets are meant
//! for eyeballing and spreadsheet pivoting, not further machine processing.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::breakdowns;
use crate::dataset::Dataset;
use crate::rankings;
use crate::trends;

#[derive(Debug, Clone)]
pub struct ExportReport {
    pub sheets: usize,
    pub rows: usize,
}

pub fn export_summaries(path: &Path, data: &Dataset) -> Result<ExportReport> {
    let tables: Vec<(&str, Vec<Vec<String>>)> = vec![
        ("MatchVolume", match_volume_rows(data)),
        ("HomeAdvantage", home_advantage_rows(data)),
        ("ClassScoring", class_scoring_rows(data)),
        ("TeamWinRates", team_win_rate_rows(data)),
        ("GoalTiming", goal_timing_rows(data)),
        ("ShootoutWinRates", shootout_rows(data)),
        ("DecadeScoring", decade_rows(data)),
        ("Tournaments", tournament_rows(data)),
        ("VenueSplit", venue_rows(data)),
        ("GoalMethods", goal_method_rows(data)),
        ("TopScorers", scorer_rows(data)),
        ("MarginBands", margin_band_rows(data)),
    ];

    let mut workbook = Workbook::new();
    let mut sheets = 0usize;
    let mut rows_total = 0usize;
    for (name, rows) in &tables {
        // Header only means the summary came back empty.
        if rows.len() <= 1 {
            continue;
        }
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name)?;
        write_rows(sheet, rows)?;
        sheets += 1;
        rows_total += rows.len() - 1;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;

    Ok(ExportReport {
        sheets,
        rows: rows_total,
    })
}

fn header(columns: &[&str]) -> Vec<Vec<String>> {
    vec![columns.iter().map(|c| c.to_string()).collect()]
}

fn match_volume_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Year", "Matches"]);
    for r in trends::matches_per_year(&data.matches) {
        rows.push(vec![r.year.to_string(), r.matches.to_string()]);
    }
    rows
}

fn home_advantage_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Outcome", "Matches", "Percentage"]);
    for r in breakdowns::home_advantage(&data.matches) {
        rows.push(vec![
            r.outcome.label().to_string(),
            r.matches.to_string(),
            r.pct.to_string(),
        ]);
    }
    rows
}

fn class_scoring_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&[
        "Class",
        "Matches",
        "Avg Home Goals",
        "Avg Away Goals",
        "Avg Total Goals",
    ]);
    for r in breakdowns::scoring_by_class(&data.matches) {
        rows.push(vec![
            r.class.label().to_string(),
            r.matches.to_string(),
            r.avg_home_goals.to_string(),
            r.avg_away_goals.to_string(),
            r.avg_total_goals.to_string(),
        ]);
    }
    rows
}

fn team_win_rate_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Team", "Matches", "Wins", "Win Rate (%)"]);
    for r in rankings::team_win_rates(
        &data.matches,
        rankings::MIN_TEAM_MATCHES,
        rankings::TEAM_LIMIT,
    ) {
        rows.push(vec![
            r.team,
            r.matches.to_string(),
            r.wins.to_string(),
            r.win_rate.to_string(),
        ]);
    }
    rows
}

fn goal_timing_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Period", "Goals"]);
    for r in breakdowns::goals_by_period(&data.goals) {
        rows.push(vec![r.period.label().to_string(), r.goals.to_string()]);
    }
    rows
}

fn shootout_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Team", "Shootouts", "Wins", "Win Rate (%)"]);
    for r in rankings::shootout_win_rates(
        &data.shootouts,
        rankings::MIN_SHOOTOUTS,
        rankings::TEAM_LIMIT,
    ) {
        rows.push(vec![
            r.team,
            r.shootouts.to_string(),
            r.wins.to_string(),
            r.win_rate.to_string(),
        ]);
    }
    rows
}

fn decade_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Decade", "Avg Goals per Match", "Matches"]);
    for r in trends::goals_per_decade(&data.matches) {
        rows.push(vec![
            r.decade.to_string(),
            r.avg_goals.to_string(),
            r.matches.to_string(),
        ]);
    }
    rows
}

fn tournament_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Tournament", "Matches"]);
    for r in breakdowns::top_tournaments(&data.matches, breakdowns::TOURNAMENT_LIMIT) {
        rows.push(vec![r.tournament, r.matches.to_string()]);
    }
    rows
}

fn venue_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Venue", "Matches", "Avg Goals"]);
    for r in breakdowns::venue_split(&data.matches) {
        let venue = if r.neutral { "Neutral Venue" } else { "Home/Away" };
        rows.push(vec![
            venue.to_string(),
            r.matches.to_string(),
            r.avg_goals.to_string(),
        ]);
    }
    rows
}

fn goal_method_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Method", "Goals", "Percentage"]);
    for r in breakdowns::goal_methods(&data.goals) {
        rows.push(vec![
            r.method.label().to_string(),
            r.goals.to_string(),
            r.pct.to_string(),
        ]);
    }
    rows
}

fn scorer_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Scorer", "Goals"]);
    for r in rankings::top_scorers(&data.goals, rankings::SCORER_LIMIT) {
        rows.push(vec![r.scorer, r.goals.to_string()]);
    }
    rows
}

fn margin_band_rows(data: &Dataset) -> Vec<Vec<String>> {
    let mut rows = header(&["Margin", "Matches", "Percentage"]);
    for r in breakdowns::margin_bands(&data.matches) {
        rows.push(vec![
            r.band.label().to_string(),
            r.matches.to_string(),
            r.pct.to_string(),
        ]);
    }
    rows
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
