use std::collections::HashMap;

use crate::dataset::{
    GoalMethod, GoalRecord, MarginBand, MatchPeriod, MatchRecord, Outcome, TournamentClass,
};

pub const TOURNAMENT_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeShare {
    pub outcome: Outcome,
    pub matches: usize,
    pub pct: f64,
}

/// Outcome distribution over non-neutral matches only. Neutral venues carry
/// no home advantage, so they would dilute the split.
pub fn home_advantage(matches: &[MatchRecord]) -> Vec<OutcomeShare> {
    let mut home = 0usize;
    let mut draw = 0usize;
    let mut away = 0usize;
    for m in matches.iter().filter(|m| !m.neutral) {
        match m.outcome() {
            Outcome::HomeWin => home += 1,
            Outcome::Draw => draw += 1,
            Outcome::AwayWin => away += 1,
        }
    }
    let total = home + draw + away;
    if total == 0 {
        return Vec::new();
    }
    [(Outcome::HomeWin, home), (Outcome::Draw, draw), (Outcome::AwayWin, away)]
        .into_iter()
        .map(|(outcome, matches)| OutcomeShare {
            outcome,
            matches,
            pct: pct_of(matches, total),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassScoring {
    pub class: TournamentClass,
    pub matches: usize,
    pub avg_home_goals: f64,
    pub avg_away_goals: f64,
    pub avg_total_goals: f64,
}

/// Mean goals and match count per tournament class.
pub fn scoring_by_class(matches: &[MatchRecord]) -> Vec<ClassScoring> {
    let mut out = Vec::new();
    for class in TournamentClass::ALL {
        let mut count = 0usize;
        let mut home_goals = 0u64;
        let mut away_goals = 0u64;
        for m in matches.iter().filter(|m| m.tournament_class() == class) {
            count += 1;
            home_goals += u64::from(m.home_score);
            away_goals += u64::from(m.away_score);
        }
        if count == 0 {
            continue;
        }
        let avg_home = round2(home_goals as f64 / count as f64);
        let avg_away = round2(away_goals as f64 / count as f64);
        out.push(ClassScoring {
            class,
            matches: count,
            avg_home_goals: avg_home,
            avg_away_goals: avg_away,
            avg_total_goals: round2(avg_home + avg_away),
        });
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodCount {
    pub period: MatchPeriod,
    pub goals: usize,
}

/// Goal counts per fixed 15-minute bin, in bin order. Goals with a missing
/// minute are excluded; all six bins are present once any minute is known.
pub fn goals_by_period(goals: &[GoalRecord]) -> Vec<PeriodCount> {
    let mut counts = [0usize; 6];
    let mut known = 0usize;
    for g in goals {
        if let Some(period) = g.period() {
            counts[period as usize] += 1;
            known += 1;
        }
    }
    if known == 0 {
        return Vec::new();
    }
    MatchPeriod::ALL
        .into_iter()
        .zip(counts)
        .map(|(period, goals)| PeriodCount { period, goals })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentCount {
    pub tournament: String,
    pub matches: usize,
}

/// Most frequent tournaments, descending, ties broken by name.
pub fn top_tournaments(matches: &[MatchRecord], limit: usize) -> Vec<TournamentCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for m in matches {
        *counts.entry(m.tournament.as_str()).or_default() += 1;
    }
    let mut rows: Vec<TournamentCount> = counts
        .into_iter()
        .map(|(tournament, matches)| TournamentCount {
            tournament: tournament.to_string(),
            matches,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.matches
            .cmp(&a.matches)
            .then_with(|| a.tournament.cmp(&b.tournament))
    });
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueSplit {
    pub neutral: bool,
    pub matches: usize,
    pub avg_goals: f64,
}

/// Match count and mean total goals, home/away venues first.
pub fn venue_split(matches: &[MatchRecord]) -> Vec<VenueSplit> {
    let mut out = Vec::new();
    for neutral in [false, true] {
        let mut count = 0usize;
        let mut goals = 0u64;
        for m in matches.iter().filter(|m| m.neutral == neutral) {
            count += 1;
            goals += u64::from(m.total_goals());
        }
        if count == 0 {
            continue;
        }
        out.push(VenueSplit {
            neutral,
            matches: count,
            avg_goals: round2(goals as f64 / count as f64),
        });
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodShare {
    pub method: GoalMethod,
    pub goals: usize,
    pub pct: f64,
}

/// Open play / penalty / own goal split. The three categories partition the
/// goal set exactly, so the counts always sum to the input length.
pub fn goal_methods(goals: &[GoalRecord]) -> Vec<MethodShare> {
    if goals.is_empty() {
        return Vec::new();
    }
    let mut counts = [0usize; 3];
    for g in goals {
        counts[g.method() as usize] += 1;
    }
    let total = goals.len();
    GoalMethod::ALL
        .into_iter()
        .zip(counts)
        .map(|(method, goals)| MethodShare {
            method,
            goals,
            pct: pct_of(goals, total),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarginBandCount {
    pub band: MarginBand,
    pub matches: usize,
    pub pct: f64,
}

/// Match count per competitiveness band, fixed band order.
pub fn margin_bands(matches: &[MatchRecord]) -> Vec<MarginBandCount> {
    if matches.is_empty() {
        return Vec::new();
    }
    let mut counts = [0usize; 3];
    for m in matches {
        counts[m.margin_band() as usize] += 1;
    }
    let total = matches.len();
    MarginBand::ALL
        .into_iter()
        .zip(counts)
        .map(|(band, matches)| MarginBandCount {
            band,
            matches,
            pct: pct_of(matches, total),
        })
        .collect()
}

fn pct_of(part: usize, total: usize) -> f64 {
    round1(part as f64 / total as f64 * 100.0)
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
