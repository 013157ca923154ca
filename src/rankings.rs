use std::collections::HashMap;

use crate::dataset::{GoalRecord, MatchRecord, Outcome, ShootoutRecord};

/// Minimum appearances before a team's win rate is considered meaningful.
pub const MIN_TEAM_MATCHES: usize = 50;
pub const MIN_SHOOTOUTS: usize = 5;
pub const TEAM_LIMIT: usize = 15;
pub const SCORER_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamWinRate {
    pub team: String,
    pub matches: usize,
    pub wins: usize,
    pub win_rate: f64,
}

/// Win rate over combined home and away appearances, filtered to teams with
/// at least `min_matches`, top `limit` by rate descending.
pub fn team_win_rates(matches: &[MatchRecord], min_matches: usize, limit: usize) -> Vec<TeamWinRate> {
    #[derive(Default)]
    struct Tally {
        matches: usize,
        wins: usize,
    }

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for m in matches {
        let outcome = m.outcome();
        let home = tallies.entry(m.home_team.as_str()).or_default();
        home.matches += 1;
        if outcome == Outcome::HomeWin {
            home.wins += 1;
        }
        let away = tallies.entry(m.away_team.as_str()).or_default();
        away.matches += 1;
        if outcome == Outcome::AwayWin {
            away.wins += 1;
        }
    }

    let mut rows: Vec<TeamWinRate> = tallies
        .into_iter()
        .filter(|(_, tally)| tally.matches >= min_matches)
        .map(|(team, tally)| TeamWinRate {
            team: team.to_string(),
            matches: tally.matches,
            wins: tally.wins,
            win_rate: rate_pct(tally.wins, tally.matches),
        })
        .collect();
    sort_ranked(&mut rows, |r| (r.win_rate, r.matches), |r| &r.team);
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShootoutWinRate {
    pub team: String,
    pub shootouts: usize,
    pub wins: usize,
    pub win_rate: f64,
}

/// Shootout win rate per team, filtered to teams with at least `min_shootouts`.
pub fn shootout_win_rates(
    shootouts: &[ShootoutRecord],
    min_shootouts: usize,
    limit: usize,
) -> Vec<ShootoutWinRate> {
    #[derive(Default)]
    struct Tally {
        shootouts: usize,
        wins: usize,
    }

    let mut tallies: HashMap<&str, Tally> = HashMap::new();
    for s in shootouts {
        for team in [s.home_team.as_str(), s.away_team.as_str()] {
            let tally = tallies.entry(team).or_default();
            tally.shootouts += 1;
            if s.winner == team {
                tally.wins += 1;
            }
        }
    }

    let mut rows: Vec<ShootoutWinRate> = tallies
        .into_iter()
        .filter(|(_, tally)| tally.shootouts >= min_shootouts)
        .map(|(team, tally)| ShootoutWinRate {
            team: team.to_string(),
            shootouts: tally.shootouts,
            wins: tally.wins,
            win_rate: rate_pct(tally.wins, tally.shootouts),
        })
        .collect();
    sort_ranked(&mut rows, |r| (r.win_rate, r.shootouts), |r| &r.team);
    rows.truncate(limit);
    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerCount {
    pub scorer: String,
    pub goals: usize,
}

/// All-time top scorers, excluding own goals and rows with no scorer name.
pub fn top_scorers(goals: &[GoalRecord], limit: usize) -> Vec<ScorerCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for g in goals {
        if g.own_goal {
            continue;
        }
        let Some(name) = g.scorer.as_deref() else {
            continue;
        };
        *counts.entry(name).or_default() += 1;
    }
    let mut rows: Vec<ScorerCount> = counts
        .into_iter()
        .map(|(scorer, goals)| ScorerCount {
            scorer: scorer.to_string(),
            goals,
        })
        .collect();
    rows.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| a.scorer.cmp(&b.scorer)));
    rows.truncate(limit);
    rows
}

fn rate_pct(wins: usize, total: usize) -> f64 {
    ((wins as f64 / total as f64 * 100.0) * 10.0).round() / 10.0
}

/// Descending by (rate, sample size), then name ascending for stable output.
fn sort_ranked<T>(
    rows: &mut [T],
    key: impl Fn(&T) -> (f64, usize),
    name: impl Fn(&T) -> &str,
) {
    rows.sort_by(|a, b| {
        let (rate_a, n_a) = key(a);
        let (rate_b, n_b) = key(b);
        rate_b
            .total_cmp(&rate_a)
            .then_with(|| n_b.cmp(&n_a))
            .then_with(|| name(a).cmp(name(b)))
    });
}
