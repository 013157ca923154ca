use chrono::NaiveDate;
use football_insights::breakdowns::{self, TOURNAMENT_LIMIT};
use football_insights::dataset::{Dataset, GoalRecord, MatchRecord, ShootoutRecord, TournamentClass};
use football_insights::rankings::{self, MIN_SHOOTOUTS, MIN_TEAM_MATCHES, SCORER_LIMIT, TEAM_LIMIT};
use football_insights::trends;

use std::path::PathBuf;

fn fixture_dataset() -> Dataset {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("dataset");
    Dataset::load(&path).expect("fixture should load")
}

fn match_in_year(year: i32, home: &str, away: &str, home_score: u32, away_score: u32) -> MatchRecord {
    MatchRecord {
        date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_score,
        away_score,
        tournament: "Friendly".to_string(),
        neutral: false,
    }
}

fn goal(scorer: Option<&str>, minute: Option<u32>, own_goal: bool, penalty: bool) -> GoalRecord {
    GoalRecord {
        date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        home_team: "Alpha".to_string(),
        away_team: "Beta".to_string(),
        team: "Alpha".to_string(),
        scorer: scorer.map(|s| s.to_string()),
        minute,
        own_goal,
        penalty,
    }
}

#[test]
fn total_goals_matches_score_sum() {
    let data = fixture_dataset();
    for m in &data.matches {
        assert_eq!(m.total_goals(), m.home_score + m.away_score);
    }
}

#[test]
fn outcome_shares_for_three_match_example() {
    // Scores (2,1), (0,0), (1,3), all non-neutral: one of each outcome at 33.3%.
    let matches = vec![
        match_in_year(2000, "A", "B", 2, 1),
        match_in_year(2000, "C", "D", 0, 0),
        match_in_year(2000, "E", "F", 1, 3),
    ];
    let rows = breakdowns::home_advantage(&matches);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.matches, 1);
        assert!((row.pct - 33.3).abs() < 0.05);
    }
    let pct_sum: f64 = rows.iter().map(|r| r.pct).sum();
    assert!((pct_sum - 100.0).abs() < 0.2, "percentages should sum to ~100, got {pct_sum}");
}

#[test]
fn neutral_matches_are_excluded_from_home_advantage() {
    let mut neutral = match_in_year(2000, "A", "B", 5, 0);
    neutral.neutral = true;
    let rows = breakdowns::home_advantage(&[neutral]);
    assert!(rows.is_empty());
}

#[test]
fn win_rate_threshold_and_ordering() {
    let mut matches = Vec::new();
    // Alpha: 50 matches, 40 wins. Beta supplies the opposition.
    for i in 0..50 {
        let (hs, aw) = if i < 40 { (2, 0) } else { (0, 1) };
        matches.push(match_in_year(2000, "Alpha", "Beta", hs, aw));
    }
    // Gamma: 49 matches, all wins; under the threshold, must not appear.
    for _ in 0..49 {
        matches.push(match_in_year(2000, "Gamma", "Delta", 1, 0));
    }

    let rows = rankings::team_win_rates(&matches, MIN_TEAM_MATCHES, TEAM_LIMIT);
    assert!(rows.iter().all(|r| r.matches >= MIN_TEAM_MATCHES));
    assert!(rows.iter().all(|r| r.team != "Gamma"));
    for pair in rows.windows(2) {
        assert!(pair[0].win_rate >= pair[1].win_rate, "rows must be sorted descending");
    }

    let alpha = rows.iter().find(|r| r.team == "Alpha").expect("Alpha qualifies");
    assert_eq!(alpha.matches, 50);
    assert_eq!(alpha.wins, 40);
    assert_eq!(alpha.win_rate, 80.0);
}

#[test]
fn shootout_rates_respect_threshold() {
    let mut shootouts = Vec::new();
    for i in 0..6 {
        shootouts.push(ShootoutRecord {
            date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            home_team: "Alpha".to_string(),
            away_team: "Beta".to_string(),
            winner: if i < 4 { "Alpha" } else { "Beta" }.to_string(),
        });
    }
    // One-off appearance stays out.
    shootouts.push(ShootoutRecord {
        date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        home_team: "Gamma".to_string(),
        away_team: "Delta".to_string(),
        winner: "Gamma".to_string(),
    });

    let rows = rankings::shootout_win_rates(&shootouts, MIN_SHOOTOUTS, TEAM_LIMIT);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].team, "Alpha");
    assert!((rows[0].win_rate - 66.7).abs() < 0.05);
    assert_eq!(rows[1].team, "Beta");
}

#[test]
fn goal_methods_partition_the_goal_set() {
    let goals = vec![
        goal(Some("A"), Some(5), false, false),
        goal(Some("B"), Some(15), false, true),
        goal(Some("C"), Some(25), true, false),
        goal(Some("D"), Some(35), true, true),
        goal(None, None, false, false),
    ];
    let rows = breakdowns::goal_methods(&goals);
    assert_eq!(rows.len(), 3);
    let counted: usize = rows.iter().map(|r| r.goals).sum();
    assert_eq!(counted, goals.len(), "every goal must be counted exactly once");
    let pct_sum: f64 = rows.iter().map(|r| r.pct).sum();
    assert!((pct_sum - 100.0).abs() < 0.2);
}

#[test]
fn class_scoring_means_over_fixture() {
    let data = fixture_dataset();
    let rows = breakdowns::scoring_by_class(&data.matches);
    assert_eq!(rows.len(), 2);

    // Competitive fixture matches: 4-0, 2-0, 0-0, 2-2.
    let competitive = &rows[0];
    assert_eq!(competitive.class, TournamentClass::Competitive);
    assert_eq!(competitive.matches, 4);
    assert!((competitive.avg_home_goals - 2.0).abs() < 1e-9);
    assert!((competitive.avg_away_goals - 0.5).abs() < 1e-9);
    assert!((competitive.avg_total_goals - 2.5).abs() < 1e-9);

    // Friendly/other fixture matches: 1-3, 1-1.
    let friendly = &rows[1];
    assert_eq!(friendly.class, TournamentClass::Friendly);
    assert_eq!(friendly.matches, 2);
    assert!((friendly.avg_home_goals - 1.0).abs() < 1e-9);
    assert!((friendly.avg_away_goals - 2.0).abs() < 1e-9);
    assert!((friendly.avg_total_goals - 3.0).abs() < 1e-9);

    let total: usize = rows.iter().map(|r| r.matches).sum();
    assert_eq!(total, data.matches.len());
}

#[test]
fn timing_buckets_use_fixture_minutes() {
    let data = fixture_dataset();
    let rows = breakdowns::goals_by_period(&data.goals);
    assert_eq!(rows.len(), 6);
    // Six known minutes in the fixture: 16, 65, 25, 47, 76, 90 (one blank excluded).
    assert_eq!(rows.iter().map(|r| r.goals).sum::<usize>(), 6);
    assert_eq!(rows[1].goals, 2, "minutes 16 and 25 fall in 16-30");
    assert_eq!(rows[5].goals, 2, "minutes 76 and 90 fall in 76-90+");
}

#[test]
fn top_scorers_skip_own_goals_and_missing_names() {
    let goals = vec![
        goal(Some("Striker"), Some(10), false, false),
        goal(Some("Striker"), Some(20), false, false),
        goal(Some("Defender"), Some(30), true, false),
        goal(None, Some(40), false, false),
        goal(Some("Poacher"), Some(50), false, true),
    ];
    let rows = rankings::top_scorers(&goals, SCORER_LIMIT);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].scorer, "Striker");
    assert_eq!(rows[0].goals, 2);
    assert_eq!(rows[1].scorer, "Poacher");
}

#[test]
fn decade_scoring_filters_sparse_decades() {
    let mut matches = Vec::new();
    for _ in 0..100 {
        matches.push(match_in_year(1995, "A", "B", 2, 1));
    }
    for _ in 0..99 {
        matches.push(match_in_year(1985, "A", "B", 4, 0));
    }
    let rows = trends::goals_per_decade(&matches);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].decade, 1990);
    assert_eq!(rows[0].matches, 100);
    assert!((rows[0].avg_goals - 3.0).abs() < 1e-9);
}

#[test]
fn matches_per_year_counts_ascending() {
    let data = fixture_dataset();
    let rows = trends::matches_per_year(&data.matches);
    assert_eq!(rows[0].year, 1950);
    assert_eq!(rows[0].matches, 2);
    assert_eq!(rows.iter().map(|r| r.matches).sum::<usize>(), data.matches.len());
    for pair in rows.windows(2) {
        assert!(pair[0].year < pair[1].year);
    }
}

#[test]
fn tournament_counts_are_ranked() {
    let data = fixture_dataset();
    let rows = breakdowns::top_tournaments(&data.matches, TOURNAMENT_LIMIT);
    assert_eq!(rows[0].tournament, "FIFA World Cup");
    assert_eq!(rows[0].matches, 3);
    for pair in rows.windows(2) {
        assert!(pair[0].matches >= pair[1].matches);
    }
}

#[test]
fn venue_split_orders_home_first() {
    let data = fixture_dataset();
    let rows = breakdowns::venue_split(&data.matches);
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].neutral);
    assert_eq!(rows[0].matches, 4);
    assert!(rows[1].neutral);
    assert_eq!(rows[1].matches, 2);
    // Neutral fixture matches: 2-0 and 0-0, so one goal per match on average.
    assert!((rows[1].avg_goals - 1.0).abs() < 1e-9);
}

#[test]
fn margin_bands_cover_all_matches() {
    let data = fixture_dataset();
    let rows = breakdowns::margin_bands(&data.matches);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().map(|r| r.matches).sum::<usize>(), data.matches.len());
}

#[test]
fn empty_inputs_yield_empty_summaries() {
    assert!(trends::matches_per_year(&[]).is_empty());
    assert!(trends::goals_per_decade(&[]).is_empty());
    assert!(breakdowns::home_advantage(&[]).is_empty());
    assert!(breakdowns::scoring_by_class(&[]).is_empty());
    assert!(breakdowns::goals_by_period(&[]).is_empty());
    assert!(breakdowns::top_tournaments(&[], TOURNAMENT_LIMIT).is_empty());
    assert!(breakdowns::venue_split(&[]).is_empty());
    assert!(breakdowns::goal_methods(&[]).is_empty());
    assert!(breakdowns::margin_bands(&[]).is_empty());
    assert!(rankings::team_win_rates(&[], MIN_TEAM_MATCHES, TEAM_LIMIT).is_empty());
    assert!(rankings::shootout_win_rates(&[], MIN_SHOOTOUTS, TEAM_LIMIT).is_empty());
    assert!(rankings::top_scorers(&[], SCORER_LIMIT).is_empty());
}
