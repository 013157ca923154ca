use std::collections::BTreeMap;

use crate::dataset::MatchRecord;

/// Decades with fewer matches than this are too sparse to chart.
pub const MIN_DECADE_MATCHES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub matches: usize,
}

/// Match volume per calendar year, ascending.
pub fn matches_per_year(matches: &[MatchRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for m in matches {
        *counts.entry(m.year()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, matches)| YearCount { year, matches })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecadeGoals {
    pub decade: i32,
    pub avg_goals: f64,
    pub matches: usize,
}

/// Mean total goals per decade, keeping only decades with enough matches.
pub fn goals_per_decade(matches: &[MatchRecord]) -> Vec<DecadeGoals> {
    let mut sums: BTreeMap<i32, (u64, usize)> = BTreeMap::new();
    for m in matches {
        let entry = sums.entry(m.decade()).or_default();
        entry.0 += u64::from(m.total_goals());
        entry.1 += 1;
    }
    sums.into_iter()
        .filter(|(_, (_, count))| *count >= MIN_DECADE_MATCHES)
        .map(|(decade, (goals, count))| DecadeGoals {
            decade,
            avg_goals: round2(goals as f64 / count as f64),
            matches: count,
        })
        .collect()
}

/// Coefficients of `a*x^2 + b*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadFit {
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

/// Degree-2 least-squares fit via the normal equations. Returns None for
/// fewer than three points or a singular system.
pub fn quadratic_fit(points: &[(f64, f64)]) -> Option<QuadFit> {
    if points.len() < 3 {
        return None;
    }

    // Sums of x^k for k=0..4 and x^k*y for k=0..2.
    let mut sx = [0.0f64; 5];
    let mut sxy = [0.0f64; 3];
    for &(x, y) in points {
        let mut xp = 1.0;
        for k in 0..5 {
            sx[k] += xp;
            if k < 3 {
                sxy[k] += xp * y;
            }
            xp *= x;
        }
    }

    let mut m = [
        [sx[4], sx[3], sx[2], sxy[2]],
        [sx[3], sx[2], sx[1], sxy[1]],
        [sx[2], sx[1], sx[0], sxy[0]],
    ];

    // Gaussian elimination with partial pivoting on the 3x3 system.
    for col in 0..3 {
        let pivot_row = (col..3).max_by(|&a, &b| m[a][col].abs().total_cmp(&m[b][col].abs()))?;
        if m[pivot_row][col].abs() < 1e-12 {
            return None;
        }
        m.swap(col, pivot_row);
        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let c2 = m[2][3] / m[2][2];
    let c1 = (m[1][3] - m[1][2] * c2) / m[1][1];
    let c0 = (m[0][3] - m[0][1] * c1 - m[0][2] * c2) / m[0][0];
    let fit = QuadFit { a: c0, b: c1, c: c2 };
    if fit.a.is_finite() && fit.b.is_finite() && fit.c.is_finite() {
        Some(fit)
    } else {
        None
    }
}

/// Decade summary plus the fitted trend, for the scoring-evolution chart.
pub fn scoring_trend(matches: &[MatchRecord]) -> (Vec<DecadeGoals>, Option<QuadFit>) {
    let decades = goals_per_decade(matches);
    let points: Vec<(f64, f64)> = decades
        .iter()
        .map(|d| (f64::from(d.decade), d.avg_goals))
        .collect();
    let fit = quadratic_fit(&points);
    (decades, fit)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_fit_recovers_parabola() {
        let points: Vec<(f64, f64)> = (0..8)
            .map(|i| {
                let x = f64::from(i);
                (x, 0.5 * x * x - 2.0 * x + 3.0)
            })
            .collect();
        let fit = quadratic_fit(&points).expect("well-conditioned fit");
        assert!((fit.a - 0.5).abs() < 1e-6);
        assert!((fit.b + 2.0).abs() < 1e-6);
        assert!((fit.c - 3.0).abs() < 1e-6);
        assert!((fit.eval(4.0) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn quadratic_fit_needs_three_points() {
        assert!(quadratic_fit(&[(0.0, 1.0), (1.0, 2.0)]).is_none());
    }

    #[test]
    fn quadratic_fit_rejects_degenerate_x() {
        // All x identical: the normal equations are singular.
        assert!(quadratic_fit(&[(2.0, 1.0), (2.0, 2.0), (2.0, 3.0), (2.0, 4.0)]).is_none());
    }

    #[test]
    fn matches_per_year_empty_is_empty() {
        assert!(matches_per_year(&[]).is_empty());
        assert!(goals_per_decade(&[]).is_empty());
    }
}
