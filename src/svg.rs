//! Minimal SVG chart primitives: vertical bars, horizontal bars, and a line
//! series with an optional trend overlay. Documents are built as strings and
//! carry their own styling; callers only pick titles, labels, and colors.

use std::fmt::Write as _;

pub const BLUE: &str = "#2E86AB";
pub const GREEN: &str = "#06A77D";
pub const RED: &str = "#E63946";
pub const ORANGE: &str = "#F77F00";
pub const YELLOW: &str = "#F4D35E";
pub const PURPLE: &str = "#6A4C93";

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 540.0;
const MARGIN: f64 = 70.0;
/// Wider left gutter so horizontal bar labels (team/player names) fit.
const BARH_GUTTER: f64 = 230.0;
const AXIS_COLOR: &str = "#9ca3af";
const GRID_COLOR: &str = "#e5e7eb";
const TEXT_COLOR: &str = "#374151";
const MUTED_COLOR: &str = "#6b7280";

#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub caption: Option<String>,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            caption: None,
        }
    }

    pub fn with_caption(label: impl Into<String>, value: f64, caption: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            caption: Some(caption.into()),
        }
    }
}

/// Vertical bar chart. Bars cycle through `colors`; x labels are thinned when
/// there are too many bars to read.
pub fn bar_chart(title: &str, y_label: &str, bars: &[Bar], colors: &[&str]) -> String {
    let chart_w = WIDTH - 2.0 * MARGIN;
    let chart_h = HEIGHT - 2.0 * MARGIN;
    let max_value = max_value(bars.iter().map(|b| b.value)).max(1e-9);
    let scale = chart_h / (max_value * 1.15);
    let slot = chart_w / bars.len().max(1) as f64;
    let label_step = bars.len().div_ceil(16).max(1);

    let mut body = String::new();
    for (i, bar) in bars.iter().enumerate() {
        let x = MARGIN + i as f64 * slot;
        let bar_h = bar.value * scale;
        let y = MARGIN + chart_h - bar_h;
        let color = colors[i % colors.len()];
        let _ = write!(
            body,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" opacity="0.8"/>"##,
            x + slot * 0.05,
            y,
            slot * 0.9,
            bar_h,
            color
        );
        if i % label_step == 0 {
            let _ = write!(
                body,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10" fill="{}">{}</text>"##,
                x + slot / 2.0,
                HEIGHT - MARGIN + 18.0,
                MUTED_COLOR,
                xml_escape(&bar.label)
            );
        }
        if let Some(caption) = &bar.caption {
            let _ = write!(
                body,
                r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" font-weight="600" fill="{}">{}</text>"##,
                x + slot / 2.0,
                y - 6.0,
                TEXT_COLOR,
                xml_escape(caption)
            );
        }
    }

    frame(title, y_label, max_value * 1.15, MARGIN, &body)
}

/// Horizontal bar chart for ranked lists. The top three bars are highlighted.
pub fn barh_chart(title: &str, x_label: &str, bars: &[Bar], color: &str) -> String {
    let chart_w = WIDTH - BARH_GUTTER - MARGIN;
    let chart_h = HEIGHT - 2.0 * MARGIN;
    let max_value = max_value(bars.iter().map(|b| b.value)).max(1e-9);
    let scale = chart_w / (max_value * 1.2);
    let slot = chart_h / bars.len().max(1) as f64;

    let mut body = String::new();
    for (i, bar) in bars.iter().enumerate() {
        let y = MARGIN + i as f64 * slot;
        let bar_w = bar.value * scale;
        let fill = if i < 3 { GREEN } else { color };
        let _ = write!(
            body,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" opacity="0.85"/>"##,
            BARH_GUTTER,
            y + slot * 0.1,
            bar_w,
            slot * 0.8,
            fill
        );
        let _ = write!(
            body,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="{}">{}</text>"##,
            BARH_GUTTER - 8.0,
            y + slot * 0.6,
            TEXT_COLOR,
            xml_escape(&bar.label)
        );
        let caption = bar
            .caption
            .clone()
            .unwrap_or_else(|| fmt_value(bar.value));
        let _ = write!(
            body,
            r##"<text x="{:.1}" y="{:.1}" font-size="10" font-weight="600" fill="{}">{}</text>"##,
            BARH_GUTTER + bar_w + 6.0,
            y + slot * 0.6,
            MUTED_COLOR,
            xml_escape(&caption)
        );
    }

    let _ = write!(
        body,
        r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="{}">{}</text>"##,
        BARH_GUTTER + chart_w / 2.0,
        HEIGHT - MARGIN + 32.0,
        MUTED_COLOR,
        xml_escape(x_label)
    );
    let _ = write!(
        body,
        r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"##,
        BARH_GUTTER,
        MARGIN,
        BARH_GUTTER,
        HEIGHT - MARGIN,
        AXIS_COLOR
    );

    document(title, &body)
}

/// Line chart with circle markers and an optional dashed trend overlay
/// sharing the same axes. X values are labelled as integers.
pub fn line_chart(
    title: &str,
    y_label: &str,
    points: &[(f64, f64)],
    trend: Option<&[(f64, f64)]>,
) -> String {
    let chart_w = WIDTH - 2.0 * MARGIN;
    let chart_h = HEIGHT - 2.0 * MARGIN;
    let (x_min, x_max) = span(points.iter().map(|p| p.0));
    let y_max = max_value(
        points
            .iter()
            .map(|p| p.1)
            .chain(trend.into_iter().flatten().map(|p| p.1)),
    )
    .max(1e-9)
        * 1.15;
    let x_span = (x_max - x_min).max(1e-9);

    let to_x = |x: f64| MARGIN + (x - x_min) / x_span * chart_w;
    let to_y = |y: f64| MARGIN + chart_h - (y / y_max * chart_h);

    let mut body = String::new();
    if let Some(trend) = trend {
        let path = polyline(trend, to_x, to_y);
        let _ = write!(
            body,
            r##"<polyline points="{}" fill="none" stroke="{}" stroke-width="2" stroke-dasharray="6,4" opacity="0.7"/>"##,
            path, RED
        );
    }
    let path = polyline(points, to_x, to_y);
    let _ = write!(
        body,
        r##"<polyline points="{}" fill="none" stroke="{}" stroke-width="3"/>"##,
        path, BLUE
    );
    for &(x, y) in points {
        let _ = write!(
            body,
            r##"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"/>"##,
            to_x(x),
            to_y(y),
            BLUE
        );
        let _ = write!(
            body,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="10" fill="{}">{:.0}</text>"##,
            to_x(x),
            HEIGHT - MARGIN + 18.0,
            MUTED_COLOR,
            x
        );
    }

    frame(title, y_label, y_max, MARGIN, &body)
}

fn polyline(points: &[(f64, f64)], to_x: impl Fn(f64) -> f64, to_y: impl Fn(f64) -> f64) -> String {
    let mut out = String::new();
    for &(x, y) in points {
        let _ = write!(out, "{:.1},{:.1} ", to_x(x), to_y(y));
    }
    out.trim_end().to_string()
}

/// Axes, horizontal gridlines with value labels, y-axis caption, then body.
fn frame(title: &str, y_label: &str, y_max: f64, left: f64, body: &str) -> String {
    let chart_h = HEIGHT - 2.0 * MARGIN;
    let mut grid = String::new();
    for step in 1..=4 {
        let frac = f64::from(step) / 4.0;
        let y = MARGIN + chart_h - frac * chart_h;
        let _ = write!(
            grid,
            r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"##,
            left,
            y,
            WIDTH - MARGIN,
            y,
            GRID_COLOR
        );
        let _ = write!(
            grid,
            r##"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="10" fill="{}">{}</text>"##,
            left - 8.0,
            y + 4.0,
            MUTED_COLOR,
            fmt_value(y_max * frac)
        );
    }
    let _ = write!(
        grid,
        r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"##,
        left,
        HEIGHT - MARGIN,
        WIDTH - MARGIN,
        HEIGHT - MARGIN,
        AXIS_COLOR
    );
    let _ = write!(
        grid,
        r##"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"##,
        left,
        MARGIN,
        left,
        HEIGHT - MARGIN,
        AXIS_COLOR
    );
    let _ = write!(
        grid,
        r##"<text x="18" y="{:.1}" text-anchor="middle" font-size="12" fill="{}" transform="rotate(-90, 18, {:.1})">{}</text>"##,
        HEIGHT / 2.0,
        MUTED_COLOR,
        HEIGHT / 2.0,
        xml_escape(y_label)
    );
    document(title, &format!("{grid}{body}"))
}

fn document(title: &str, body: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" style="background:white">
<text x="{:.1}" y="32" text-anchor="middle" font-size="16" font-weight="600" fill="{}">{}</text>
{}
</svg>
"##,
        WIDTH,
        HEIGHT,
        WIDTH / 2.0,
        TEXT_COLOR,
        xml_escape(title),
        body
    )
}

fn max_value(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0f64, f64::max)
}

fn span(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() { (min, max) } else { (0.0, 1.0) }
}

fn fmt_value(v: f64) -> String {
    if v >= 100.0 {
        format!("{v:.0}")
    } else if v >= 10.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}

fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
