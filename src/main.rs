use std::path::PathBuf;

use anyhow::Result;

use football_insights::charts;
use football_insights::dataset::Dataset;
use football_insights::export;

struct Options {
    data_dir: PathBuf,
    out_dir: PathBuf,
    xlsx: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let opts = parse_options();

    println!("Loading datasets from {}", opts.data_dir.display());
    let data = Dataset::load(&opts.data_dir)?;
    println!(
        "Loaded {} matches, {} goals, {} shootouts",
        data.matches.len(),
        data.goals.len(),
        data.shootouts.len()
    );

    let summary = charts::render_all(&opts.out_dir, &data)?;
    for path in &summary.written {
        println!("wrote {}", path.display());
    }
    for name in &summary.skipped {
        println!("skipped {name} (empty summary)");
    }

    if let Some(xlsx) = &opts.xlsx {
        let report = export::export_summaries(xlsx, &data)?;
        println!(
            "exported {} sheets ({} rows) to {}",
            report.sheets,
            report.rows,
            xlsx.display()
        );
    }

    println!(
        "Chart generation complete: {} written, {} skipped",
        summary.written.len(),
        summary.skipped.len()
    );
    Ok(())
}

fn parse_options() -> Options {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let data_dir = parse_path_arg(&args, "--data-dir")
        .or_else(|| env_path("FOOTY_DATA_DIR"))
        .unwrap_or_else(|| PathBuf::from("data"));
    let out_dir = parse_path_arg(&args, "--out-dir")
        .or_else(|| env_path("FOOTY_OUT_DIR"))
        .unwrap_or_else(|| PathBuf::from("charts"));
    let xlsx = parse_path_arg(&args, "--xlsx");
    Options {
        data_dir,
        out_dir,
        xlsx,
    }
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(PathBuf::from(next));
            }
        }
    }
    None
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}
