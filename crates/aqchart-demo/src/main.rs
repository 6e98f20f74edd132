// File: crates/aqchart-demo/src/main.rs
// Summary: Demo loads an air-quality CSV and renders the overview plus a scripted interaction walk to PNGs.

use anyhow::{Context, Result};
use aqchart_core::{load_csv, Chart, ChartConfig, Event, Point, Session};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render an air-quality time series chart to PNG files.
#[derive(Parser, Debug)]
#[command(name = "aqchart-demo")]
#[command(about = "Render an air-quality chart and a scripted interaction walk to PNGs")]
#[command(version)]
struct Args {
    /// Readings CSV (date, level, typeId, typeName).
    #[arg(default_value = "data/air_quality_2016.csv")]
    csv: PathBuf,

    /// Path to configuration file (JSON5 format).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the PNGs are written to.
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset (overrides config).
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match &args.config {
        Some(path) => ChartConfig::load_from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let dataset = load_csv(&args.csv)
        .with_context(|| format!("failed to load CSV '{}'", args.csv.display()))?;
    if dataset.is_empty() {
        anyhow::bail!("no readings loaded from '{}'; check headers", args.csv.display());
    }

    let mut session = Session::new(Chart::new(dataset, config)?);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    walk(&mut session, &args.out_dir)
}

/// Drive the session through the main interactions, writing one frame per step.
fn walk(session: &mut Session, out_dir: &Path) -> Result<()> {
    let (w, h) = (session.chart().config.width, session.chart().config.height);
    let ids = session.chart().dataset.category_ids();

    write_frame(session, out_dir, "overview")?;

    session.dispatch(Event::PointerMove(Point::new(w * 0.5, h * 0.5)));
    write_frame(session, out_dir, "hover")?;

    if let Some(first) = ids.first() {
        session.dispatch(Event::LegendClick(first.clone()));
        write_frame(session, out_dir, "pinned")?;
    }
    if let Some(second) = ids.get(1) {
        session.dispatch(Event::LegendClick(second.clone()));
        write_frame(session, out_dir, "comparing")?;
    }

    session.dispatch(Event::ZoomStart);
    session.dispatch(Event::Zoom { center: Point::new(w * 0.25, h * 0.5), factor: 3.0 });
    write_frame(session, out_dir, "zoomed")?;

    let indicator = session.chart().navigator.indicator(&session.state().transform);
    let grab = Point::new(indicator.x + indicator.width * 0.5, indicator.y + indicator.height * 0.5);
    session.dispatch(Event::NavigatorPress(grab));
    session.dispatch(Event::NavigatorDrag(grab.offset(indicator.width, 0.0)));
    session.dispatch(Event::NavigatorRelease);
    write_frame(session, out_dir, "navigator_drag")?;

    session.dispatch(Event::PointerMove(Point::new(w * 0.5, h * 0.4)));
    write_frame(session, out_dir, "zoomed_hover")?;

    session.dispatch(Event::ResetZoom);
    session.dispatch(Event::ShowAll);
    write_frame(session, out_dir, "reset")?;
    Ok(())
}

fn write_frame(session: &Session, out_dir: &Path, name: &str) -> Result<()> {
    let path = out_dir.join(format!("chart_{name}.png"));
    session
        .render_to_png(&path)
        .with_context(|| format!("rendering {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
