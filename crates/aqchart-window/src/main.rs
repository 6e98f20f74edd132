// File: crates/aqchart-window/src/main.rs
// Summary: Interactive window that renders an aqchart Session via RGBA blit (CPU) using winit + softbuffer.
// Notes:
// - Wheel zooms about the cursor, left-drag pans the plot or moves the navigator indicator.
// - A left click without movement is a plot click (pin / release).
// - Keys: R reset zoom, H hide all, S show all, Esc quit.

use anyhow::{Context, Result};
use aqchart_core::{load_csv, Chart, ChartConfig, Event as ChartEvent, Point, Session, Target};
use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{
    ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Pixels of pointer travel before a plot press becomes a pan.
const CLICK_SLOP: f64 = 3.0;

/// Explore an air-quality chart interactively.
#[derive(Parser, Debug)]
#[command(name = "aqchart-window")]
#[command(about = "Interactive air-quality chart window")]
#[command(version)]
struct Args {
    /// Readings CSV (date, level, typeId, typeName).
    #[arg(default_value = "data/air_quality_2016.csv")]
    csv: PathBuf,

    /// Path to configuration file (JSON5 format).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme preset (overrides config).
    #[arg(long)]
    theme: Option<String>,
}

/// The left-button gesture in progress.
#[derive(Clone, Copy, Debug)]
enum Gesture {
    Plot { start: Point, last: Point, moved: bool },
    Navigator,
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
    let mut session = Session::new(Chart::new(dataset, config)?);

    let (sw, sh) = session.chart().config.surface_size();
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Air quality")
        .with_inner_size(PhysicalSize::new(sw.ceil() as u32, sh.ceil() as u32))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut cursor: Option<Point> = None;
    let mut gesture: Option<Gesture> = None;
    info!("window ready ({}x{})", sw, sh);

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let before = session.state().clone();
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => match key {
                    VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                    VirtualKeyCode::R => session.dispatch(ChartEvent::ResetZoom),
                    VirtualKeyCode::H => session.dispatch(ChartEvent::HideAll),
                    VirtualKeyCode::S => session.dispatch(ChartEvent::ShowAll),
                    _ => {}
                },
                WindowEvent::CursorMoved { position, .. } => {
                    let p = Point::new(position.x, position.y);
                    cursor = Some(p);
                    on_cursor(&mut session, &mut gesture, p);
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    session.dispatch(ChartEvent::PointerLeave);
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    if let Some(p) = cursor {
                        match state {
                            ElementState::Pressed => gesture = on_press(&mut session, p),
                            ElementState::Released => on_release(&mut session, gesture.take()),
                        }
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let plot = session.chart().layout.plot;
                    if let Some(p) = cursor.filter(|p| plot.contains(*p)) {
                        let factor = match delta {
                            MouseScrollDelta::LineDelta(_, y) => 2f64.powf(y as f64 * 0.2),
                            MouseScrollDelta::PixelDelta(d) => 2f64.powf(d.y * 0.002),
                        };
                        session.dispatch(ChartEvent::ZoomStart);
                        session.dispatch(ChartEvent::Zoom { center: plot.to_local(p), factor });
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&session, &mut surface) {
                    error!("render failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
        if session.state() != &before {
            window.request_redraw();
        }
    });
}

fn on_press(session: &mut Session, p: Point) -> Option<Gesture> {
    match session.press_at(p)? {
        Target::Plot(local) => Some(Gesture::Plot { start: local, last: local, moved: false }),
        Target::Navigator(_) if session.state().drag.is_some() => Some(Gesture::Navigator),
        target => {
            debug!("press on {target:?}");
            None
        }
    }
}

fn on_cursor(session: &mut Session, gesture: &mut Option<Gesture>, p: Point) {
    let layout = &session.chart().layout;
    let (plot, navigator) = (layout.plot, layout.navigator);
    match gesture {
        Some(Gesture::Plot { start, last, moved }) => {
            let local = plot.to_local(p);
            if !*moved && (local.x - start.x).hypot(local.y - start.y) < CLICK_SLOP {
                return;
            }
            *moved = true;
            let (dx, dy) = (local.x - last.x, local.y - last.y);
            *last = local;
            session.dispatch(ChartEvent::Pan { dx, dy });
        }
        Some(Gesture::Navigator) => session.dispatch(ChartEvent::NavigatorDrag(navigator.to_local(p))),
        None if plot.contains(p) => session.dispatch(ChartEvent::PointerMove(plot.to_local(p))),
        None if session.state().hover.is_some() => session.dispatch(ChartEvent::PointerLeave),
        None => {}
    }
}

fn on_release(session: &mut Session, gesture: Option<Gesture>) {
    match gesture {
        Some(Gesture::Plot { start, moved: false, .. }) => session.dispatch(ChartEvent::PlotClick(start)),
        Some(Gesture::Navigator) => session.dispatch(ChartEvent::NavigatorRelease),
        _ => {}
    }
}

/// Render the session and blit it as 0RGB pixels.
fn present(session: &Session, surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h, _) = session.render_to_rgba8()?;
    let (nw, nh) = NonZeroU32::new(w)
        .zip(NonZeroU32::new(h))
        .context("empty render surface")?;
    surface
        .resize(nw, nh)
        .map_err(|e| anyhow::anyhow!("softbuffer resize: {e}"))?;
    let mut frame = surface
        .buffer_mut()
        .map_err(|e| anyhow::anyhow!("softbuffer buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
        *dst = (r << 16) | (g << 8) | b;
    }
    frame.present().map_err(|e| anyhow::anyhow!("softbuffer present: {e}"))?;
    Ok(())
}
