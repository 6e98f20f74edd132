// File: crates/aqchart-core/src/render.rs
// Summary: Headless rasterising of a Scene using Skia CPU raster surfaces (PNG bytes/file, RGBA8).

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::{Point, Rect};
use crate::scene::{Align, DrawCommand, Scene};

/// Preferred sans-serif families, first match wins.
const FONT_FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "Liberation Sans"];

/// Typefaces resolved from the system font manager.
struct Fonts {
    regular: Option<skia::Typeface>,
    bold: Option<skia::Typeface>,
}

impl Fonts {
    fn system() -> Self {
        let mgr = skia::FontMgr::default();
        let resolve = |style: skia::FontStyle| {
            FONT_FAMILIES
                .iter()
                .find_map(|family| mgr.match_family_style(family, style))
                .or_else(|| mgr.legacy_make_typeface(None, style))
        };
        let regular = resolve(skia::FontStyle::normal());
        if regular.is_none() {
            tracing::warn!("no system typeface found; text will not be drawn");
        }
        let bold = resolve(skia::FontStyle::bold()).or_else(|| regular.clone());
        Self { regular, bold }
    }

    fn font(&self, size: f32, bold: bool) -> skia::Font {
        let typeface = if bold { &self.bold } else { &self.regular };
        match typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }
}

fn paint_scene(scene: &Scene) -> Result<skia::Surface> {
    let mut surface = skia::surfaces::raster_n32_premul((scene.width.max(1), scene.height.max(1)))
        .ok_or(ChartError::Render("failed to create raster surface"))?;
    let fonts = Fonts::system();
    let canvas = surface.canvas();
    canvas.clear(scene.background);
    for cmd in &scene.commands {
        draw_command(canvas, &fonts, cmd);
    }
    Ok(surface)
}

/// Render to PNG bytes in memory.
pub fn png_bytes(scene: &Scene) -> Result<Vec<u8>> {
    let mut surface = paint_scene(scene)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Render("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG at `path`, creating parent directories.
pub fn write_png(scene: &Scene, path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = png_bytes(scene)?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Unpremultiplied RGBA8 pixels, plus width, height and row stride.
pub fn rgba8(scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = paint_scene(scene)?;
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut px = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
        return Err(ChartError::Render("read pixels failed"));
    }
    Ok((px, w as u32, h as u32, stride))
}

// ---- helpers ----------------------------------------------------------------

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn rect(r: Rect) -> skia::Rect {
    skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn with_clip(canvas: &skia::Canvas, clip: Option<Rect>, draw: impl FnOnce(&skia::Canvas)) {
    match clip {
        Some(c) => {
            canvas.save();
            canvas.clip_rect(rect(c), None, Some(true));
            draw(canvas);
            canvas.restore();
        }
        None => draw(canvas),
    }
}

fn draw_command(canvas: &skia::Canvas, fonts: &Fonts, cmd: &DrawCommand) {
    match cmd {
        DrawCommand::Rect { rect: r, fill, stroke } => {
            if let Some(c) = fill {
                canvas.draw_rect(rect(*r), &fill_paint(*c));
            }
            if let Some(c) = stroke {
                canvas.draw_rect(rect(*r), &stroke_paint(*c, 1.0));
            }
        }
        DrawCommand::Polyline { segments, color, width, clip } => {
            let paint = stroke_paint(*color, *width);
            with_clip(canvas, *clip, |canvas| {
                for run in segments {
                    match run.as_slice() {
                        [] => {}
                        [only] => {
                            canvas.draw_circle(pt(*only), *width, &fill_paint(*color));
                        }
                        [first, rest @ ..] => {
                            let mut builder = skia::PathBuilder::new();
                            builder.move_to(pt(*first));
                            for p in rest {
                                builder.line_to(pt(*p));
                            }
                            let path = builder.detach();
                            canvas.draw_path(&path, &paint);
                        }
                    }
                }
            });
        }
        DrawCommand::Line { from, to, color, width } => {
            canvas.draw_line(pt(*from), pt(*to), &stroke_paint(*color, *width));
        }
        DrawCommand::Circle { center, radius, color, clip } => {
            with_clip(canvas, *clip, |canvas| {
                canvas.draw_circle(pt(*center), *radius as f32, &fill_paint(*color));
            });
        }
        DrawCommand::Text { origin, text, size, color, bold, align, rotate } => {
            let font = fonts.font(*size, *bold);
            let paint = fill_paint(*color);
            let (advance, _) = font.measure_str(text, Some(&paint));
            let dx = match align {
                Align::Start => 0.0,
                Align::Middle => -advance * 0.5,
                Align::End => -advance,
            };
            canvas.save();
            if *rotate != 0.0 {
                canvas.rotate(*rotate, Some(pt(*origin)));
            }
            canvas.draw_str(text, (origin.x as f32 + dx, origin.y as f32), &font, &paint);
            canvas.restore();
        }
    }
}
