// File: crates/aqchart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

mod common;

use common::{co_no2, session};

#[test]
fn render_smoke_png() {
    let s = session(co_no2());

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    s.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = s.render_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_rgba8_buffer() {
    let s = session(co_no2());
    let (px, w, h, stride) = s.render_to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    let (sw, sh) = s.chart().config.surface_size();
    assert_eq!((w, h), (sw.ceil() as u32, sh.ceil() as u32));

    // Check background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);
}

#[test]
fn legend_names_are_drawn() {
    let s = session(co_no2());
    let (px, w, _h, stride) = s.render_to_rgba8().expect("rgba render");
    let background = &px[0..4];
    let row = s.chart().layout.legend_rows[0];

    // name text starts 80px into the row, after the value readout and swatch
    let (x0, y0) = (row.x as usize + 80, row.y as usize);
    let inked = (y0..y0 + row.height as usize)
        .flat_map(|y| (x0..(x0 + 80).min(w as usize)).map(move |x| y * stride + x * 4))
        .filter(|&i| &px[i..i + 4] != background)
        .count();
    assert!(inked > 0, "legend name region is blank");
}
