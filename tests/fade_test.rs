//! File-level tests for `mdcolors fade`.

mod common;

use common::{fixtures, read_png_file, TestWorkspace};
use md_palette::{FadeMode, Profile, TileSize};
use mdcolors::models::FadeSettings;
use mdcolors::services::FaderService;
use pretty_assertions::assert_eq;

fn service(mode: FadeMode, include_endpoint: bool) -> FaderService {
    FaderService::new(&FadeSettings {
        source: Profile::SKCollect,
        destination: Profile::SKCollect,
        mode,
        include_endpoint,
        tile: TileSize::new(16, 16),
        optimize: false,
    })
}

#[test]
fn test_fade_writes_fifteen_frames() {
    let ws = TestWorkspace::new();
    let input = ws.write("title.png", &fixtures::rgb_png());

    let written = service(FadeMode::CurrentToBlack, false)
        .fade_file(&input, &ws.file("frames"), "title")
        .unwrap();

    assert_eq!(written.len(), 15);
    let expected: Vec<String> = (0..15).map(|i| format!("title_{i:02}.png")).collect();
    assert_eq!(ws.list("frames"), expected);
}

#[test]
fn test_fade_with_endpoint_ends_black_and_keeps_alpha() {
    let ws = TestWorkspace::new();
    let (png_bytes, raw) = fixtures::rgba_png();
    let input = ws.write("sprite.png", &png_bytes);

    let written = service(FadeMode::CurrentToBlack, true)
        .fade_file(&input, &ws.file("out"), "sprite")
        .unwrap();

    assert_eq!(written.len(), 16);
    assert!(written[15].ends_with("sprite_15.png"));

    for path in &written {
        let frame = read_png_file(path);
        assert_eq!(frame.color_type, png::ColorType::Rgba);
        common::assert_alpha_kept(&raw, &frame.data, 4);
        common::assert_on_grid(&frame.data, 4, 3, &fixtures::skc::LEVELS);
    }

    let last = read_png_file(&written[15]);
    assert!(last.data.chunks_exact(4).all(|px| px[..3] == [0, 0, 0]));
}

#[test]
fn test_fade_in_ends_at_conversion() {
    let ws = TestWorkspace::new();
    let input = ws.write("in.png", &fixtures::rgb_png());

    let written = service(FadeMode::BlackToCurrent, true)
        .fade_file(&input, ws.path(), "in")
        .unwrap();

    let first = read_png_file(&written[0]);
    assert!(first.data.iter().all(|&v| v == 0));

    // Step 15 of a fade-in reproduces the converted image
    let convert = mdcolors::services::ConverterService::new(&mdcolors::models::ConvertSettings {
        source: Profile::SKCollect,
        destination: Profile::SKCollect,
        shadow_highlight: false,
        tile: TileSize::DEFAULT,
        optimize: false,
    });
    let converted = common::read_raw_png(&convert.convert_png(&fixtures::rgb_png()).unwrap());
    assert_eq!(read_png_file(&written[15]).data, converted.data);
}

#[test]
fn test_indexed_fade_keeps_indices() {
    let ws = TestWorkspace::new();
    let input = ws.write("pal.png", &fixtures::indexed_png());
    let before = read_png_file(&input);

    let written = service(FadeMode::CurrentToWhite, false)
        .fade_file(&input, &ws.file("pal"), "pal")
        .unwrap();

    assert_eq!(written.len(), 15);
    for path in &written {
        let frame = read_png_file(path);
        assert_eq!(frame.color_type, png::ColorType::Indexed);
        assert_eq!(frame.bit_depth, png::BitDepth::Two);
        assert_eq!(frame.data, before.data);
        assert_eq!(frame.trns, before.trns);
    }

    let first = read_png_file(&written[0]);
    assert_eq!(first.palette, before.palette);
}

#[test]
fn test_rgb_color_key_fades_with_image() {
    let ws = TestWorkspace::new();
    let (png_bytes, _) = fixtures::keyed_rgb_png();
    let input = ws.write("keyed.png", &png_bytes);

    let written = service(FadeMode::CurrentToBlack, true)
        .fade_file(&input, &ws.file("out"), "keyed")
        .unwrap();

    assert_eq!(written.len(), 16);
    for path in &written {
        common::assert_keyed_transparency(&read_png_file(path), 3, &[0, 5]);
    }

    // Untouched first frame keeps its key, the black endpoint needs alpha
    let first = read_png_file(&written[0]);
    assert_eq!(first.color_type, png::ColorType::Rgb);
    assert_eq!(first.trns, Some(vec![0x22, 0x44, 0x66]));
    assert_eq!(read_png_file(&written[15]).color_type, png::ColorType::Rgba);
}

#[test]
fn test_gray_color_key_fades_with_image() {
    let ws = TestWorkspace::new();
    let (png_bytes, _) = fixtures::gray_png(Some(0x60));
    let input = ws.write("gray.png", &png_bytes);

    let written = service(FadeMode::BlackToCurrent, true)
        .fade_file(&input, &ws.file("out"), "gray")
        .unwrap();

    for path in &written {
        common::assert_keyed_transparency(&read_png_file(path), 1, &[1]);
    }

    let last = read_png_file(&written[15]);
    assert_eq!(last.color_type, png::ColorType::Grayscale);
    assert_eq!(last.data, vec![0x22, 0x66, 0xAA, 0xEE]);
    assert_eq!(last.trns, Some(vec![0x66]));
}

#[test]
fn test_gray_fade_without_key_stays_gray() {
    let ws = TestWorkspace::new();
    let (png_bytes, _) = fixtures::gray_png(None);
    let input = ws.write("gray.png", &png_bytes);

    let written = service(FadeMode::CurrentToWhite, false)
        .fade_file(&input, &ws.file("out"), "gray")
        .unwrap();

    for path in &written {
        let frame = read_png_file(path);
        assert_eq!(frame.color_type, png::ColorType::Grayscale);
        assert_eq!(frame.trns, None);
        common::assert_on_grid(&frame.data, 1, 1, &fixtures::skc::LEVELS);
    }
}

#[test]
fn test_gray_alpha_fade_keeps_alpha() {
    let ws = TestWorkspace::new();
    let (png_bytes, raw) = fixtures::gray_alpha_png();
    let input = ws.write("ga.png", &png_bytes);

    let written = service(FadeMode::CurrentToBlack, false)
        .fade_file(&input, &ws.file("out"), "ga")
        .unwrap();

    for path in &written {
        let frame = read_png_file(path);
        assert_eq!(frame.color_type, png::ColorType::GrayscaleAlpha);
        common::assert_alpha_kept(&raw, &frame.data, 2);
    }
}
