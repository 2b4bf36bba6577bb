// Generates placeholder art for the editor when the real sheets are missing.
//
// art/tiles.png: 16 x 16 cells of 32 x 32 px, one distinct colour per cell.
// art/hero.png:  4 rows (left, down, right, up) x 3 walk frames of 16 x 24 px.

use image::{Rgba, RgbaImage};
use std::path::Path;

const TILE: u32 = 32;
const TILE_GRID: u32 = 16;
const HERO_W: u32 = 16;
const HERO_H: u32 = 24;

fn tile_color(index: u32) -> [u8; 4] {
    // Hue across columns, brightness down the rows.
    let col = index % TILE_GRID;
    let row = index / TILE_GRID;
    let hue = col as f32 / TILE_GRID as f32 * 6.0;
    let value = 0.35 + 0.65 * (1.0 - row as f32 / TILE_GRID as f32);
    let f = hue.fract();
    let (r, g, b) = match hue as u32 {
        0 => (1.0, f, 0.0),
        1 => (1.0 - f, 1.0, 0.0),
        2 => (0.0, 1.0, f),
        3 => (0.0, 1.0 - f, 1.0),
        4 => (f, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - f),
    };
    let to_u8 = |c: f32| (c * value * 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b), 0xFF]
}

fn draw_tiles() -> RgbaImage {
    let size = TILE * TILE_GRID;
    let mut img = RgbaImage::new(size, size);
    for index in 0..TILE_GRID * TILE_GRID {
        let ox = (index % TILE_GRID) * TILE;
        let oy = (index / TILE_GRID) * TILE;
        let fill = tile_color(index);
        let border = [fill[0] / 2, fill[1] / 2, fill[2] / 2, 0xFF];
        for y in 0..TILE {
            for x in 0..TILE {
                let on_border = x == 0 || x == TILE - 1 || y == 0 || y == TILE - 1;
                img.put_pixel(ox + x, oy + y, Rgba(if on_border { border } else { fill }));
            }
        }
    }
    img
}

fn draw_hero() -> RgbaImage {
    let mut img = RgbaImage::new(HERO_W * 3, HERO_H * 4);
    let body = Rgba([0xF5, 0xD0, 0x30, 0xFF]);
    let dark = Rgba([0x80, 0x60, 0x00, 0xFF]);
    let eye = Rgba([0x10, 0x10, 0x10, 0xFF]);

    for row in 0..4u32 {
        for frame in 0..3u32 {
            let ox = frame * HERO_W;
            let oy = row * HERO_H;
            // Leave two rows free at the bottom for the legs.
            for y in 0..HERO_H - 4 {
                for x in 2..HERO_W - 2 {
                    let edge = x == 2 || x == HERO_W - 3 || y == 0 || y == HERO_H - 5;
                    img.put_pixel(ox + x, oy + y, if edge { dark } else { body });
                }
            }
            // Legs alternate with the walk frame.
            let stride = [0i32, 2, -2][frame as usize];
            for y in HERO_H - 4..HERO_H {
                let lx = (5 + stride).clamp(0, HERO_W as i32 - 1) as u32;
                let rx = (10 - stride).clamp(0, HERO_W as i32 - 1) as u32;
                img.put_pixel(ox + lx, oy + y, dark);
                img.put_pixel(ox + rx, oy + y, dark);
            }
            // Eyes show the facing: left, down, right, up.
            let ey = HERO_H / 4;
            let eyes: &[u32] = match row {
                0 => &[4],
                1 => &[5, 10],
                2 => &[11],
                _ => &[],
            };
            for &ex in eyes {
                img.put_pixel(ox + ex, oy + ey, eye);
            }
        }
    }
    img
}

fn save_if_missing(path: &str, img: RgbaImage) {
    if !Path::new(path).exists() {
        img.save(path).unwrap_or_else(|e| println!("cargo:warning=could not save {path}: {e}"));
    }
}

fn main() {
    let dir = "art";
    if let Err(e) = std::fs::create_dir_all(dir) {
        println!("cargo:warning=could not create {dir}/: {e}");
        return;
    }

    save_if_missing(&format!("{dir}/tiles.png"), draw_tiles());
    save_if_missing(&format!("{dir}/hero.png"), draw_hero());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={dir}/tiles.png");
    println!("cargo:rerun-if-changed={dir}/hero.png");
}
