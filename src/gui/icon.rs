// src/gui/icon.rs
//
// Window icon, drawn in code: a page with a folded corner and text lines.

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

const SIZE: u32 = 64;

pub fn render() -> RgbaImage {
    let paper = Rgba([0xF4, 0xF1, 0xE8, 0xFF]);
    let fold = Rgba([0xC8, 0xC2, 0xB0, 0xFF]);
    let ink = Rgba([0x3A, 0x5A, 0x8C, 0xFF]);
    let clear = Rgba([0, 0, 0, 0]);

    let (left, right, top, bottom) = (12, 52, 6, 58);
    let corner = 12;

    RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        if x < left || x >= right || y < top || y >= bottom {
            return clear;
        }
        // folded corner (top right)
        let dx = right - 1 - x;
        let dy = y - top;
        if dx + dy < corner {
            return if dx + dy >= corner - 2 { fold } else { clear };
        }
        // text lines
        let line = (y - top) >= 18 && (y - top) % 8 < 3 && x >= left + 6 && x < right - 6;
        if line { ink } else { paper }
    })
}

pub fn icon_data() -> IconData {
    let rgba = render();
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}
