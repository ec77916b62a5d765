#![allow(clippy::uninlined_format_args)]

use image::{ImageBuffer, Rgb};
use std::process;
use widechar_width::{classify, WcWidth};

fn color(width: WcWidth) -> Rgb<u8> {
    match width {
        WcWidth::One => Rgb([255, 255, 255]),
        WcWidth::Two => Rgb([0, 0, 0]),
        WcWidth::NonPrint => Rgb([200, 30, 30]),
        WcWidth::Combining => Rgb([230, 140, 20]),
        WcWidth::Ambiguous => Rgb([30, 110, 210]),
        WcWidth::PrivateUse => Rgb([150, 150, 150]),
        WcWidth::Unassigned => Rgb([220, 220, 220]),
        WcWidth::WidenedIn9 => Rgb([40, 170, 70]),
        WcWidth::NonCharacter => Rgb([140, 40, 160]),
    }
}

fn main() {
    let width = 512;
    let height = 400;
    // One pixel per codepoint, 0x32000 codepoints per image.
    let diagrams = [("bmp_smp.png", 0), ("sip_tip.png", 0x20000)];
    for (name, base) in diagrams {
        let mut imgbuf = ImageBuffer::new(width, height);
        for (col, row, pixel) in imgbuf.enumerate_pixels_mut() {
            *pixel = color(classify(base + row * width + col));
        }
        if let Err(err) = imgbuf.save(name) {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
