//! Comic-book palette and the iced theme built from it.

use iced::Theme as IcedTheme;
use iced::theme::Palette;
use iced::Color;

pub const PAPER: Color = rgb8(0xF8, 0xF3, 0xE7);
pub const PAPER_STAIN: Color = rgb8(0xE8, 0xE0, 0xD0);
pub const INK: Color = rgb8(0x12, 0x12, 0x12);
pub const COMIC_RED: Color = rgb8(0xC8, 0x4B, 0x31);
pub const COMIC_YELLOW: Color = rgb8(0xF2, 0xC1, 0x4E);
pub const COMIC_BLUE: Color = rgb8(0x2D, 0x7D, 0xD2);

const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

pub fn comic_theme() -> IcedTheme {
    IcedTheme::custom(
        "Comic Folio".to_string(),
        Palette {
            background: PAPER,
            text: INK,
            primary: COMIC_BLUE,
            success: COMIC_YELLOW,
            danger: COMIC_RED,
        },
    )
}

/// `color` with its alpha scaled by `factor`.
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_hex_values() {
        assert_eq!(PAPER, Color::from_rgb8(0xF8, 0xF3, 0xE7));
        assert_eq!(COMIC_BLUE, Color::from_rgb8(0x2D, 0x7D, 0xD2));
        assert_eq!(INK.a, 1.0);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let half = faded(COMIC_RED, 0.5);
        assert_eq!(half.r, COMIC_RED.r);
        assert_eq!(half.a, 0.5);
        assert_eq!(faded(INK, 3.0).a, 1.0);
    }
}
