use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    // Componentwise multiply, used for tinting. White is the identity.
    pub fn modulate(self, other: Color) -> Color {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Color {
            r: mul(self.r, other.r),
            g: mul(self.g, other.g),
            b: mul(self.b, other.b),
            a: mul(self.a, other.a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16)?;
            let g = u8::from_str_radix(&s[2..4], 16)?;
            let b = u8::from_str_radix(&s[4..6], 16)?;
            Ok(Color { r, g, b, a: 255 })
        } else if s.len() == 8 {
            let a = u8::from_str_radix(&s[0..2], 16)?;
            let r = u8::from_str_radix(&s[2..4], 16)?;
            let g = u8::from_str_radix(&s[4..6], 16)?;
            let b = u8::from_str_radix(&s[6..8], 16)?;
            Ok(Color { r, g, b, a })
        } else {
            Err(anyhow!("invalid color: {}", s))
        }
    }
}

impl From<Color> for [f32; 4] {
    fn from(value: Color) -> Self {
        [
            value.r as f32 / 255.0,
            value.g as f32 / 255.0,
            value.b as f32 / 255.0,
            value.a as f32 / 255.0,
        ]
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(value: Color) -> Self {
        image::Rgba([value.r, value.g, value.b, value.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(value: image::Rgba<u8>) -> Self {
        Color {
            r: value.0[0],
            g: value.0[1],
            b: value.0[2],
            a: value.0[3],
        }
    }
}

pub fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut output = PathBuf::new();
    for part in path.iter() {
        if part == ".." {
            if !output.pop() {
                output.push(part);
            }
        } else {
            output.push(part);
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex() {
        let c: Color = "#ff8000".parse().unwrap();
        assert_eq!(c, Color::rgb(255, 128, 0));

        let c: Color = "80ff8000".parse().unwrap();
        assert_eq!(c, Color::rgba(255, 128, 0, 128));

        assert!("#ff80".parse::<Color>().is_err());
    }

    #[test]
    fn modulate_white_is_identity() {
        let c = Color::rgba(12, 34, 56, 78);
        assert_eq!(c.modulate(Color::WHITE), c);
        assert_eq!(Color::WHITE.modulate(c), c);
    }

    #[test]
    fn modulate_black_clears_rgb() {
        let c = Color::rgb(200, 100, 50);
        let tinted = c.modulate(Color::BLACK);
        assert_eq!(tinted.r, 0);
        assert_eq!(tinted.g, 0);
        assert_eq!(tinted.b, 0);
        assert_eq!(tinted.a, 255);
    }

    #[test]
    fn modulate_halves() {
        let half = Color::rgba(128, 128, 128, 255);
        let c = Color::rgb(255, 100, 0);
        let tinted = c.modulate(half);
        assert_eq!(tinted.r, 128);
        assert_eq!(tinted.g, 50);
        assert_eq!(tinted.b, 0);
    }

    #[test]
    fn color_to_f32() {
        let c: [f32; 4] = Color::rgba(255, 0, 255, 0).into();
        assert_eq!(c, [1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn normalize_path_removes_dotdot() {
        let path = Path::new("assets/../images/checker.png");
        let normalized = normalize_path(path).unwrap();
        assert_eq!(normalized, PathBuf::from("images/checker.png"));
    }
}
