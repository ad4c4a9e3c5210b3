use std::fmt::{Display, Formatter};

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::{Group, Rectangle, Text};

/// Number of distinct colors assigned to pallet types before the palette repeats
pub const PALETTE_SIZE: usize = 20;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Write the label and footprint on top of every placed pallet
    #[serde(default = "enabled")]
    pub labels: bool,
    ///Draw a legend with one entry per pallet type
    #[serde(default = "enabled")]
    pub legend: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            labels: true,
            legend: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub unit_fill: Color,
    pub text_color: Color,
    pub pallet_opacity: f32,
    pub palette: [Color; PALETTE_SIZE],
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        unit_fill: Color(0xCC, 0x82, 0x4A),
        text_color: Color(0x00, 0x00, 0x00),
        pallet_opacity: 0.6,
        palette: [
            Color(0x1F, 0x77, 0xB4), // BLUE
            Color(0xFF, 0x7F, 0x0E), // ORANGE
            Color(0x2C, 0xA0, 0x2C), // GREEN
            Color(0xD6, 0x27, 0x28), // RED
            Color(0x94, 0x67, 0xBD), // PURPLE
            Color(0x8C, 0x56, 0x4B), // BROWN
            Color(0xE3, 0x77, 0xC2), // PINK
            Color(0x7F, 0x7F, 0x7F), // GRAY
            Color(0xBC, 0xBD, 0x22), // OLIVE
            Color(0x17, 0xBE, 0xCF), // CYAN
            Color(0xAE, 0xC7, 0xE8), // LIGHT BLUE
            Color(0xFF, 0xBB, 0x78), // LIGHT ORANGE
            Color(0x98, 0xDF, 0x8A), // LIGHT GREEN
            Color(0xFF, 0x98, 0x96), // LIGHT RED
            Color(0xC5, 0xB0, 0xD5), // LIGHT PURPLE
            Color(0xC4, 0x9C, 0x94), // LIGHT BROWN
            Color(0xF7, 0xB6, 0xD2), // LIGHT PINK
            Color(0xC7, 0xC7, 0xC7), // LIGHT GRAY
            Color(0xDB, 0xDB, 0x8D), // LIGHT OLIVE
            Color(0x9E, 0xDA, 0xE5), // LIGHT CYAN
        ],
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        unit_fill: Color(0xD3, 0xD3, 0xD3),
        text_color: Color(0x00, 0x00, 0x00),
        pallet_opacity: 0.8,
        palette: [
            Color(0x4D, 0x4D, 0x4D),
            Color(0x99, 0x99, 0x99),
            Color(0x63, 0x63, 0x63),
            Color(0xAD, 0xAD, 0xAD),
            Color(0x7A, 0x7A, 0x7A),
            Color(0xC2, 0xC2, 0xC2),
            Color(0x4D, 0x4D, 0x4D),
            Color(0x99, 0x99, 0x99),
            Color(0x63, 0x63, 0x63),
            Color(0xAD, 0xAD, 0xAD),
            Color(0x7A, 0x7A, 0x7A),
            Color(0xC2, 0xC2, 0xC2),
            Color(0x4D, 0x4D, 0x4D),
            Color(0x99, 0x99, 0x99),
            Color(0x63, 0x63, 0x63),
            Color(0xAD, 0xAD, 0xAD),
            Color(0x7A, 0x7A, 0x7A),
            Color(0xC2, 0xC2, 0xC2),
            Color(0x4D, 0x4D, 0x4D),
            Color(0x99, 0x99, 0x99),
        ],
    };

    /// Color of the pallet type at `type_index`, cycling through the palette
    pub fn pallet_fill(&self, type_index: usize) -> Color {
        self.palette[type_index % PALETTE_SIZE]
    }
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid color {s:?}, expected #RRGGBB");
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

pub fn rect(x: f32, y: f32, width: f32, height: f32, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height);
    for param in params {
        rect = rect.set(param.0, param.1)
    }
    rect
}

/// Multi-line text centered on `(x, y)`, one [`Text`] element per line
pub fn centered_text(x: f32, y: f32, lines: &[String], font_size: f32, fill: Color) -> Group {
    let line_height = 1.2 * font_size;
    let y_first = y - 0.5 * line_height * lines.len().saturating_sub(1) as f32;
    lines
        .iter()
        .enumerate()
        .fold(Group::new(), |group, (i, line)| {
            group.add(
                Text::new(line.as_str())
                    .set("x", x)
                    .set("y", y_first + i as f32 * line_height)
                    .set("font-size", font_size)
                    .set("font-family", "sans-serif")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("fill", fill.to_string()),
            )
        })
}
