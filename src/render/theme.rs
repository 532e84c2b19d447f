use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Neon,
    Retro,
}

/// Fixed color table for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub grid: Color,
    pub text: Color,
    pub accent: Color,
}

const DARK: Palette = Palette {
    name: "Dark",
    background: Color::Rgb(0x1a, 0x1a, 0x1a),
    snake_head: Color::Rgb(0x00, 0xff, 0x00),
    snake_body: Color::Rgb(0x00, 0x88, 0x00),
    food: Color::Rgb(0xff, 0x00, 0x00),
    grid: Color::Rgb(0x33, 0x33, 0x33),
    text: Color::Rgb(0xff, 0xff, 0xff),
    accent: Color::Rgb(0x4a, 0x90, 0xe2),
};

const NEON: Palette = Palette {
    name: "Neon",
    background: Color::Rgb(0x0a, 0x0a, 0x0a),
    snake_head: Color::Rgb(0x00, 0xff, 0xff),
    snake_body: Color::Rgb(0x00, 0x80, 0xff),
    food: Color::Rgb(0xff, 0x00, 0xff),
    grid: Color::Rgb(0x1a, 0x1a, 0x2e),
    text: Color::Rgb(0x00, 0xff, 0xff),
    accent: Color::Rgb(0xff, 0x00, 0xff),
};

const RETRO: Palette = Palette {
    name: "Retro",
    background: Color::Rgb(0x2d, 0x1b, 0x69),
    snake_head: Color::Rgb(0xff, 0xff, 0x00),
    snake_body: Color::Rgb(0xff, 0xa5, 0x00),
    food: Color::Rgb(0xff, 0x45, 0x00),
    grid: Color::Rgb(0x4a, 0x4a, 0x4a),
    text: Color::Rgb(0xff, 0xff, 0x00),
    accent: Color::Rgb(0xff, 0x45, 0x00),
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Neon => &NEON,
            Theme::Retro => &RETRO,
        }
    }

    /// Next theme in the cycle, for the in-game theme key
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Neon,
            Theme::Neon => Theme::Retro,
            Theme::Retro => Theme::Dark,
        }
    }
}
