// Configuration types
// Defaults match the classic feel: 16:9 field, score to 10, yellow ball

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Virtual field dimensions; rendering scales these to the terminal,
    // so changing them changes game feel, not resolution
    pub field_width: f32,
    pub field_height: f32,

    // Paddle geometry in virtual units
    pub paddle_width: f32,
    pub paddle_height: f32,

    // Distance of each paddle from its edge of the field
    pub paddle_margin: f32,

    // Ball edge length in virtual units (the ball is square)
    pub ball_size: f32,

    // Serve speed in virtual units per second; also scales the vertical
    // speed imparted by paddle hits
    pub ball_speed: f32,

    // Computer paddle tracking speed in virtual units per second
    pub ai_speed: f32,

    // Score required to win
    pub winning_score: u8,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            field_width: 854.0,
            field_height: 480.0,
            paddle_width: 12.0,
            paddle_height: 80.0,
            paddle_margin: 10.0,
            ball_size: 14.0,
            ball_speed: 240.0,
            ai_speed: 192.0,
            winning_score: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Colors as RGB values 0-255
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub center_line_color: [u8; 3],
    pub text_color: [u8; 3],
    pub background_color: [u8; 3],

    // Background color while the win flash is lit
    pub flash_color: [u8; 3],

    // Win flash toggle interval in milliseconds
    pub flash_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            paddle_color: [255, 255, 255],
            ball_color: [255, 235, 59],
            center_line_color: [140, 140, 140],
            text_color: [255, 255, 255],
            background_color: [32, 38, 46],
            flash_color: [255, 235, 59],
            flash_interval_ms: 200,
        }
    }
}
