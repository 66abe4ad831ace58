use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::PhysicsConfig;

#[derive(Debug, Clone)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Serve speed; also the vertical speed scale on paddle hits
    pub speed: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    pub fn center_y(&self) -> f32 {
        self.y + self.size / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Keep the paddle inside [0, field_height - height]
    pub fn clamp_y(&mut self, field_height: f32) {
        self.y = self.y.min(field_height - self.height).max(0.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "PLAYER",
            Side::Computer => "COMPUTER",
        }
    }
}

/// Win-screen flash effect: a repeating toggle on a fixed interval,
/// independent of the frame loop. Started on game over, cancelled on
/// restart so the toggle never outlives the game-over state.
#[derive(Debug, Clone)]
pub struct Blink {
    active: bool,
    on: bool,
    interval: Duration,
    last_toggle: Instant,
}

impl Blink {
    pub fn new(interval: Duration) -> Self {
        Self {
            active: false,
            on: false,
            interval,
            last_toggle: Instant::now(),
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.active = true;
        self.on = false;
        self.last_toggle = now;
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.on = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the flash color is currently lit
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Advance the effect; returns true if the phase flipped this call
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        if now.duration_since(self.last_toggle) >= self.interval {
            self.on = !self.on;
            self.last_toggle = now;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub player: Paddle,
    pub computer: Paddle,
    pub player_score: u8,
    pub ai_score: u8,
    pub game_over: bool,
    pub winner: Option<Side>,
    pub blink: Blink,
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_margin: f32,
    pub winning_score: u8,
}

impl GameState {
    pub fn new(physics: &PhysicsConfig, flash_interval: Duration) -> Self {
        let field_width = physics.field_width;
        let field_height = physics.field_height;
        let paddle_y = field_height / 2.0 - physics.paddle_height / 2.0;

        Self {
            ball: Ball {
                x: field_width / 2.0 - physics.ball_size / 2.0,
                y: field_height / 2.0 - physics.ball_size / 2.0,
                size: physics.ball_size,
                speed: physics.ball_speed,
                vx: 0.0,
                vy: 0.0,
            },
            player: Paddle {
                x: physics.paddle_margin,
                y: paddle_y,
                width: physics.paddle_width,
                height: physics.paddle_height,
            },
            computer: Paddle {
                x: field_width - physics.paddle_width - physics.paddle_margin,
                y: paddle_y,
                width: physics.paddle_width,
                height: physics.paddle_height,
            },
            player_score: 0,
            ai_score: 0,
            game_over: false,
            winner: None,
            blink: Blink::new(flash_interval),
            field_width,
            field_height,
            paddle_margin: physics.paddle_margin,
            winning_score: physics.winning_score,
        }
    }

    /// Re-center the ball and launch it. `dir` biases the horizontal
    /// direction toward the side that just won the point (+1 after a
    /// computer point, -1 after a player point); the launch also picks a
    /// random horizontal sign, matching the original serve exactly.
    pub fn serve(&mut self, dir: f32, rng: &mut impl Rng) {
        self.ball.x = self.field_width / 2.0 - self.ball.size / 2.0;
        self.ball.y = self.field_height / 2.0 - self.ball.size / 2.0;
        let flip = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vx = dir * self.ball.speed * flip;
        self.ball.vy = self.ball.speed * rng.gen_range(-1.0..1.0);
    }

    /// Full restart: zero scores, clear game over and winner, cancel the
    /// flash effect, re-center paddles, and serve
    pub fn reset_game(&mut self, rng: &mut impl Rng) {
        self.player_score = 0;
        self.ai_score = 0;
        self.game_over = false;
        self.winner = None;
        self.blink.cancel();
        self.recenter_paddles();
        self.serve(1.0, rng);
    }

    /// Reposition both paddles to the vertical center and pin the computer
    /// paddle back to its margin. Called on restart and on viewport resize.
    pub fn recenter_paddles(&mut self) {
        let paddle_y = self.field_height / 2.0 - self.player.height / 2.0;
        self.player.y = paddle_y;
        self.computer.y = paddle_y;
        self.computer.x = self.field_width - self.computer.width - self.paddle_margin;
    }
}
