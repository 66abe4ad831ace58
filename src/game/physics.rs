use std::time::Instant;

use rand::Rng;

use super::state::{Ball, GameState, Paddle, Side};

/// Things that happened during one physics step, for diagnostics logging
#[derive(Debug, Default, Clone, Copy)]
pub struct StepEvents {
    pub wall_hit: bool,
    pub paddle_hit: bool,
    pub point_scored: bool,
    pub game_over: bool,
}

impl StepEvents {
    pub fn any(&self) -> bool {
        self.wall_hit || self.paddle_hit || self.point_scored || self.game_over
    }
}

/// Advance the ball one frame: integrate, bounce off walls and paddles,
/// then score if the ball left the field horizontally.
pub fn update(state: &mut GameState, dt: f32, rng: &mut impl Rng) -> StepEvents {
    let mut events = StepEvents::default();
    if state.game_over {
        return events;
    }

    state.ball.x += state.ball.vx * dt;
    state.ball.y += state.ball.vy * dt;

    // Wall bounce: clamp to the field and force the vertical velocity
    // away from the wall
    if state.ball.y < 0.0 {
        state.ball.y = 0.0;
        state.ball.vy = state.ball.vy.abs();
        events.wall_hit = true;
    } else if state.ball.y + state.ball.size > state.field_height {
        state.ball.y = state.field_height - state.ball.size;
        state.ball.vy = -state.ball.vy.abs();
        events.wall_hit = true;
    }

    // Player paddle: push the ball out to the paddle's right edge and
    // send it back angled by where it struck
    if overlaps(&state.ball, &state.player) {
        state.ball.x = state.player.x + state.player.width;
        state.ball.vx = state.ball.vx.abs();
        state.ball.vy = deflection(&state.ball, &state.player);
        events.paddle_hit = true;
    }

    // Computer paddle: mirror image
    if overlaps(&state.ball, &state.computer) {
        state.ball.x = state.computer.x - state.ball.size;
        state.ball.vx = -state.ball.vx.abs();
        state.ball.vy = deflection(&state.ball, &state.computer);
        events.paddle_hit = true;
    }

    // Ball out on the left: computer scores
    if state.ball.x < 0.0 {
        state.ai_score += 1;
        events.point_scored = true;
        if state.ai_score >= state.winning_score {
            finish(state, Side::Computer, &mut events);
            return events;
        }
        state.serve(1.0, rng);
    }

    // Ball out on the right: player scores
    if state.ball.x + state.ball.size > state.field_width {
        state.player_score += 1;
        events.point_scored = true;
        if state.player_score >= state.winning_score {
            finish(state, Side::Player, &mut events);
            return events;
        }
        state.serve(-1.0, rng);
    }

    events
}

fn finish(state: &mut GameState, winner: Side, events: &mut StepEvents) {
    state.game_over = true;
    state.winner = Some(winner);
    state.blink.start(Instant::now());
    events.game_over = true;
}

/// Axis-aligned box overlap between the ball and a paddle
fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    ball.x < paddle.x + paddle.width
        && ball.x + ball.size > paddle.x
        && ball.y < paddle.y + paddle.height
        && ball.y + ball.size > paddle.y
}

/// Vertical velocity after a paddle hit: the ball-center offset from the
/// paddle center, normalized by half the paddle height, maps linearly to
/// [-speed, speed]. Center hits return flat, edge hits return steep.
fn deflection(ball: &Ball, paddle: &Paddle) -> f32 {
    let hit_pos = (ball.center_y() - paddle.center_y()) / (paddle.height / 2.0);
    ball.speed * hit_pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::new(&PhysicsConfig::default(), Duration::from_millis(200))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_top_wall_bounce_clamps_and_inverts() {
        let mut state = new_state();
        let mut rng = rng();
        state.ball.y = 1.0;
        state.ball.vx = 0.0;
        state.ball.vy = -240.0;

        let events = update(&mut state, DT, &mut rng);

        assert!(events.wall_hit);
        assert_eq!(state.ball.y, 0.0);
        assert!(state.ball.vy > 0.0);
    }

    #[test]
    fn test_bottom_wall_bounce_clamps_and_inverts() {
        let mut state = new_state();
        let mut rng = rng();
        state.ball.y = state.field_height - state.ball.size - 1.0;
        state.ball.vx = 0.0;
        state.ball.vy = 240.0;

        let events = update(&mut state, DT, &mut rng);

        assert!(events.wall_hit);
        assert_eq!(state.ball.y, state.field_height - state.ball.size);
        assert!(state.ball.vy < 0.0);
    }

    #[test]
    fn test_ball_stays_in_vertical_bounds_over_many_frames() {
        let mut state = new_state();
        let mut rng = rng();
        state.serve(1.0, &mut rng);
        // Park the paddles out of the way so rallies end in points
        state.player.y = 0.0;
        state.computer.y = 0.0;

        for _ in 0..5000 {
            update(&mut state, DT, &mut rng);
            if state.game_over {
                break;
            }
            assert!(state.ball.y >= 0.0);
            assert!(state.ball.y + state.ball.size <= state.field_height);
        }
    }

    #[test]
    fn test_player_paddle_hit_reflects_and_angles() {
        let mut state = new_state();
        let mut rng = rng();
        // Ball moving left into the player paddle, striking its lower edge
        state.ball.x = state.player.x + state.player.width + 1.0;
        state.ball.y = state.player.y + state.player.height - state.ball.size / 2.0;
        state.ball.vx = -240.0;
        state.ball.vy = 0.0;

        let events = update(&mut state, DT, &mut rng);

        assert!(events.paddle_hit);
        assert_eq!(state.ball.x, state.player.x + state.player.width);
        assert!(state.ball.vx > 0.0);
        // Struck below center, so the return angles downward
        assert!(state.ball.vy > 0.0);
        assert!(state.ball.vy <= state.ball.speed);
    }

    #[test]
    fn test_computer_paddle_hit_reflects_away() {
        let mut state = new_state();
        let mut rng = rng();
        state.ball.x = state.computer.x - state.ball.size - 1.0;
        state.ball.y = state.computer.center_y() - state.ball.size / 2.0;
        state.ball.vx = 240.0;
        state.ball.vy = 0.0;

        let events = update(&mut state, DT, &mut rng);

        assert!(events.paddle_hit);
        assert_eq!(state.ball.x, state.computer.x - state.ball.size);
        assert!(state.ball.vx < 0.0);
        // Dead-center hit returns flat
        assert!(state.ball.vy.abs() < 1e-3);
    }

    #[test]
    fn test_collision_resolution_is_idempotent() {
        let mut state = new_state();
        let mut rng = rng();
        state.ball.x = state.player.x + 1.0;
        state.ball.y = state.player.center_y();
        state.ball.vx = -240.0;
        state.ball.vy = 0.0;

        update(&mut state, DT, &mut rng);

        // Re-running the overlap test after resolution finds no overlap
        assert!(!overlaps(&state.ball, &state.player));
        assert!(!overlaps(&state.ball, &state.computer));
    }

    #[test]
    fn test_point_scored_increments_once_and_reserves_center() {
        let mut state = new_state();
        let mut rng = rng();
        state.ball.x = 0.5;
        state.ball.vx = -240.0;
        state.ball.vy = 0.0;
        // Move the player paddle away so the ball exits cleanly
        state.player.y = 0.0;
        state.ball.y = state.field_height - state.ball.size;

        let events = update(&mut state, DT, &mut rng);

        assert!(events.point_scored);
        assert_eq!(state.ai_score, 1);
        assert_eq!(state.player_score, 0);
        assert!(!state.game_over);
        assert_eq!(state.ball.x, state.field_width / 2.0 - state.ball.size / 2.0);
        assert_eq!(state.ball.y, state.field_height / 2.0 - state.ball.size / 2.0);
    }

    #[test]
    fn test_player_scores_on_right_exit() {
        let mut state = new_state();
        let mut rng = rng();
        state.ball.x = state.field_width - state.ball.size - 0.5;
        state.ball.y = 0.0;
        state.ball.vx = 240.0;
        state.ball.vy = 0.0;
        state.computer.y = state.field_height - state.computer.height;

        update(&mut state, DT, &mut rng);

        assert_eq!(state.player_score, 1);
        assert_eq!(state.ai_score, 0);
    }

    #[test]
    fn test_computer_reaches_threshold_and_wins() {
        let mut state = new_state();
        let mut rng = rng();
        state.ai_score = 9;
        // Ball heading out the left edge at the original serve velocity
        state.ball.x = 0.5;
        state.ball.y = state.field_height - state.ball.size;
        state.ball.vx = -240.0;
        state.ball.vy = 240.0;
        state.player.y = 0.0;

        let events = update(&mut state, DT, &mut rng);

        assert!(events.game_over);
        assert_eq!(state.ai_score, 10);
        assert!(state.game_over);
        assert_eq!(state.winner, Some(Side::Computer));
        assert_eq!(state.winner.unwrap().label(), "COMPUTER");
        assert!(state.blink.is_active());
    }

    #[test]
    fn test_game_over_never_triggers_early() {
        let mut state = new_state();
        let mut rng = rng();
        state.ai_score = 8;
        state.ball.x = 0.5;
        state.ball.y = state.field_height / 2.0;
        state.ball.vx = -240.0;
        state.ball.vy = 0.0;
        state.player.y = 0.0;

        update(&mut state, DT, &mut rng);

        assert_eq!(state.ai_score, 9);
        assert!(!state.game_over);
        assert!(!state.blink.is_active());
    }

    #[test]
    fn test_no_updates_after_game_over() {
        let mut state = new_state();
        let mut rng = rng();
        state.game_over = true;
        state.winner = Some(Side::Player);
        state.ball.vx = 240.0;
        state.ball.vy = 240.0;
        let (x, y) = (state.ball.x, state.ball.y);

        let events = update(&mut state, DT, &mut rng);

        assert!(!events.any());
        assert_eq!(state.ball.x, x);
        assert_eq!(state.ball.y, y);
    }
}
