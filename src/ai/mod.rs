// Computer opponent: proportional tracking of the ball, no prediction

use crate::game::{Ball, Paddle};

/// Moves the computer paddle's center toward the ball's center at a fixed
/// maximum speed. Deterministic given the ball position, and never leaves
/// the playfield.
pub struct Tracker {
    /// Maximum paddle speed in field units per second
    speed: f32,
}

impl Tracker {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn drive(&self, paddle: &mut Paddle, ball: &Ball, field_height: f32, dt: f32) {
        let diff = ball.center_y() - paddle.center_y();
        let step = self.speed * dt;
        // Cap the step at the remaining distance so tracking never
        // oscillates around the ball
        paddle.y += diff.clamp(-step, step);
        paddle.clamp_y(field_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(y: f32) -> Paddle {
        Paddle {
            x: 832.0,
            y,
            width: 12.0,
            height: 80.0,
        }
    }

    fn ball_at(y: f32) -> Ball {
        Ball {
            x: 420.0,
            y,
            size: 14.0,
            speed: 240.0,
            vx: 240.0,
            vy: 0.0,
        }
    }

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_moves_toward_ball_at_fixed_speed() {
        let tracker = Tracker::new(192.0);
        let mut paddle = paddle_at(0.0);
        let ball = ball_at(400.0);

        tracker.drive(&mut paddle, &ball, 480.0, DT);

        // One frame of movement: 192 / 60 = 3.2 units down
        assert!((paddle.y - 3.2).abs() < 1e-4);
    }

    #[test]
    fn test_never_overshoots_target() {
        let tracker = Tracker::new(192.0);
        let mut paddle = paddle_at(200.0);
        // Ball center one unit below the paddle center
        let ball = ball_at(paddle.center_y() + 1.0 - 7.0);

        tracker.drive(&mut paddle, &ball, 480.0, DT);

        assert!((paddle.center_y() - ball.center_y()).abs() < 1e-4);
    }

    #[test]
    fn test_stays_in_playfield_over_many_frames() {
        let tracker = Tracker::new(192.0);
        let mut paddle = paddle_at(200.0);
        // Ball pinned past the bottom edge keeps pulling the paddle down
        let ball = ball_at(475.0);

        for _ in 0..1000 {
            tracker.drive(&mut paddle, &ball, 480.0, DT);
            assert!(paddle.y >= 0.0);
            assert!(paddle.y <= 480.0 - paddle.height);
        }
        assert_eq!(paddle.y, 480.0 - paddle.height);
    }

    #[test]
    fn test_deterministic_given_ball_position() {
        let tracker = Tracker::new(192.0);
        let ball = ball_at(100.0);
        let mut a = paddle_at(300.0);
        let mut b = paddle_at(300.0);

        tracker.drive(&mut a, &ball, 480.0, DT);
        tracker.drive(&mut b, &ball, 480.0, DT);

        assert_eq!(a.y, b.y);
    }
}
