//! Pong simulation: player paddle input, a reactive AI opponent, and the
//! per-frame ball physics. Everything here lives in a fixed 800x400 field
//! with integer rects and float velocities; the presenter in `ui` scales
//! that field to whatever terminal area it gets. No terminal types leak in.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 400;
pub const PADDLE_WIDTH: i32 = 10;
pub const PADDLE_HEIGHT: i32 = 80;
pub const BALL_SIZE: i32 = 12;
pub const BALL_SPEED: f32 = 5.0;
pub const AI_SPEED: i32 = 4;
pub const PLAYER_SPEED: i32 = 6;

/// Vertical velocity added per unit of off-center paddle contact.
const ENGLISH: f32 = 0.08;
/// Gap between each paddle and its field edge.
const PADDLE_MARGIN: i32 = 20;

/// Axis-aligned rect in field coordinates. Overlap uses strict inequality,
/// so rects that merely touch edges do not collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Which input source drives the player paddle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    Pointer,
    Keys,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

/// Result of one physics step. A `Scored` frame has already recentered and
/// relaunched the ball; no out-of-bounds state survives into the next frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Continued,
    Scored(Side),
}

/// Input sampled once per frame by the session layer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Pointer vertical coordinate in field units.
    pub pointer_y: i32,
    pub up_held: bool,
    pub down_held: bool,
}

#[derive(Clone, Debug)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    fn new(x: i32) -> Self {
        Self {
            rect: Rect::new(
                x,
                FIELD_HEIGHT / 2 - PADDLE_HEIGHT / 2,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }

    /// Move the paddle top to `y`, clamped so the paddle stays in the field.
    fn set_top(&mut self, y: i32) {
        self.rect.y = y.clamp(0, FIELD_HEIGHT - self.rect.h);
    }
}

#[derive(Clone, Debug)]
pub struct Ball {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    fn centered() -> Self {
        Self {
            rect: Rect::new(
                FIELD_WIDTH / 2 - BALL_SIZE / 2,
                FIELD_HEIGHT / 2 - BALL_SIZE / 2,
                BALL_SIZE,
                BALL_SIZE,
            ),
            vx: 0.0,
            vy: 0.0,
        }
    }
}

/// The whole game state, mutated in place by the frame loop. The player
/// owns the left paddle, the AI the right one.
pub struct Pong {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub ai_score: u32,
    pub mode: ControlMode,
    rng: StdRng,
}

impl Pong {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Fixed-seed constructor so tests can pin the serve directions.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut game = Self {
            left_paddle: Paddle::new(PADDLE_MARGIN),
            right_paddle: Paddle::new(FIELD_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH),
            ball: Ball::centered(),
            player_score: 0,
            ai_score: 0,
            mode: ControlMode::Pointer,
            rng,
        };
        game.ball.vx = game.coin_flip(BALL_SPEED);
        game.ball.vy = game.coin_flip(BALL_SPEED * 0.5);
        game
    }

    /// Edge-triggered: the session layer calls this once per toggle press.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ControlMode::Pointer => ControlMode::Keys,
            ControlMode::Keys => ControlMode::Pointer,
        };
    }

    /// Advance one frame: player input, AI, then ball physics.
    pub fn tick(&mut self, input: &FrameInput) -> StepOutcome {
        self.resolve_input(input);
        self.drive_ai();
        self.step_ball()
    }

    /// Move the player paddle from the active control mode. Always leaves
    /// the paddle in bounds.
    pub fn resolve_input(&mut self, input: &FrameInput) {
        match self.mode {
            ControlMode::Pointer => {
                self.left_paddle
                    .set_top(input.pointer_y - PADDLE_HEIGHT / 2);
            }
            ControlMode::Keys => {
                let mut y = self.left_paddle.rect.y;
                if input.up_held {
                    y -= PLAYER_SPEED;
                }
                if input.down_held {
                    y += PLAYER_SPEED;
                }
                self.left_paddle.set_top(y);
            }
        }
    }

    /// Step the AI paddle one fixed increment toward the ball center.
    /// Purely reactive, no lookahead, no randomness.
    pub fn drive_ai(&mut self) {
        let target = self.ball.rect.center_y();
        let mut y = self.right_paddle.rect.y;
        if self.right_paddle.rect.center_y() < target {
            y += AI_SPEED;
        } else if self.right_paddle.rect.center_y() > target {
            y -= AI_SPEED;
        }
        self.right_paddle.set_top(y);
    }

    /// Integrate the ball, resolve wall and paddle collisions, and handle
    /// scoring. Velocity components are truncated toward zero so the ball
    /// stays on the integer grid the rects use.
    pub fn step_ball(&mut self) -> StepOutcome {
        self.ball.rect.x += self.ball.vx as i32;
        self.ball.rect.y += self.ball.vy as i32;

        // Top/bottom walls only flip vy. The ball may overhang the edge for
        // a frame; the flipped velocity brings it back on the next step.
        if self.ball.rect.y <= 0 || self.ball.rect.bottom() >= FIELD_HEIGHT {
            self.ball.vy = -self.ball.vy;
        }

        // Paddle hits, left then right, both checked every frame. A hit
        // snaps the ball flush to the paddle face so it cannot sink in,
        // reflects it, and adds spin from the contact offset so off-center
        // hits steer the ball.
        if self.ball.rect.overlaps(&self.left_paddle.rect) {
            self.ball.rect.x = self.left_paddle.rect.right();
            self.ball.vx = -self.ball.vx;
            self.ball.vy += ENGLISH
                * (self.ball.rect.center_y() - self.left_paddle.rect.center_y()) as f32;
        }
        if self.ball.rect.overlaps(&self.right_paddle.rect) {
            self.ball.rect.x = self.right_paddle.rect.x - self.ball.rect.w;
            self.ball.vx = -self.ball.vx;
            self.ball.vy += ENGLISH
                * (self.ball.rect.center_y() - self.right_paddle.rect.center_y()) as f32;
        }

        if self.ball.rect.x < 0 {
            self.ai_score += 1;
            self.reset_ball(Side::Ai);
            StepOutcome::Scored(Side::Ai)
        } else if self.ball.rect.right() > FIELD_WIDTH {
            self.player_score += 1;
            self.reset_ball(Side::Player);
            StepOutcome::Scored(Side::Player)
        } else {
            StepOutcome::Continued
        }
    }

    /// Recenter the ball and serve toward whoever just conceded the point.
    fn reset_ball(&mut self, scorer: Side) {
        self.ball.rect.x = FIELD_WIDTH / 2 - BALL_SIZE / 2;
        self.ball.rect.y = FIELD_HEIGHT / 2 - BALL_SIZE / 2;
        self.ball.vx = match scorer {
            // AI scored off the left edge: serve back toward the player.
            Side::Ai => -BALL_SPEED,
            Side::Player => BALL_SPEED,
        };
        self.ball.vy = self.coin_flip(BALL_SPEED * 0.5);
    }

    fn coin_flip(&mut self, magnitude: f32) -> f32 {
        if self.rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }
}
