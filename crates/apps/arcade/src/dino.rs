//! Runner rules: a jumping dino and cacti approaching along the ground line.

use web_sys::CanvasRenderingContext2d;

use crate::{ArcadeGame, CanvasSize, GamePhase, Scoreboard};

const GROUND_OFFSET: f64 = 50.0;
const DINO_X: f64 = 50.0;
const DINO_SIZE: f64 = 40.0;
const GRAVITY: f64 = 0.6;
const JUMP_VELOCITY: f64 = -12.0;

const CACTUS_WIDTH: f64 = 20.0;
const CACTUS_HEIGHT: f64 = 30.0;
const OBSTACLE_SPEED: f64 = 5.0;
const FIRST_OBSTACLE_FRAME: u64 = 100;
const MIN_OBSTACLE_SPACING: u64 = 60;
const OBSTACLE_SPACING_JITTER: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Dino {
    /// Top edge of the dino.
    pub(crate) y: f64,
    pub(crate) velocity: f64,
    pub(crate) jumping: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Obstacle {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Obstacle {
    fn overlaps(&self, dino: &Dino) -> bool {
        DINO_X < self.x + CACTUS_WIDTH
            && DINO_X + DINO_SIZE > self.x
            && dino.y < self.y + CACTUS_HEIGHT
            && dino.y + DINO_SIZE > self.y
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Runner state stepped once per animation frame.
pub struct DinoEngine {
    size: CanvasSize,
    phase: GamePhase,
    scores: Scoreboard,
    dino: Dino,
    obstacles: Vec<Obstacle>,
    frame: u64,
    next_obstacle_frame: u64,
}

impl DinoEngine {
    /// Creates a game in the start phase for a canvas of `size`.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            phase: GamePhase::Start,
            scores: Scoreboard::default(),
            dino: Self::grounded(size),
            obstacles: Vec::new(),
            frame: 0,
            next_obstacle_frame: FIRST_OBSTACLE_FRAME,
        }
    }

    fn ground_y(size: CanvasSize) -> f64 {
        size.height - GROUND_OFFSET
    }

    fn grounded(size: CanvasSize) -> Dino {
        Dino {
            y: Self::ground_y(size) - DINO_SIZE,
            velocity: 0.0,
            jumping: false,
        }
    }

    pub(crate) fn dino(&self) -> Dino {
        self.dino
    }

    pub(crate) fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    fn spawn_obstacle(&mut self, rng: &mut dyn FnMut() -> f64) {
        self.obstacles.push(Obstacle {
            x: self.size.width,
            y: Self::ground_y(self.size) - CACTUS_HEIGHT,
        });
        let jitter = (rng().clamp(0.0, 1.0) * OBSTACLE_SPACING_JITTER) as u64;
        self.next_obstacle_frame = self.frame + MIN_OBSTACLE_SPACING + jitter;
    }

    fn end(&mut self) {
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.scores.settle();
        }
    }

    fn move_dino(&mut self) {
        if !self.dino.jumping {
            return;
        }
        self.dino.velocity += GRAVITY;
        self.dino.y += self.dino.velocity;

        let rest = Self::ground_y(self.size) - DINO_SIZE;
        if self.dino.y >= rest {
            self.dino = Self::grounded(self.size);
        }
    }

    fn move_obstacles(&mut self) {
        let dino = self.dino;
        let mut crashed = false;
        let mut passed = 0;

        self.obstacles.retain_mut(|obstacle| {
            obstacle.x -= OBSTACLE_SPEED;
            if obstacle.x + CACTUS_WIDTH < 0.0 {
                passed += 1;
                return false;
            }
            crashed |= obstacle.overlaps(&dino);
            true
        });

        for _ in 0..passed {
            self.scores.bump();
        }
        if crashed {
            self.end();
        }
    }
}

impl ArcadeGame for DinoEngine {
    const TITLE: &'static str = "DINO GAME";
    const ACTION_HINT: &'static str = "Press SPACE or \u{2191} to jump";

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn scores(&self) -> Scoreboard {
        self.scores
    }

    fn resize(&mut self, size: CanvasSize) {
        self.size = size;
        if self.phase == GamePhase::Start {
            self.dino = Self::grounded(size);
        }
    }

    fn press(&mut self) {
        match self.phase {
            GamePhase::Start => self.phase = GamePhase::Playing,
            GamePhase::Playing if !self.dino.jumping => {
                self.dino.velocity = JUMP_VELOCITY;
                self.dino.jumping = true;
            }
            GamePhase::Playing | GamePhase::GameOver => {}
        }
    }

    fn restart(&mut self) {
        self.phase = GamePhase::Start;
        self.scores.reset_current();
        self.dino = Self::grounded(self.size);
        self.obstacles.clear();
        self.frame = 0;
        self.next_obstacle_frame = FIRST_OBSTACLE_FRAME;
    }

    fn step(&mut self, rng: &mut dyn FnMut() -> f64) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.move_dino();
        self.frame += 1;
        if self.frame >= self.next_obstacle_frame {
            self.spawn_obstacle(rng);
        }
        self.move_obstacles();
    }

    fn accepts_key(code: &str) -> bool {
        matches!(code, "Space" | "ArrowUp")
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        let CanvasSize { width, height } = self.size;
        let ground = Self::ground_y(self.size);
        ctx.set_fill_style_str("#f7f7f7");
        ctx.fill_rect(0.0, 0.0, width, height);

        ctx.set_stroke_style_str("#535353");
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.move_to(0.0, ground);
        ctx.line_to(width, ground);
        ctx.stroke();

        ctx.set_fill_style_str("#535353");
        ctx.fill_rect(DINO_X, self.dino.y, DINO_SIZE, DINO_SIZE);
        for obstacle in &self.obstacles {
            ctx.fill_rect(obstacle.x, obstacle.y, CACTUS_WIDTH, CACTUS_HEIGHT);
        }

        ctx.set_fill_style_str("#fff");
        ctx.fill_rect(DINO_X + 30.0, self.dino.y + 5.0, 5.0, 5.0);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SIZE: CanvasSize = CanvasSize {
        width: 600.0,
        height: 300.0,
    };

    fn playing() -> DinoEngine {
        let mut engine = DinoEngine::new(SIZE);
        engine.press();
        engine
    }

    #[test]
    fn dino_rests_on_the_ground_line() {
        let engine = DinoEngine::new(SIZE);
        assert_eq!(engine.dino().y, 210.0);
        assert!(!engine.dino().jumping);
    }

    #[test]
    fn jump_only_from_the_ground() {
        let mut engine = playing();
        engine.press();
        engine.step(&mut || 0.0);
        let airborne = engine.dino();
        assert!(airborne.jumping);
        assert!((airborne.velocity + 11.4).abs() < 1e-9);
        assert!((airborne.y - 198.6).abs() < 1e-9);

        engine.press();
        assert_eq!(engine.dino().velocity, airborne.velocity);
    }

    #[test]
    fn jump_lands_back_on_the_ground() {
        let mut engine = playing();
        engine.press();
        for _ in 0..60 {
            engine.step(&mut || 0.0);
        }
        assert_eq!(engine.dino(), DinoEngine::grounded(SIZE));
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn obstacle_spacing_follows_the_injected_roll() {
        let mut engine = playing();
        engine.frame = FIRST_OBSTACLE_FRAME - 1;
        engine.step(&mut || 0.5);
        assert_eq!(engine.obstacles(), &[Obstacle { x: 595.0, y: 220.0 }]);
        assert_eq!(engine.next_obstacle_frame, FIRST_OBSTACLE_FRAME + 60 + 40);
    }

    #[test]
    fn passing_obstacle_scores() {
        let mut engine = playing();
        engine.obstacles.push(Obstacle { x: -16.0, y: 220.0 });
        engine.step(&mut || 0.0);
        assert!(engine.obstacles().is_empty());
        assert_eq!(engine.scores().current, 1);
    }

    #[test]
    fn collision_ends_the_game_and_keeps_the_best() {
        let mut engine = playing();
        engine.scores.bump();
        engine.scores.bump();
        engine.obstacles.push(Obstacle { x: 60.0, y: 220.0 });
        engine.step(&mut || 0.0);
        assert_eq!(engine.phase(), GamePhase::GameOver);

        engine.press();
        assert_eq!(engine.phase(), GamePhase::GameOver);

        engine.restart();
        assert_eq!(engine.phase(), GamePhase::Start);
        assert_eq!(engine.scores(), Scoreboard { current: 0, best: 2 });
    }

    #[test]
    fn arrow_up_also_jumps() {
        assert!(DinoEngine::accepts_key("ArrowUp"));
        assert!(DinoEngine::accepts_key("Space"));
        assert!(!DinoEngine::accepts_key("Enter"));
    }
}
