//! Flappy Bird rules: one bird, scrolling pipe pairs, score per cleared pipe.

use web_sys::CanvasRenderingContext2d;

use crate::{ArcadeGame, CanvasSize, GamePhase, Scoreboard};

const BIRD_X: f64 = 80.0;
const BIRD_START_RATIO: f64 = 0.3;
const BIRD_RADIUS: f64 = 15.0;
const GRAVITY: f64 = 0.5;
const FLAP_VELOCITY: f64 = -9.0;

const PIPE_WIDTH: f64 = 60.0;
const PIPE_GAP: f64 = 150.0;
const PIPE_SPEED: f64 = 2.0;
const PIPE_INTERVAL: u64 = 90;
const PIPE_MARGIN: f64 = 50.0;
const GROUND_BAND: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bird {
    pub(crate) y: f64,
    pub(crate) velocity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Pipe {
    pub(crate) x: f64,
    /// Bottom edge of the upper pipe; the gap spans `top..top + PIPE_GAP`.
    pub(crate) top: f64,
    pub(crate) scored: bool,
}

impl Pipe {
    fn overlaps(&self, bird: &Bird) -> bool {
        let within_columns = BIRD_X + BIRD_RADIUS > self.x && BIRD_X - BIRD_RADIUS < self.x + PIPE_WIDTH;
        within_columns && (bird.y - BIRD_RADIUS < self.top || bird.y + BIRD_RADIUS > self.top + PIPE_GAP)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Flappy Bird state stepped once per animation frame.
pub struct FlappyEngine {
    size: CanvasSize,
    phase: GamePhase,
    scores: Scoreboard,
    bird: Bird,
    pipes: Vec<Pipe>,
    frame: u64,
}

impl FlappyEngine {
    /// Creates a game in the start phase for a canvas of `size`.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            phase: GamePhase::Start,
            scores: Scoreboard::default(),
            bird: Self::starting_bird(size),
            pipes: Vec::new(),
            frame: 0,
        }
    }

    fn starting_bird(size: CanvasSize) -> Bird {
        Bird {
            y: size.height * BIRD_START_RATIO,
            velocity: 0.0,
        }
    }

    pub(crate) fn bird(&self) -> Bird {
        self.bird
    }

    pub(crate) fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    fn spawn_pipe(&mut self, rng: &mut dyn FnMut() -> f64) {
        let min_top = PIPE_MARGIN;
        let max_top = (self.size.height - PIPE_GAP - PIPE_MARGIN).max(min_top);
        self.pipes.push(Pipe {
            x: self.size.width,
            top: rng() * (max_top - min_top) + min_top,
            scored: false,
        });
    }

    fn end(&mut self) {
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.scores.settle();
        }
    }

    fn move_bird(&mut self) {
        self.bird.velocity += GRAVITY;
        self.bird.y += self.bird.velocity;

        if self.bird.y + BIRD_RADIUS > self.size.height {
            self.bird.y = self.size.height - BIRD_RADIUS;
            self.end();
        }
        if self.bird.y - BIRD_RADIUS < 0.0 {
            self.bird.y = BIRD_RADIUS;
        }
    }

    fn move_pipes(&mut self) {
        let bird = self.bird;
        let mut crashed = false;
        let mut cleared = 0;

        self.pipes.retain_mut(|pipe| {
            pipe.x -= PIPE_SPEED;
            if pipe.x + PIPE_WIDTH < 0.0 {
                return false;
            }
            if !pipe.scored && pipe.x + PIPE_WIDTH < BIRD_X - BIRD_RADIUS {
                pipe.scored = true;
                cleared += 1;
            }
            crashed |= pipe.overlaps(&bird);
            true
        });

        for _ in 0..cleared {
            self.scores.bump();
        }
        if crashed {
            self.end();
        }
    }
}

impl ArcadeGame for FlappyEngine {
    const TITLE: &'static str = "FLAPPY BIRD";
    const ACTION_HINT: &'static str = "Click or press SPACE to flap";

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn scores(&self) -> Scoreboard {
        self.scores
    }

    fn resize(&mut self, size: CanvasSize) {
        self.size = size;
        if self.phase == GamePhase::Start {
            self.bird = Self::starting_bird(size);
        }
    }

    fn press(&mut self) {
        match self.phase {
            GamePhase::Start => self.phase = GamePhase::Playing,
            GamePhase::Playing => self.bird.velocity = FLAP_VELOCITY,
            GamePhase::GameOver => {}
        }
    }

    fn restart(&mut self) {
        self.phase = GamePhase::Start;
        self.scores.reset_current();
        self.bird = Self::starting_bird(self.size);
        self.pipes.clear();
        self.frame = 0;
    }

    fn step(&mut self, rng: &mut dyn FnMut() -> f64) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.move_bird();
        self.frame += 1;
        if self.frame % PIPE_INTERVAL == 0 {
            self.spawn_pipe(rng);
        }
        self.move_pipes();
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) {
        let CanvasSize { width, height } = self.size;
        ctx.set_fill_style_str("#87CEEB");
        ctx.fill_rect(0.0, 0.0, width, height);
        ctx.set_fill_style_str("#90EE90");
        ctx.fill_rect(0.0, height - GROUND_BAND, width, GROUND_BAND);

        for pipe in &self.pipes {
            let lower_top = pipe.top + PIPE_GAP;
            ctx.set_fill_style_str("#4CAF50");
            ctx.fill_rect(pipe.x, 0.0, PIPE_WIDTH, pipe.top);
            ctx.fill_rect(pipe.x, lower_top, PIPE_WIDTH, height - lower_top);
            ctx.set_stroke_style_str("#2E7D32");
            ctx.set_line_width(3.0);
            ctx.stroke_rect(pipe.x, 0.0, PIPE_WIDTH, pipe.top);
            ctx.stroke_rect(pipe.x, lower_top, PIPE_WIDTH, height - lower_top);
            ctx.set_fill_style_str("#66BB6A");
            ctx.fill_rect(pipe.x - 5.0, pipe.top - 20.0, PIPE_WIDTH + 10.0, 20.0);
            ctx.fill_rect(pipe.x - 5.0, lower_top, PIPE_WIDTH + 10.0, 20.0);
        }

        let y = self.bird.y;
        ctx.set_fill_style_str("#FFD700");
        ctx.begin_path();
        let _ = ctx.arc(BIRD_X, y, BIRD_RADIUS, 0.0, std::f64::consts::TAU);
        ctx.fill();

        ctx.set_fill_style_str("#FFA500");
        ctx.begin_path();
        ctx.move_to(BIRD_X + BIRD_RADIUS, y);
        ctx.line_to(BIRD_X + BIRD_RADIUS + 10.0, y - 5.0);
        ctx.line_to(BIRD_X + BIRD_RADIUS + 10.0, y + 5.0);
        ctx.close_path();
        ctx.fill();

        ctx.set_fill_style_str("#000");
        ctx.begin_path();
        let _ = ctx.arc(BIRD_X + 5.0, y - 5.0, 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SIZE: CanvasSize = CanvasSize {
        width: 600.0,
        height: 400.0,
    };

    fn playing() -> FlappyEngine {
        let mut engine = FlappyEngine::new(SIZE);
        engine.press();
        engine
    }

    #[test]
    fn first_press_starts_without_flapping() {
        let engine = playing();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.bird(), Bird { y: 120.0, velocity: 0.0 });
    }

    #[test]
    fn gravity_then_flap() {
        let mut engine = playing();
        engine.step(&mut || 0.5);
        assert_eq!(engine.bird(), Bird { y: 120.5, velocity: 0.5 });

        engine.press();
        engine.step(&mut || 0.5);
        assert_eq!(engine.bird(), Bird { y: 112.0, velocity: -8.5 });
    }

    #[test]
    fn start_phase_ignores_steps() {
        let mut engine = FlappyEngine::new(SIZE);
        engine.step(&mut || 0.5);
        assert_eq!(engine.bird().y, 120.0);
        assert!(engine.pipes().is_empty());
    }

    #[test]
    fn pipes_spawn_every_ninety_frames_inside_margins() {
        let mut engine = playing();
        let mut rolls = [0.0, 1.0].into_iter();
        let mut rng = move || rolls.next().unwrap_or(0.5);
        for _ in 0..180 {
            engine.press();
            engine.step(&mut rng);
            if engine.phase() != GamePhase::Playing {
                break;
            }
        }

        let tops: Vec<_> = engine.pipes().iter().map(|pipe| pipe.top).collect();
        assert_eq!(tops, vec![50.0, 200.0]);
        assert_eq!(engine.pipes()[1].x, 600.0 - PIPE_SPEED);
    }

    #[test]
    fn ceiling_clamps_the_bird() {
        let mut engine = playing();
        for _ in 0..40 {
            engine.press();
            engine.step(&mut || 0.5);
        }
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert!(engine.bird().y >= BIRD_RADIUS);
    }

    #[test]
    fn hitting_the_floor_ends_the_game() {
        let mut engine = playing();
        for _ in 0..200 {
            engine.step(&mut || 0.5);
        }
        assert_eq!(engine.phase(), GamePhase::GameOver);
        assert_eq!(engine.bird().y, SIZE.height - BIRD_RADIUS);
    }

    #[test]
    fn cleared_pipe_scores_once_and_best_survives_restart() {
        let mut engine = playing();
        engine.pipes.push(Pipe {
            x: BIRD_X - BIRD_RADIUS - PIPE_WIDTH + 1.0,
            top: 0.0,
            scored: false,
        });
        engine.bird.y = 75.0;
        engine.step(&mut || 0.5);
        engine.step(&mut || 0.5);
        assert_eq!(engine.scores().current, 1);

        engine.end();
        engine.restart();
        assert_eq!(engine.phase(), GamePhase::Start);
        assert_eq!(engine.scores(), Scoreboard { current: 0, best: 1 });
        assert!(engine.pipes().is_empty());
    }

    #[test]
    fn pipe_collision_ends_the_game() {
        let mut engine = playing();
        engine.pipes.push(Pipe {
            x: BIRD_X,
            top: 200.0,
            scored: false,
        });
        engine.step(&mut || 0.5);
        assert_eq!(engine.phase(), GamePhase::GameOver);
    }
}
