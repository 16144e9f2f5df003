//! Arcade apps: Flappy Bird and a Dino runner drawn on a `<canvas>`.
//!
//! Each game is a pure engine implementing [`ArcadeGame`] and stepped once per animation frame.
//! The browser glue in this module owns the frame loop, the keyboard listener, and the canvas
//! sizing, and releases all of them when the window contents unmount.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod dino;
mod flappy;

use leptos::*;
use system_ui::prelude::*;
use web_sys::CanvasRenderingContext2d;

pub use dino::DinoEngine;
pub use flappy::FlappyEngine;

const DEFAULT_CANVAS: CanvasSize = CanvasSize {
    width: 600.0,
    height: 300.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Drawing surface size in CSS pixels.
pub struct CanvasSize {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Round lifecycle shared by the arcade games.
pub enum GamePhase {
    /// Title screen; the first press starts the round.
    #[default]
    Start,
    /// Frames are being stepped.
    Playing,
    /// Round ended; waiting for a restart.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Current round score and the best settled score of the session.
pub struct Scoreboard {
    /// Score of the running (or last) round.
    pub current: u32,
    /// Best score of any finished round.
    pub best: u32,
}

impl Scoreboard {
    fn bump(&mut self) {
        self.current += 1;
    }

    fn settle(&mut self) {
        self.best = self.best.max(self.current);
    }

    fn reset_current(&mut self) {
        self.current = 0;
    }
}

/// Deterministic game rules driven by presses and frame steps.
pub trait ArcadeGame {
    /// Title-screen heading.
    const TITLE: &'static str;
    /// Title-screen control hint.
    const ACTION_HINT: &'static str;

    /// Current phase.
    fn phase(&self) -> GamePhase;
    /// Current and best score.
    fn scores(&self) -> Scoreboard;
    /// Adopts a new canvas size; the start position follows it until the round begins.
    fn resize(&mut self, size: CanvasSize);
    /// Starts the round, or flaps/jumps while playing. Ignored after game over.
    fn press(&mut self);
    /// Returns to the title screen, keeping the best score.
    fn restart(&mut self);
    /// Advances one frame while playing; `rng` yields values in `[0, 1)`.
    fn step(&mut self, rng: &mut dyn FnMut() -> f64);
    /// Paints the current frame.
    fn draw(&self, ctx: &CanvasRenderingContext2d);

    /// Whether a `KeyboardEvent.code` acts as the game button.
    fn accepts_key(code: &str) -> bool {
        code == "Space"
    }

    /// Game-button semantics for the keyboard: restart after game over, press otherwise.
    fn key_pressed(&mut self) {
        if self.phase() == GamePhase::GameOver {
            self.restart();
        } else {
            self.press();
        }
    }
}

#[cfg(target_arch = "wasm32")]
type FrameHandle = leptos::leptos_dom::helpers::AnimationFrameRequestHandle;
#[cfg(not(target_arch = "wasm32"))]
type FrameHandle = ();

/// Reactive handles shared by the canvas, the HUD overlays, and the frame loop of one game.
struct ArcadeSurface<G: 'static> {
    game: StoredValue<G>,
    canvas: NodeRef<html::Canvas>,
    size: RwSignal<CanvasSize>,
    phase: RwSignal<GamePhase>,
    scores: RwSignal<Scoreboard>,
    frame: StoredValue<Option<FrameHandle>>,
}

impl<G: 'static> Clone for ArcadeSurface<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: 'static> Copy for ArcadeSurface<G> {}

impl<G: ArcadeGame + 'static> ArcadeSurface<G> {
    fn new(game: G) -> Self {
        Self {
            phase: create_rw_signal(game.phase()),
            scores: create_rw_signal(game.scores()),
            game: store_value(game),
            canvas: create_node_ref(),
            size: create_rw_signal(DEFAULT_CANVAS),
            frame: store_value(None),
        }
    }

    fn sync_hud(self) {
        let Some((phase, scores)) = self.game.try_with_value(|game| (game.phase(), game.scores())) else {
            return;
        };
        if self.phase.get_untracked() != phase {
            self.phase.set(phase);
        }
        if self.scores.get_untracked() != scores {
            self.scores.set(scores);
        }
    }

    fn press(self) {
        let started = self
            .game
            .try_update_value(|game| {
                let before = game.phase();
                game.press();
                before == GamePhase::Start && game.phase() == GamePhase::Playing
            })
            .unwrap_or(false);
        self.sync_hud();
        if started {
            self.start_loop();
        }
    }

    /// Returns whether `code` was consumed as the game button.
    fn key(self, code: &str) -> bool {
        if !G::accepts_key(code) {
            return false;
        }
        let transition = self.game.try_update_value(|game| {
            let before = game.phase();
            game.key_pressed();
            (before, game.phase())
        });
        match transition {
            Some((GamePhase::Start, GamePhase::Playing)) => {
                self.sync_hud();
                self.start_loop();
            }
            Some((GamePhase::GameOver, _)) => {
                self.cancel_frame();
                self.sync_hud();
                self.redraw();
            }
            _ => self.sync_hud(),
        }
        true
    }

    fn restart(self) {
        self.cancel_frame();
        self.game.try_update_value(|game| game.restart());
        self.sync_hud();
        self.redraw();
    }

    fn resize(self, size: CanvasSize) {
        self.size.set(size);
        self.game.try_update_value(|game| game.resize(size));
        self.redraw();
    }

    fn cancel_frame(self) {
        let handle = self.frame.try_update_value(|slot| slot.take()).flatten();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(handle) = handle {
                handle.cancel();
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        drop(handle);
    }

    #[cfg(target_arch = "wasm32")]
    fn context(self) -> Option<CanvasRenderingContext2d> {
        use wasm_bindgen::JsCast;

        let canvas = self.canvas.get_untracked()?;
        canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }

    fn redraw(self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(ctx) = self.context() {
                self.game.try_with_value(|game| game.draw(&ctx));
            }
        }
    }

    fn start_loop(self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.schedule_frame();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_frame(self) {
        match request_animation_frame_with_handle(move || self.tick()) {
            Ok(handle) => {
                self.frame.try_update_value(|slot| *slot = Some(handle));
            }
            Err(err) => logging::warn!("arcade frame request failed: {err:?}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn tick(self) {
        let Some(playing) = self.game.try_update_value(|game| {
            game.step(&mut js_sys::Math::random);
            game.phase() == GamePhase::Playing
        }) else {
            return;
        };
        self.redraw();
        self.sync_hud();
        if playing {
            self.schedule_frame();
        } else {
            self.frame.try_update_value(|slot| *slot = None);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn measure(self) {
        let Some(canvas) = self.canvas.get_untracked() else {
            return;
        };
        let Some(container) = canvas.parent_element() else {
            return;
        };
        let (width, height) = (container.client_width(), container.client_height());
        if width > 0 && height > 0 {
            self.resize(CanvasSize {
                width: f64::from(width),
                height: f64::from(height),
            });
        } else {
            self.redraw();
        }
    }

    fn install(self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.canvas.on_load(move |_| {
                request_animation_frame(move || self.measure());
            });
            let keys = window_event_listener(ev::keydown, move |event| {
                if self.key(&event.code()) {
                    event.prevent_default();
                }
            });
            let resize = window_event_listener(ev::resize, move |_| self.measure());
            on_cleanup(move || {
                keys.remove();
                resize.remove();
            });
        }
        on_cleanup(move || self.cancel_frame());
    }
}

fn arcade_view<G: ArcadeGame + 'static>(game: G, restart_label: &'static str) -> impl IntoView {
    let surface = ArcadeSurface::new(game);
    surface.install();
    let (phase, scores) = (surface.phase, surface.scores);
    let (canvas, title, hint) = (surface.canvas, G::TITLE, G::ACTION_HINT);

    view! {
        <div class="arcade-app" data-ui-slot="arcade">
            <canvas
                node_ref=canvas
                class="arcade-canvas"
                aria-label=title
                width=move || surface.size.get().width
                height=move || surface.size.get().height
                on:click=move |_| surface.press()
            ></canvas>
            <output class="arcade-score" aria-live="polite">
                {move || scores.get().current}
            </output>
            <Show when=move || phase.get() == GamePhase::Start>
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center layout_class="arcade-overlay">
                    <Heading role=TextRole::Display>{title}</Heading>
                    <Text>"Click or press SPACE to start"</Text>
                    <Text>{hint}</Text>
                </Stack>
            </Show>
            <Show when=move || phase.get() == GamePhase::GameOver>
                <Panel elevation=Elevation::Overlay layout_class="arcade-overlay" aria_label="Game over">
                    <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                        <Heading>"Game Over!"</Heading>
                        <Text>{move || format!("Score: {}", scores.get().current)}</Text>
                        <Text>{move || format!("Best: {}", scores.get().best)}</Text>
                        <Button
                            variant=ButtonVariant::Primary
                            size=ButtonSize::Lg
                            on_click=Callback::new(move |_| surface.restart())
                        >
                            {restart_label}
                        </Button>
                    </Stack>
                </Panel>
            </Show>
        </div>
    }
}

#[component]
/// Flappy Bird window contents.
pub fn FlappyBirdApp() -> impl IntoView {
    arcade_view(FlappyEngine::new(DEFAULT_CANVAS), "Play Again")
}

#[component]
/// Dino runner window contents.
pub fn DinoGameApp() -> impl IntoView {
    arcade_view(DinoEngine::new(DEFAULT_CANVAS), "Restart")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keyboard_restarts_only_after_game_over() {
        let mut game = FlappyEngine::new(DEFAULT_CANVAS);
        game.key_pressed();
        assert_eq!(game.phase(), GamePhase::Playing);

        while game.phase() == GamePhase::Playing {
            game.step(&mut || 0.5);
        }
        game.key_pressed();
        assert_eq!(game.phase(), GamePhase::Start);
    }

    #[test]
    fn settle_keeps_the_higher_score() {
        let mut scores = Scoreboard { current: 3, best: 5 };
        scores.settle();
        assert_eq!(scores.best, 5);
        scores.current = 7;
        scores.settle();
        scores.reset_current();
        assert_eq!(scores, Scoreboard { current: 0, best: 7 });
    }

    #[test]
    fn surface_mirrors_engine_phase_and_size() {
        let runtime = create_runtime();
        let surface = ArcadeSurface::new(DinoEngine::new(DEFAULT_CANVAS));

        assert!(!surface.key("Enter"));
        assert!(surface.key("Space"));
        assert_eq!(surface.phase.get_untracked(), GamePhase::Playing);

        surface.resize(CanvasSize {
            width: 800.0,
            height: 400.0,
        });
        assert_eq!(surface.size.get_untracked().width, 800.0);

        surface.restart();
        assert_eq!(surface.phase.get_untracked(), GamePhase::Start);

        runtime.dispose();
    }
}
