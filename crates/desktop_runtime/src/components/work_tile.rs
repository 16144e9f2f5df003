//! Animated Work launcher tile: three company logo bubbles rotate one step before the app opens.

use std::time::Duration;

use desktop_app_contract::AppId;

use super::*;
use crate::{
    host::launcher_tile_dom_id,
    lifecycle::{DisposalToken, ScopedTimeout},
};

/// Length of one rotation step; the Work app opens once it has played.
pub(crate) const SPIN_MS: u64 = 100;
const STEP_DEGREES: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bubble {
    Maximl,
    Samsung,
    Gsoc,
}

impl Bubble {
    pub(crate) const ALL: [Bubble; 3] = [Self::Maximl, Self::Samsung, Self::Gsoc];

    fn logo(self) -> &'static str {
        match self {
            Self::Maximl => "/logos/maximl.png",
            Self::Samsung => "/logos/samsung.png",
            Self::Gsoc => "/logos/gsoc.png",
        }
    }

    fn alt(self) -> &'static str {
        match self {
            Self::Maximl => "Maximl",
            Self::Samsung => "Samsung",
            Self::Gsoc => "Google Summer of Code",
        }
    }

    fn slot(self) -> &'static str {
        match self {
            Self::Maximl => "large",
            Self::Samsung => "medium",
            Self::Gsoc => "small",
        }
    }

    /// Bubble diameters in slot order large, medium, small.
    fn home_size(self) -> f64 {
        match self {
            Self::Maximl => 12.0,
            Self::Samsung => 10.0,
            Self::Gsoc => 8.0,
        }
    }

    /// Size of the slot this bubble is heading to after `steps` rotations.
    fn target_size(self, steps: u32) -> f64 {
        const SLOTS: [f64; 3] = [12.0, 10.0, 8.0];
        let home = match self {
            Self::Maximl => 0,
            Self::Samsung => 1,
            Self::Gsoc => 2,
        };
        let next = match steps % 3 {
            0 => home,
            1 => (home + 1) % 3,
            _ => (home + 2) % 3,
        };
        SLOTS[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rotation of the logo bubbles plus the in-flight animation flag.
pub(crate) struct BubbleSpin {
    rotation: u32,
    animating: bool,
}

impl BubbleSpin {
    /// Starts one rotation step. Returns `false` while the previous step is still playing.
    pub(crate) fn spin(&mut self) -> bool {
        if self.animating {
            return false;
        }
        self.animating = true;
        self.rotation += STEP_DEGREES;
        true
    }

    /// Marks the current step as played.
    pub(crate) fn settle(&mut self) {
        self.animating = false;
    }

    pub(crate) fn rotation(&self) -> u32 {
        self.rotation
    }

    /// Scale a bubble is drawn at so it matches the slot it is rotating into.
    pub(crate) fn scale(&self, bubble: Bubble) -> f64 {
        let steps = (self.rotation % 360) / STEP_DEGREES;
        bubble.target_size(steps) / bubble.home_size()
    }
}

fn bubble_style(spin: BubbleSpin, bubble: Bubble) -> String {
    format!(
        "transform:rotate(-{}deg) scale({});transition:transform {SPIN_MS}ms cubic-bezier(0.4, 0.0, 0.2, 1);",
        spin.rotation(),
        spin.scale(bubble)
    )
}

fn ring_style(spin: BubbleSpin) -> String {
    format!(
        "transform:rotate({}deg);transition:transform {SPIN_MS}ms cubic-bezier(0.4, 0.0, 0.2, 1);",
        spin.rotation()
    )
}

#[component]
/// Launcher tile for the Work app.
pub(super) fn WorkTile(label: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let spin = create_rw_signal(BubbleSpin::default());
    let token = DisposalToken::new();
    let timer = store_value(None::<ScopedTimeout>);
    let minimized =
        Signal::derive(move || runtime.session.with(|s| s.is_minimized_app(AppId::Work)));

    on_cleanup({
        let token = token.clone();
        move || {
            token.dispose();
            timer.try_update_value(|timer| timer.take());
        }
    });

    let on_click = move |_| {
        let mut started = false;
        spin.update(|spin| started = spin.spin());
        if !started {
            return;
        }
        let scheduled = ScopedTimeout::schedule(&token, Duration::from_millis(SPIN_MS), move || {
            spin.update(BubbleSpin::settle);
            runtime.open_app(AppId::Work);
        });
        timer.set_value(Some(scheduled));
    };
    let aria_label = label.clone();

    view! {
        <button
            type="button"
            id=launcher_tile_dom_id(AppId::Work.slug())
            class="ui-desktop-icon-button"
            title=label.clone()
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-variant="work-bubbles"
            data-ui-animating=move || if spin.get().animating { "true" } else { "false" }
            on:click=on_click
        >
            <span class="work-bubbles">
                <span class="work-bubbles-ring" style=move || ring_style(spin.get())>
                    {Bubble::ALL
                        .into_iter()
                        .map(|bubble| {
                            view! {
                                <span
                                    class="work-bubble"
                                    data-ui-slot=bubble.slot()
                                    style=move || bubble_style(spin.get(), bubble)
                                >
                                    <img src=bubble.logo() alt=bubble.alt() />
                                </span>
                            }
                        })
                        .collect_view()}
                </span>
            </span>
            <span class="ui-desktop-icon-label">{label}</span>
            <Show when=move || minimized.get()>
                <span
                    class="ui-desktop-icon-indicator"
                    role="status"
                    aria-label="Window is minimized"
                ></span>
            </Show>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scales(spin: &BubbleSpin) -> Vec<f64> {
        Bubble::ALL.into_iter().map(|bubble| spin.scale(bubble)).collect()
    }

    #[test]
    fn bubbles_start_at_their_own_size() {
        assert_eq!(scales(&BubbleSpin::default()), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn each_step_scales_bubbles_into_the_next_slot() {
        let mut spin = BubbleSpin::default();
        assert!(spin.spin());
        assert_eq!(spin.rotation(), 120);
        assert_eq!(scales(&spin), vec![10.0 / 12.0, 8.0 / 10.0, 12.0 / 8.0]);

        spin.settle();
        assert!(spin.spin());
        assert_eq!(scales(&spin), vec![8.0 / 12.0, 12.0 / 10.0, 10.0 / 8.0]);

        spin.settle();
        assert!(spin.spin());
        assert_eq!(spin.rotation(), 360);
        assert_eq!(scales(&spin), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn clicks_during_a_step_are_ignored() {
        let mut spin = BubbleSpin::default();
        assert!(spin.spin());
        assert!(!spin.spin());
        assert_eq!(spin.rotation(), 120);

        spin.settle();
        assert!(spin.spin());
        assert_eq!(spin.rotation(), 240);
    }

    #[test]
    fn bubble_style_counter_rotates_and_scales() {
        let mut spin = BubbleSpin::default();
        spin.spin();
        assert_eq!(
            bubble_style(spin, Bubble::Gsoc),
            "transform:rotate(-120deg) scale(1.5);transition:transform 100ms cubic-bezier(0.4, 0.0, 0.2, 1);"
        );
    }
}
