//! Window geometry, gesture, and dismissal state machines used by the window component.
//!
//! Everything here is DOM-free so the full drag/resize/maximize lifecycle can be driven from
//! tests. The component feeds pointer coordinates and measured bounding boxes in and writes the
//! returned frames out to the element.

use desktop_app_contract::SizeClass;

use crate::{
    lifecycle::{ListenerLease, ListenerLedger},
    model::{
        DragState, Interaction, Point, Rect, ResizeState, Size, WindowGeometry, FALLBACK_VIEWPORT,
    },
};

/// Default window size for `size_class` in `viewport`.
pub fn default_dimensions(size_class: SizeClass, viewport: Size) -> Size {
    let viewport = usable_viewport(viewport);
    let fraction = size_class.viewport_fraction();
    Size::new(viewport.width * fraction, viewport.height * fraction)
}

/// Top-left that centers `dimensions` in `viewport`.
pub fn centered_position(dimensions: Size, viewport: Size) -> Point {
    let viewport = usable_viewport(viewport);
    Point::new(
        (viewport.width - dimensions.width) / 2.0,
        (viewport.height - dimensions.height) / 2.0,
    )
}

fn usable_viewport(viewport: Size) -> Size {
    if viewport.is_usable() {
        viewport
    } else {
        FALLBACK_VIEWPORT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Visual update produced by a pointer move.
pub enum GestureFrame {
    /// Translate the element by this offset without relayout.
    Translate(Point),
    /// Apply this committed size.
    Resize(Size),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Geometry and gesture state of one mounted window.
pub struct WindowFrameState {
    /// Committed user geometry.
    pub geometry: WindowGeometry,
    /// In-flight gesture.
    pub interaction: Interaction,
    size_class: SizeClass,
}

impl WindowFrameState {
    /// Fresh state for a newly opened window.
    pub fn new(size_class: SizeClass) -> Self {
        Self {
            geometry: WindowGeometry::default(),
            interaction: Interaction::Idle,
            size_class,
        }
    }

    /// Size-class preset of the window.
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// Size to render, honouring committed dimensions.
    pub fn resolved_dimensions(&self, viewport: Size) -> Size {
        self.geometry
            .dimensions
            .unwrap_or_else(|| default_dimensions(self.size_class, viewport))
    }

    /// Top-left to render, centering when never dragged.
    pub fn resolved_position(&self, viewport: Size) -> Point {
        self.geometry
            .position
            .unwrap_or_else(|| centered_position(self.resolved_dimensions(viewport), viewport))
    }

    /// Rectangle the window occupies.
    pub fn frame_rect(&self, viewport: Size, maximized: bool) -> Rect {
        if maximized {
            let viewport = usable_viewport(viewport);
            return Rect {
                x: 0.0,
                y: 0.0,
                width: viewport.width,
                height: viewport.height,
            };
        }
        let position = self.resolved_position(viewport);
        let dimensions = self.resolved_dimensions(viewport);
        Rect {
            x: position.x,
            y: position.y,
            width: dimensions.width,
            height: dimensions.height,
        }
    }

    /// Starts a title-bar drag. Ignored while maximized or mid-gesture.
    ///
    /// `measured` is the live bounding box; it seeds the origin while the position is still
    /// implicit and is discarded when not finite.
    pub fn begin_drag(
        &mut self,
        pointer: Point,
        measured: Option<Rect>,
        viewport: Size,
        maximized: bool,
    ) -> bool {
        if maximized || self.interaction.is_active() || !pointer.is_finite() {
            return false;
        }
        let origin = match self.geometry.position {
            Some(position) => position,
            None => measured
                .filter(|rect| rect.is_usable())
                .map(Rect::origin)
                .unwrap_or_else(|| self.resolved_position(viewport)),
        };
        self.interaction = Interaction::Dragging(DragState {
            start_offset: pointer.delta_from(origin),
            origin,
            last_pointer: pointer,
        });
        true
    }

    /// Starts a bottom-right resize. Ignored while maximized or mid-gesture.
    pub fn begin_resize(
        &mut self,
        pointer: Point,
        measured: Option<Rect>,
        viewport: Size,
        maximized: bool,
    ) -> bool {
        if maximized || self.interaction.is_active() || !pointer.is_finite() {
            return false;
        }
        let start = match self.geometry.dimensions {
            Some(dimensions) => dimensions,
            None => measured
                .filter(|rect| rect.is_usable())
                .map(Rect::size)
                .unwrap_or_else(|| self.resolved_dimensions(viewport)),
        };
        if self.geometry.position.is_none() {
            self.geometry.position = Some(
                measured
                    .filter(|rect| rect.is_usable())
                    .map(Rect::origin)
                    .unwrap_or_else(|| self.resolved_position(viewport)),
            );
        }
        self.interaction = Interaction::Resizing(ResizeState {
            start_width: start.width,
            start_height: start.height,
            start_x: pointer.x,
            start_y: pointer.y,
        });
        true
    }

    /// Advances the active gesture to `pointer`.
    ///
    /// Drags only report a translation; resizes commit the clamped size immediately.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<GestureFrame> {
        if !pointer.is_finite() {
            return None;
        }
        match &mut self.interaction {
            Interaction::Idle => None,
            Interaction::Dragging(drag) => {
                drag.last_pointer = pointer;
                Some(GestureFrame::Translate(drag.translation()))
            }
            Interaction::Resizing(resize) => {
                let size = resize.size_for(pointer);
                self.geometry.dimensions = Some(size);
                Some(GestureFrame::Resize(size))
            }
        }
    }

    /// Ends the active gesture, committing a drag's landing position.
    ///
    /// Returns the committed position for drags.
    pub fn pointer_released(&mut self, pointer: Option<Point>) -> Option<Point> {
        if let Some(pointer) = pointer {
            self.pointer_moved(pointer);
        }
        match std::mem::take(&mut self.interaction) {
            Interaction::Dragging(drag) => {
                let landing = drag.landing_position();
                self.geometry.position = Some(landing);
                Some(landing)
            }
            Interaction::Resizing(_) | Interaction::Idle => None,
        }
    }

    /// Reacts to a maximize toggle: custom geometry is dropped either way.
    pub fn set_maximized(&mut self, _maximized: bool) {
        self.interaction = Interaction::Idle;
        self.geometry = WindowGeometry::default();
    }
}

#[derive(Debug, Default)]
/// Geometry state plus the listener lease held while a gesture is live.
///
/// Also owns the backdrop dismissal guard: every press the window receives, including presses
/// that start a gesture, must reset it.
pub struct WindowController {
    frame: WindowFrameState,
    ledger: ListenerLedger,
    lease: Option<ListenerLease>,
    dismiss: BackdropDismissGuard,
}

impl WindowController {
    /// Controller for a fresh window that draws leases from `ledger`.
    pub fn new(size_class: SizeClass, ledger: ListenerLedger) -> Self {
        Self {
            frame: WindowFrameState::new(size_class),
            ledger,
            lease: None,
            dismiss: BackdropDismissGuard::default(),
        }
    }

    /// Current frame state.
    pub fn frame(&self) -> &WindowFrameState {
        &self.frame
    }

    /// Whether a gesture (and therefore a lease) is live.
    pub fn is_gesture_active(&self) -> bool {
        self.frame.interaction.is_active()
    }

    /// Handles a title-bar press. Returns the lease to attach listeners to when a drag starts.
    pub fn press_title_bar(
        &mut self,
        pointer: Point,
        measured: Option<Rect>,
        viewport: Size,
        maximized: bool,
    ) -> Option<&mut ListenerLease> {
        self.press_inside();
        if !self.frame.begin_drag(pointer, measured, viewport, maximized) {
            return None;
        }
        Some(self.lease.insert(self.ledger.lease()))
    }

    /// Handles a resize-handle press. Returns the lease to attach listeners to when a resize
    /// starts.
    pub fn press_resize_handle(
        &mut self,
        pointer: Point,
        measured: Option<Rect>,
        viewport: Size,
        maximized: bool,
    ) -> Option<&mut ListenerLease> {
        self.press_inside();
        if !self
            .frame
            .begin_resize(pointer, measured, viewport, maximized)
        {
            return None;
        }
        Some(self.lease.insert(self.ledger.lease()))
    }

    /// Forwards a global mousemove.
    pub fn pointer_moved(&mut self, pointer: Point) -> Option<GestureFrame> {
        self.frame.pointer_moved(pointer)
    }

    /// Forwards a global mouseup, ending the gesture and releasing its listeners.
    pub fn pointer_released(&mut self, pointer: Option<Point>) -> Option<Point> {
        let committed = self.frame.pointer_released(pointer);
        self.lease = None;
        committed
    }

    /// Applies a maximize toggle, cancelling any gesture.
    pub fn set_maximized(&mut self, maximized: bool) {
        self.frame.set_maximized(maximized);
        self.lease = None;
    }

    /// Cancels any gesture without committing it. Used on unmount.
    pub fn cancel_gesture(&mut self) {
        self.frame.interaction = Interaction::Idle;
        self.lease = None;
    }

    /// Records a press anywhere inside the window, whichever button was used.
    pub fn press_inside(&mut self) {
        self.dismiss.press(false);
    }

    /// Records a backdrop mousedown; `on_backdrop` is whether the backdrop itself was the target.
    pub fn press_backdrop(&mut self, on_backdrop: bool) {
        self.dismiss.press(on_backdrop);
    }

    /// Consumes a backdrop click and reports whether it should close the window.
    pub fn click_backdrop(&mut self, on_backdrop: bool) -> bool {
        self.dismiss.click(on_backdrop)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Tracks whether a backdrop click really started on the backdrop.
///
/// A press inside the window that is released over the backdrop produces a click whose target is
/// the backdrop; only a press and click that both land on the backdrop dismiss the window.
pub struct BackdropDismissGuard {
    pressed_on_backdrop: bool,
}

impl BackdropDismissGuard {
    /// Records a mousedown; `on_backdrop` is whether the backdrop itself was the target.
    pub fn press(&mut self, on_backdrop: bool) {
        self.pressed_on_backdrop = on_backdrop;
    }

    /// Consumes a click and reports whether it should close the window.
    pub fn click(&mut self, on_backdrop: bool) -> bool {
        let dismiss = self.pressed_on_backdrop && on_backdrop;
        self.pressed_on_backdrop = false;
        dismiss
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    #[test]
    fn size_classes_scale_with_viewport() {
        assert_eq!(
            default_dimensions(SizeClass::Small, VIEWPORT),
            Size::new(500.0, 400.0)
        );
        assert_eq!(
            default_dimensions(SizeClass::Large, VIEWPORT),
            Size::new(900.0, 720.0)
        );
        assert_eq!(
            default_dimensions(SizeClass::Medium, Size::new(f64::NAN, 10.0)),
            default_dimensions(SizeClass::Medium, FALLBACK_VIEWPORT)
        );
    }

    #[test]
    fn fresh_window_is_centered_at_default_size() {
        let frame = WindowFrameState::new(SizeClass::Small);
        assert_eq!(
            frame.frame_rect(VIEWPORT, false),
            Rect {
                x: 250.0,
                y: 200.0,
                width: 500.0,
                height: 400.0
            }
        );
    }

    #[test]
    fn drag_lands_at_start_plus_delta_regardless_of_event_count() {
        let start = Point::new(300.0, 210.0);
        let delta = Point::new(137.0, -54.0);
        let end = Point::new(start.x + delta.x, start.y + delta.y);
        let measured = Rect {
            x: 250.0,
            y: 200.0,
            width: 500.0,
            height: 400.0,
        };

        let mut landings = Vec::new();
        for steps in [1_u32, 3, 40] {
            let mut frame = WindowFrameState::new(SizeClass::Small);
            assert!(frame.begin_drag(start, Some(measured), VIEWPORT, false));
            for step in 1..=steps {
                let t = f64::from(step) / f64::from(steps);
                let wobble = if step % 2 == 0 { 9.0 } else { -13.0 };
                frame.pointer_moved(Point::new(
                    start.x + delta.x * t + wobble,
                    start.y + delta.y * t - wobble,
                ));
            }
            landings.push(frame.pointer_released(Some(end)));
            assert_eq!(frame.interaction, Interaction::Idle);
        }

        let expected = Some(Point::new(250.0 + delta.x, 200.0 + delta.y));
        assert_eq!(landings, vec![expected; 3]);
    }

    #[test]
    fn drag_reports_translation_relative_to_press() {
        let mut frame = WindowFrameState::new(SizeClass::Medium);
        frame.geometry.position = Some(Point::new(40.0, 60.0));
        frame.begin_drag(Point::new(100.0, 80.0), None, VIEWPORT, false);

        assert_eq!(
            frame.pointer_moved(Point::new(130.0, 70.0)),
            Some(GestureFrame::Translate(Point::new(30.0, -10.0)))
        );
        assert_eq!(frame.geometry.position, Some(Point::new(40.0, 60.0)));
    }

    #[test]
    fn drag_ignores_non_finite_measurement() {
        let mut frame = WindowFrameState::new(SizeClass::Small);
        let measured = Rect {
            x: f64::INFINITY,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        frame.begin_drag(Point::new(260.0, 210.0), Some(measured), VIEWPORT, false);
        let landing = frame.pointer_released(Some(Point::new(270.0, 230.0)));
        assert_eq!(landing, Some(Point::new(260.0, 220.0)));
    }

    #[test]
    fn resize_is_live_and_clamped() {
        let mut frame = WindowFrameState::new(SizeClass::Medium);
        frame.geometry.dimensions = Some(Size::new(640.0, 480.0));
        assert!(frame.begin_resize(Point::new(900.0, 700.0), None, VIEWPORT, false));

        assert_eq!(
            frame.pointer_moved(Point::new(950.0, 720.0)),
            Some(GestureFrame::Resize(Size::new(690.0, 500.0)))
        );
        assert_eq!(frame.geometry.dimensions, Some(Size::new(690.0, 500.0)));

        frame.pointer_moved(Point::new(-2000.0, -2000.0));
        assert_eq!(
            frame.geometry.dimensions,
            Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT))
        );
        assert_eq!(frame.pointer_released(None), None);
        assert_eq!(frame.interaction, Interaction::Idle);
    }

    #[test]
    fn resize_pins_implicit_position_so_window_grows_from_top_left() {
        let mut frame = WindowFrameState::new(SizeClass::Small);
        frame.begin_resize(Point::new(750.0, 600.0), None, VIEWPORT, false);
        frame.pointer_moved(Point::new(850.0, 650.0));

        assert_eq!(frame.geometry.position, Some(Point::new(250.0, 200.0)));
        assert_eq!(
            frame.frame_rect(VIEWPORT, false).size(),
            Size::new(600.0, 450.0)
        );
    }

    #[test]
    fn gestures_are_disabled_while_maximized_and_exclusive() {
        let mut frame = WindowFrameState::new(SizeClass::Medium);
        assert!(!frame.begin_drag(Point::new(1.0, 1.0), None, VIEWPORT, true));
        assert!(!frame.begin_resize(Point::new(1.0, 1.0), None, VIEWPORT, true));

        assert!(frame.begin_drag(Point::new(1.0, 1.0), None, VIEWPORT, false));
        assert!(!frame.begin_resize(Point::new(1.0, 1.0), None, VIEWPORT, false));
        assert!(matches!(frame.interaction, Interaction::Dragging(_)));
    }

    #[test]
    fn maximizing_twice_returns_to_default_geometry() {
        let mut frame = WindowFrameState::new(SizeClass::Medium);
        frame.geometry = WindowGeometry {
            position: Some(Point::new(12.0, 34.0)),
            dimensions: Some(Size::new(456.0, 321.0)),
        };

        frame.set_maximized(true);
        assert_eq!(
            frame.frame_rect(VIEWPORT, true),
            Rect {
                x: 0.0,
                y: 0.0,
                width: 1000.0,
                height: 800.0
            }
        );
        frame.set_maximized(false);

        assert_eq!(frame.geometry, WindowGeometry::default());
        assert_eq!(
            frame.frame_rect(VIEWPORT, false),
            WindowFrameState::new(SizeClass::Medium).frame_rect(VIEWPORT, false)
        );
    }

    #[test]
    fn controller_holds_a_lease_only_during_gestures() {
        let ledger = ListenerLedger::new();
        let mut controller = WindowController::new(SizeClass::Medium, ledger.clone());
        assert_eq!(ledger.live(), 0);

        assert!(controller
            .press_title_bar(Point::new(400.0, 150.0), None, VIEWPORT, false)
            .is_some());
        assert_eq!(ledger.live(), 1);
        assert!(controller
            .press_resize_handle(Point::new(400.0, 150.0), None, VIEWPORT, false)
            .is_none());
        assert_eq!(ledger.live(), 1);

        controller.pointer_released(Some(Point::new(420.0, 170.0)));
        assert_eq!(ledger.live(), 0);

        controller.press_resize_handle(Point::new(800.0, 600.0), None, VIEWPORT, false);
        controller.set_maximized(true);
        assert_eq!(ledger.live(), 0);
        assert!(!controller.is_gesture_active());
    }

    #[test]
    fn rapid_open_close_sequences_leave_no_live_listeners() {
        let ledger = ListenerLedger::new();
        let released = std::rc::Rc::new(std::cell::Cell::new(0_u32));

        for round in 0..30_u32 {
            for size_class in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
                let mut controller = WindowController::new(size_class, ledger.clone());
                let pointer = Point::new(100.0 + f64::from(round), 100.0);
                let lease = if round % 2 == 0 {
                    controller.press_title_bar(pointer, None, VIEWPORT, false)
                } else {
                    controller.press_resize_handle(pointer, None, VIEWPORT, false)
                };
                if let Some(lease) = lease {
                    let released = released.clone();
                    lease.on_release(move || released.set(released.get() + 1));
                }
                if round % 3 == 0 {
                    controller.pointer_released(None);
                }
                drop(controller);
            }
        }

        assert_eq!(ledger.live(), 0);
        assert_eq!(released.get(), 90);
    }

    #[test]
    fn release_over_backdrop_after_inside_press_keeps_window_open() {
        let mut guard = BackdropDismissGuard::default();
        guard.press(false);
        assert!(!guard.click(true));

        guard.press(true);
        assert!(guard.click(true));

        guard.press(true);
        assert!(!guard.click(false));
        assert!(!guard.click(true));
    }

    #[test]
    fn resize_released_over_backdrop_keeps_window_open() {
        let mut controller = WindowController::new(SizeClass::Medium, ListenerLedger::new());
        // A secondary-button press on the backdrop fires mousedown without a click.
        controller.press_backdrop(true);

        assert!(controller
            .press_resize_handle(Point::new(800.0, 600.0), None, VIEWPORT, false)
            .is_some());
        controller.pointer_moved(Point::new(990.0, 790.0));
        controller.pointer_released(Some(Point::new(995.0, 795.0)));

        assert!(!controller.click_backdrop(true));
    }

    #[test]
    fn drag_released_over_backdrop_keeps_window_open() {
        let mut controller = WindowController::new(SizeClass::Medium, ListenerLedger::new());
        controller.press_backdrop(true);
        controller.press_title_bar(Point::new(400.0, 150.0), None, VIEWPORT, false);
        controller.pointer_released(Some(Point::new(5.0, 5.0)));
        assert!(!controller.click_backdrop(true));

        controller.press_backdrop(true);
        controller.press_inside();
        assert!(!controller.click_backdrop(true));

        controller.press_backdrop(true);
        assert!(controller.click_backdrop(true));
    }
}
