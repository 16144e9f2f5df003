//! Session and window-geometry model types shared by the reducer, window manager, and UI.

use desktop_app_contract::{AppContent, AppId, OpenAppRequest, SizeClass};

/// Minimum window width enforced by resize.
pub const MIN_WINDOW_WIDTH: f64 = 300.0;
/// Minimum window height enforced by resize.
pub const MIN_WINDOW_HEIGHT: f64 = 200.0;
/// Duration of the maximize and spawn transitions.
pub const WINDOW_TRANSITION_MS: u64 = 300;
/// Viewport assumed when the host cannot report one.
pub const FALLBACK_VIEWPORT: Size = Size {
    width: 1280.0,
    height: 800.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Point in CSS pixels relative to the viewport.
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Width and height in CSS pixels.
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both extents are finite and positive.
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Raises each extent to the window minimums.
    pub fn clamped_min(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Axis-aligned rectangle, typically a measured bounding box.
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Top-left corner.
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extent.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the rectangle can seed window geometry.
    pub fn is_usable(self) -> bool {
        self.origin().is_finite() && self.size().is_usable()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// User-applied window geometry.
///
/// `None` position means centered and never dragged; `None` dimensions means the size-class
/// default. Both are cleared by maximize and discarded with the window on close.
pub struct WindowGeometry {
    /// Committed top-left corner.
    pub position: Option<Point>,
    /// Committed size.
    pub dimensions: Option<Size>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// In-flight drag gesture.
pub struct DragState {
    /// Pointer offset from the window's top-left at mousedown.
    pub start_offset: Point,
    /// Window top-left at mousedown.
    pub origin: Point,
    /// Latest pointer seen during the gesture.
    pub last_pointer: Point,
}

impl DragState {
    /// Translation applied to the element for the latest pointer.
    pub fn translation(&self) -> Point {
        self.landing_position().delta_from(self.origin)
    }

    /// Absolute top-left the window lands on for the latest pointer.
    pub fn landing_position(&self) -> Point {
        self.last_pointer.delta_from(self.start_offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// In-flight resize gesture.
pub struct ResizeState {
    /// Window width at mousedown.
    pub start_width: f64,
    /// Window height at mousedown.
    pub start_height: f64,
    /// Pointer x at mousedown.
    pub start_x: f64,
    /// Pointer y at mousedown.
    pub start_y: f64,
}

impl ResizeState {
    /// Clamped size for `pointer`.
    pub fn size_for(&self, pointer: Point) -> Size {
        Size::new(
            self.start_width + (pointer.x - self.start_x),
            self.start_height + (pointer.y - self.start_y),
        )
        .clamped_min()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Pointer gesture currently owned by the window. Drag and resize never overlap.
pub enum Interaction {
    /// No gesture.
    #[default]
    Idle,
    /// Title-bar drag.
    Dragging(DragState),
    /// Bottom-right resize.
    Resizing(ResizeState),
}

impl Interaction {
    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// App currently owning the window host.
pub struct ActiveApp {
    /// App identity.
    pub app_id: AppId,
    /// Opaque window contents.
    pub content: AppContent,
    /// Window title.
    pub title: String,
    /// Default-dimension preset.
    pub size_class: SizeClass,
    /// Whether the window opened maximized (plays the spawn animation).
    pub start_maximized: bool,
}

impl From<OpenAppRequest> for ActiveApp {
    fn from(request: OpenAppRequest) -> Self {
        Self {
            title: request.resolved_title(),
            size_class: request.resolved_size_class(),
            app_id: request.app_id,
            start_maximized: request.start_maximized,
            content: request.content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Observable window-host phase.
pub enum SessionPhase {
    /// Nothing open.
    Closed,
    /// Window shown at its own geometry.
    Normal,
    /// App retained, window unmounted.
    Minimized,
    /// Window fills the viewport.
    Maximized,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Single-active-app window host state.
pub struct AppSession {
    /// Active app, if any.
    pub active: Option<ActiveApp>,
    /// Window hidden but app retained.
    pub is_minimized: bool,
    /// Window fills the viewport.
    pub is_maximized: bool,
    /// Bumped on every open that creates a fresh window.
    pub generation: u64,
}

impl AppSession {
    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        match (&self.active, self.is_minimized, self.is_maximized) {
            (None, _, _) => SessionPhase::Closed,
            (Some(_), true, _) => SessionPhase::Minimized,
            (Some(_), false, true) => SessionPhase::Maximized,
            (Some(_), false, false) => SessionPhase::Normal,
        }
    }

    /// Id of the active app.
    pub fn active_app_id(&self) -> Option<AppId> {
        self.active.as_ref().map(|active| active.app_id)
    }

    /// Generation of the mounted window, or `None` when nothing is rendered.
    pub fn visible_generation(&self) -> Option<u64> {
        match self.phase() {
            SessionPhase::Normal | SessionPhase::Maximized => Some(self.generation),
            SessionPhase::Closed | SessionPhase::Minimized => None,
        }
    }

    /// Whether `app_id` is active but minimized.
    pub fn is_minimized_app(&self, app_id: AppId) -> bool {
        self.is_minimized && self.active_app_id() == Some(app_id)
    }
}

#[cfg(test)]
mod tests {
    use leptos::IntoView;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resize_clamps_to_minimums() {
        let resize = ResizeState {
            start_width: 400.0,
            start_height: 300.0,
            start_x: 500.0,
            start_y: 500.0,
        };
        assert_eq!(
            resize.size_for(Point::new(100.0, 100.0)),
            Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
        );
        assert_eq!(
            resize.size_for(Point::new(550.0, 540.0)),
            Size::new(450.0, 340.0)
        );
    }

    #[test]
    fn non_finite_measurements_are_unusable() {
        let rect = Rect {
            x: f64::NAN,
            y: 0.0,
            width: 100.0,
            height: 100.0,
        };
        assert!(!rect.is_usable());
        assert!(!Size::new(0.0, 10.0).is_usable());
        assert!(Size::new(10.0, 10.0).is_usable());
    }

    #[test]
    fn phase_follows_flags() {
        let mut session = AppSession::default();
        assert_eq!(session.phase(), SessionPhase::Closed);
        assert_eq!(session.visible_generation(), None);

        session.active = Some(ActiveApp::from(OpenAppRequest::new(
            AppId::Work,
            AppContent::new(AppId::Work, || ().into_view()),
        )));
        session.generation = 4;
        assert_eq!(session.phase(), SessionPhase::Normal);
        assert_eq!(session.visible_generation(), Some(4));

        session.is_minimized = true;
        assert_eq!(session.phase(), SessionPhase::Minimized);
        assert!(session.is_minimized_app(AppId::Work));
        assert_eq!(session.visible_generation(), None);
    }
}
