//! Shared UI primitive library for the portfolio desktop shell and its apps.
//!
//! The crate owns reusable Leptos primitives, a small icon API, and the stable `data-ui-*` DOM
//! contract consumed by the shell stylesheet. Apps compose these primitives instead of emitting
//! ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, DesktopBackdrop, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, Elevation, EmptyState, Grid, Heading, LayoutAlign, LayoutGap,
    LayoutJustify, LayoutPadding, Panel, ResizeHandle, Stack, SurfaceVariant, Text, TextField,
    TextRole, TextTone, WindowBackdrop, WindowBody, WindowControlButton, WindowControlKind,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, Elevation, EmptyState, Grid,
        Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
        Panel, Stack, SurfaceVariant, Text, TextField, TextRole, TextTone,
    };
}
