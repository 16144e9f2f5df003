use super::*;

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] theme: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-theme=move || theme.get()
        >
            {children()}
        </div>
    }
}

#[component]
/// Launcher surface behind the window layer.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] wallpaper: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            style=move || wallpaper.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Launcher tile grid.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Launcher tile with an optional minimized indicator dot.
pub fn DesktopIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] size_token: Option<&'static str>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let aria_label = label.clone();
    view! {
        <button
            type="button"
            id=id
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=label.clone()
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-size=size_token.unwrap_or("medium")
            data-ui-minimized=move || bool_token(minimized.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Lg />
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

#[component]
/// Dimmed overlay behind the active window.
pub fn WindowBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-backdrop"
            data-ui-maximized=move || bool_token(maximized.get())
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    node_ref: NodeRef<html::Section>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] animating: MaybeSignal<bool>,
    #[prop(optional, into)] interacting: MaybeSignal<bool>,
    #[prop(optional)] size_token: Option<&'static str>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            node_ref=node_ref
            id=id
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-modal="true"
            aria-label=move || aria_label.get()
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-size=size_token
            data-ui-maximized=move || bool_token(maximized.get())
            data-ui-animating=move || bool_token(animating.get())
            data-ui-interacting=move || bool_token(interacting.get())
            on:mousedown=move |ev: MouseEvent| {
                ev.stop_propagation();
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:click=|ev: MouseEvent| ev.stop_propagation()
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive and drag handle.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=move || bool_token(draggable.get())
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Shared window title group.
pub fn WindowTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Traffic-light control roles.
pub enum WindowControlKind {
    /// Red close light.
    Close,
    /// Yellow minimize light.
    Minimize,
    /// Green maximize/restore light.
    Maximize,
}

impl WindowControlKind {
    fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

#[component]
/// Titlebar traffic-light button.
///
/// Presses never reach the titlebar, so clicking a control cannot start a drag.
pub fn WindowControlButton(
    kind: WindowControlKind,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let title = aria_label.clone();
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=kind.token()
            on:mousedown=|ev: MouseEvent| ev.stop_propagation()
            on:dblclick=|ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        ></button>
    }
}

#[component]
/// Shared window body primitive.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom-right resize grip.
pub fn ResizeHandle(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] hidden: MaybeSignal<bool>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-resize-handle", layout_class)
            aria-hidden="true"
            hidden=move || hidden.get()
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot="bottom-right"
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        ></div>
    }
}
