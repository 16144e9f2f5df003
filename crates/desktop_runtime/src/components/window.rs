use std::time::Duration;

use desktop_app_contract::SizeClass;
use leptos::ev::{KeyboardEvent, MouseEvent};
use system_ui::{
    ResizeHandle, WindowBackdrop, WindowBody, WindowControlButton, WindowControlKind,
    WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

use super::*;
use crate::{
    host::WINDOW_DOM_ID,
    lifecycle::{DisposalToken, ListenerLease, ListenerLedger, ScopedTimeout},
    model::{ActiveApp, Point, Rect, Size, WINDOW_TRANSITION_MS},
    window_manager::{GestureFrame, WindowController, WindowFrameState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureKind {
    Drag,
    Resize,
}

fn pointer_from_mouse_event(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

fn event_targets_itself(ev: &MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

fn measured_rect(frame_ref: NodeRef<html::Section>) -> Option<Rect> {
    let element = frame_ref.get_untracked()?;
    let bounds = element.get_bounding_client_rect();
    Some(Rect {
        x: bounds.left(),
        y: bounds.top(),
        width: bounds.width(),
        height: bounds.height(),
    })
}

fn write_drag_transform(frame_ref: NodeRef<html::Section>, offset: Option<Point>) {
    let Some(element) = frame_ref.get_untracked() else {
        return;
    };
    let element: &web_sys::HtmlElement = &element;
    let style = element.style();
    let result = match offset {
        Some(offset) => style.set_property(
            "transform",
            &format!("translate({}px, {}px)", offset.x, offset.y),
        ),
        None => style.remove_property("transform").map(|_| ()),
    };
    if let Err(err) = result {
        logging::warn!("window transform update failed: {err:?}");
    }
}

fn frame_style(frame: WindowFrameState, viewport: Size, maximized: bool) -> String {
    let rect = frame.frame_rect(viewport, maximized);
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;",
        rect.x, rect.y, rect.width, rect.height
    )
}

#[derive(Clone, Copy)]
struct GestureWiring {
    controller: StoredValue<WindowController>,
    frame_ref: NodeRef<html::Section>,
    frame_state: RwSignal<WindowFrameState>,
    interacting: RwSignal<bool>,
}

impl GestureWiring {
    fn begin(self, ev: &MouseEvent, kind: GestureKind, viewport: Size, maximized: bool) {
        if ev.button() != 0 {
            self.controller
                .try_update_value(WindowController::press_inside);
            return;
        }
        let pointer = pointer_from_mouse_event(ev);
        let measured = measured_rect(self.frame_ref);
        let started = self
            .controller
            .try_update_value(|controller| {
                let lease = match kind {
                    GestureKind::Drag => {
                        controller.press_title_bar(pointer, measured, viewport, maximized)
                    }
                    GestureKind::Resize => {
                        controller.press_resize_handle(pointer, measured, viewport, maximized)
                    }
                };
                match lease {
                    Some(lease) => {
                        self.attach_listeners(lease);
                        true
                    }
                    None => false,
                }
            })
            .unwrap_or(false);

        if started {
            ev.prevent_default();
            self.sync_frame();
            self.interacting.set(true);
        }
    }

    fn attach_listeners(self, lease: &mut ListenerLease) {
        let move_handle = window_event_listener(ev::mousemove, move |ev| {
            self.pointer_moved(pointer_from_mouse_event(&ev));
        });
        lease.on_release(move || move_handle.remove());

        let up_handle = window_event_listener(ev::mouseup, move |ev| {
            self.finish(Some(pointer_from_mouse_event(&ev)));
        });
        lease.on_release(move || up_handle.remove());
    }

    fn pointer_moved(self, pointer: Point) {
        let update = self
            .controller
            .try_update_value(|controller| controller.pointer_moved(pointer))
            .flatten();
        match update {
            Some(GestureFrame::Translate(offset)) => {
                write_drag_transform(self.frame_ref, Some(offset));
            }
            Some(GestureFrame::Resize(_)) => self.sync_frame(),
            None => {}
        }
    }

    fn finish(self, pointer: Option<Point>) {
        let released = self
            .controller
            .try_update_value(|controller| controller.pointer_released(pointer));
        if released.is_none() {
            return;
        }
        write_drag_transform(self.frame_ref, None);
        self.sync_frame();
        self.interacting.set(false);
    }

    fn sync_frame(self) {
        if let Some(frame) = self
            .controller
            .try_with_value(|controller| *controller.frame())
        {
            if frame != self.frame_state.get_untracked() {
                self.frame_state.set(frame);
            }
        }
    }
}

/// Per-mount window state released by the owning reactive scope's cleanup.
#[derive(Clone)]
struct WindowResources {
    controller: StoredValue<WindowController>,
    token: DisposalToken,
    transition_timer: StoredValue<Option<ScopedTimeout>>,
}

impl WindowResources {
    fn install(size_class: SizeClass, ledger: ListenerLedger) -> Self {
        let resources = Self {
            controller: store_value(WindowController::new(size_class, ledger)),
            token: DisposalToken::new(),
            transition_timer: store_value(None),
        };
        on_cleanup({
            let resources = resources.clone();
            move || resources.release()
        });
        resources
    }

    fn release(&self) {
        self.token.dispose();
        self.transition_timer.try_update_value(|timer| timer.take());
        self.controller
            .try_update_value(WindowController::cancel_gesture);
    }
}

#[component]
/// Modal window hosting the active app.
///
/// Remounted for every session generation, so geometry always starts from the size-class
/// defaults.
pub(super) fn AppWindow(
    active: ActiveApp,
    #[prop(into)] is_maximized: Signal<bool>,
    on_close: Callback<()>,
    on_minimize: Callback<()>,
    on_maximize: Callback<()>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let viewport = runtime.viewport;
    let size_class = active.size_class;
    let frame_ref = create_node_ref::<html::Section>();
    let WindowResources {
        controller,
        token,
        transition_timer,
    } = WindowResources::install(size_class, runtime.listeners.get_value());
    let frame_state = create_rw_signal(WindowFrameState::new(size_class));
    let interacting = create_rw_signal(false);
    let animating = create_rw_signal(false);

    let gestures = GestureWiring {
        controller,
        frame_ref,
        frame_state,
        interacting,
    };

    let play_transition = {
        let token = token.clone();
        move || {
            animating.set(true);
            let timer = ScopedTimeout::schedule(
                &token,
                Duration::from_millis(WINDOW_TRANSITION_MS),
                move || animating.set(false),
            );
            transition_timer.set_value(Some(timer));
        }
    };

    if active.start_maximized {
        play_transition();
    }

    create_effect({
        let play_transition = play_transition.clone();
        move |previous: Option<bool>| {
            let maximized = is_maximized.get();
            if previous.is_some_and(|previous| previous != maximized) {
                controller.update_value(|controller| controller.set_maximized(maximized));
                write_drag_transform(frame_ref, None);
                interacting.set(false);
                gestures.sync_frame();
                play_transition();
            }
            maximized
        }
    });

    let style = Signal::derive(move || {
        frame_style(frame_state.get(), viewport.get(), is_maximized.get())
    });
    let title = active.title.clone();
    let content = active.content.clone();

    let on_backdrop_mousedown = Callback::new(move |ev: MouseEvent| {
        let on_backdrop = event_targets_itself(&ev);
        controller.try_update_value(|controller| controller.press_backdrop(on_backdrop));
    });
    let on_backdrop_click = Callback::new(move |ev: MouseEvent| {
        let on_backdrop = event_targets_itself(&ev);
        let dismiss = controller
            .try_update_value(|controller| controller.click_backdrop(on_backdrop))
            .unwrap_or(false);
        if dismiss {
            on_close.call(());
        }
    });
    let on_frame_mousedown = Callback::new(move |_: MouseEvent| {
        controller.try_update_value(WindowController::press_inside);
    });
    let on_frame_keydown = Callback::new(move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.call(());
        }
    });
    let on_title_mousedown = Callback::new(move |ev: MouseEvent| {
        gestures.begin(
            &ev,
            GestureKind::Drag,
            viewport.get_untracked(),
            is_maximized.get_untracked(),
        );
    });
    let on_title_dblclick = Callback::new(move |ev: MouseEvent| {
        ev.prevent_default();
        on_maximize.call(());
    });
    let on_resize_mousedown = Callback::new(move |ev: MouseEvent| {
        ev.stop_propagation();
        gestures.begin(
            &ev,
            GestureKind::Resize,
            viewport.get_untracked(),
            is_maximized.get_untracked(),
        );
    });
    let maximize_label = Signal::derive(move || {
        if is_maximized.get() {
            "Restore window".to_string()
        } else {
            "Maximize window".to_string()
        }
    });

    view! {
        <WindowBackdrop
            maximized=is_maximized
            on_mousedown=on_backdrop_mousedown
            on_click=on_backdrop_click
        >
            <WindowFrame
                node_ref=frame_ref
                id=WINDOW_DOM_ID
                style=style
                aria_label=title.clone()
                maximized=is_maximized
                animating=animating
                interacting=interacting
                size_token=size_class.token()
                on_mousedown=on_frame_mousedown
                on_keydown=on_frame_keydown
            >
                <WindowTitleBar
                    draggable=Signal::derive(move || !is_maximized.get())
                    on_mousedown=on_title_mousedown
                    on_dblclick=on_title_dblclick
                >
                    <WindowControls>
                        <WindowControlButton
                            kind=WindowControlKind::Close
                            aria_label="Close window"
                            on_click=Callback::new(move |_| on_close.call(()))
                        />
                        <WindowControlButton
                            kind=WindowControlKind::Minimize
                            aria_label="Minimize window"
                            on_click=Callback::new(move |_| on_minimize.call(()))
                        />
                        <WindowControlButton
                            kind=WindowControlKind::Maximize
                            aria_label=maximize_label
                            on_click=Callback::new(move |_| on_maximize.call(()))
                        />
                    </WindowControls>
                    <WindowTitle>{title}</WindowTitle>
                </WindowTitleBar>
                <WindowBody>{content.render()}</WindowBody>
                <ResizeHandle hidden=is_maximized on_mousedown=on_resize_mousedown />
            </WindowFrame>
        </WindowBackdrop>
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppContent, AppId, OpenAppRequest};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::AppSession,
        reducer::{reduce_session, SessionAction},
    };

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    fn mount_in(
        ledger: &ListenerLedger,
    ) -> impl Fn(SizeClass) -> (WindowResources, Disposer) {
        let ledger = ledger.clone();
        as_child_of_current_owner(move |size_class| {
            WindowResources::install(size_class, ledger.clone())
        })
    }

    fn start_drag(resources: &WindowResources) -> bool {
        resources
            .controller
            .try_update_value(|controller| {
                controller
                    .press_title_bar(Point::new(300.0, 200.0), None, VIEWPORT, false)
                    .is_some()
            })
            .unwrap_or(false)
    }

    fn open(app_id: AppId) -> SessionAction {
        SessionAction::OpenApp(OpenAppRequest::new(
            app_id,
            AppContent::new(app_id, || ().into_view()),
        ))
    }

    #[test]
    fn unmounting_mid_gesture_releases_listeners_and_timers() {
        let runtime = create_runtime();
        let ledger = ListenerLedger::new();
        let mount = mount_in(&ledger);

        for size_class in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
            let (resources, unmount) = mount(size_class);
            let token = resources.token.clone();
            assert!(start_drag(&resources));
            assert_eq!(ledger.live(), 1);

            drop(unmount);

            assert!(!token.is_live());
            assert_eq!(ledger.live(), 0);
            assert!(!start_drag(&resources));
        }

        runtime.dispose();
    }

    #[test]
    fn rapid_open_close_across_apps_settles_without_live_listeners() {
        let runtime = create_runtime();
        let ledger = ListenerLedger::new();
        let mount = mount_in(&ledger);
        let mut session = AppSession::default();
        let mut mounted: Option<(u64, WindowResources, Disposer)> = None;

        for app_id in [AppId::About, AppId::Projects, AppId::DinoGame] {
            for action in [open(app_id), SessionAction::CloseApp, open(app_id)] {
                reduce_session(&mut session, action).expect("valid transition");
                let visible = session.visible_generation();
                if mounted.as_ref().map(|(generation, ..)| *generation) == visible {
                    continue;
                }
                drop(mounted.take());
                if let (Some(generation), Some(active)) = (visible, session.active.as_ref()) {
                    let (resources, unmount) = mount(active.size_class);
                    assert!(start_drag(&resources));
                    mounted = Some((generation, resources, unmount));
                }
            }
        }

        assert_eq!(session.active_app_id(), Some(AppId::DinoGame));
        assert_eq!(ledger.live(), 1);

        let (_, resources, unmount) = mounted.expect("last app stays mounted");
        resources
            .controller
            .try_update_value(|controller| controller.pointer_released(None));
        assert_eq!(ledger.live(), 0);

        drop(unmount);
        assert_eq!(ledger.live(), 0);
        runtime.dispose();
    }

    #[test]
    fn frame_style_places_window_in_pixels() {
        let frame = WindowFrameState::new(SizeClass::Small);
        assert_eq!(
            frame_style(frame, Size::new(1000.0, 800.0), false),
            "left:250px;top:200px;width:500px;height:400px;"
        );
        assert_eq!(
            frame_style(frame, Size::new(1000.0, 800.0), true),
            "left:0px;top:0px;width:1000px;height:800px;"
        );
    }
}
