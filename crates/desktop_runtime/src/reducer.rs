//! Reducer actions, side-effect intents, and transition logic for the window host.

use desktop_app_contract::{AppId, OpenAppRequest};
use thiserror::Error;

use crate::model::{ActiveApp, AppSession, SessionPhase};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_session`].
pub enum SessionAction {
    /// Open an app, restoring it in place when it is the minimized active app.
    OpenApp(OpenAppRequest),
    /// Close the active app. Closing with nothing open is a no-op.
    CloseApp,
    /// Hide the window while keeping the active app.
    MinimizeApp,
    /// Flip between normal and maximized geometry.
    ToggleMaximize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by the reducer and executed after the state commit.
pub enum RuntimeEffect {
    /// Move keyboard focus into the mounted window.
    FocusWindow,
    /// Return keyboard focus to an app's launcher tile.
    FocusLauncherTile(AppId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Transitions rejected by [`reduce_session`]. Rejections leave the session untouched.
pub enum SessionError {
    /// The action needs an active app.
    #[error("no active app")]
    NoActiveApp,
    /// A minimized window has no chrome to maximize.
    #[error("cannot maximize {0} while it is minimized")]
    MaximizeWhileMinimized(AppId),
}

/// Applies `action` to `session` and returns the effects to run afterwards.
///
/// # Errors
///
/// Returns [`SessionError`] for transitions the state machine does not allow.
pub fn reduce_session(
    session: &mut AppSession,
    action: SessionAction,
) -> Result<Vec<RuntimeEffect>, SessionError> {
    let mut effects = Vec::new();

    match action {
        SessionAction::OpenApp(request) => {
            if session.is_minimized_app(request.app_id) {
                session.is_minimized = false;
            } else {
                session.is_maximized = request.start_maximized;
                session.is_minimized = false;
                session.active = Some(ActiveApp::from(request));
                session.generation = session.generation.wrapping_add(1);
            }
            effects.push(RuntimeEffect::FocusWindow);
        }
        SessionAction::CloseApp => {
            let Some(closed) = session.active.take() else {
                return Ok(effects);
            };
            session.is_minimized = false;
            session.is_maximized = false;
            effects.push(RuntimeEffect::FocusLauncherTile(closed.app_id));
        }
        SessionAction::MinimizeApp => match session.phase() {
            SessionPhase::Closed => return Err(SessionError::NoActiveApp),
            SessionPhase::Minimized => {}
            SessionPhase::Normal | SessionPhase::Maximized => {
                session.is_minimized = true;
                session.is_maximized = false;
                if let Some(app_id) = session.active_app_id() {
                    effects.push(RuntimeEffect::FocusLauncherTile(app_id));
                }
            }
        },
        SessionAction::ToggleMaximize => match session.phase() {
            SessionPhase::Closed => return Err(SessionError::NoActiveApp),
            SessionPhase::Minimized => {
                let app_id = session.active_app_id().ok_or(SessionError::NoActiveApp)?;
                return Err(SessionError::MaximizeWhileMinimized(app_id));
            }
            SessionPhase::Normal | SessionPhase::Maximized => {
                session.is_maximized = !session.is_maximized;
            }
        },
    }

    Ok(effects)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use desktop_app_contract::{AppContent, SizeClass};
    use leptos::IntoView;
    use pretty_assertions::assert_eq;

    use super::*;

    fn content(app_id: AppId, renders: &Rc<Cell<u32>>) -> AppContent {
        let renders = renders.clone();
        AppContent::new(app_id, move || {
            renders.set(renders.get() + 1);
            ().into_view()
        })
    }

    fn open(session: &mut AppSession, app_id: AppId, content: AppContent) -> Vec<RuntimeEffect> {
        reduce_session(
            session,
            SessionAction::OpenApp(OpenAppRequest::new(app_id, content)),
        )
        .expect("open app")
    }

    fn assert_exclusive(session: &AppSession) {
        assert!(!(session.is_minimized && session.is_maximized));
        if session.active.is_none() {
            assert!(!session.is_minimized && !session.is_maximized);
        }
    }

    #[test]
    fn open_replaces_active_app_with_latest_payload() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        let about_first = content(AppId::About, &renders);
        let work = content(AppId::Work, &renders);
        let about_second = content(AppId::About, &renders);

        open(&mut session, AppId::About, about_first.clone());
        open(&mut session, AppId::Work, work);
        open(&mut session, AppId::About, about_second.clone());

        let active = session.active.as_ref().expect("active app");
        assert_eq!(active.app_id, AppId::About);
        assert_eq!(active.content, about_second);
        assert_ne!(active.content, about_first);
        assert!(!session.is_minimized);
        assert!(!session.is_maximized);
        assert_eq!(session.generation, 3);
        assert_eq!(renders.get(), 0);
    }

    #[test]
    fn reopening_minimized_app_restores_original_content() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        let original = content(AppId::Projects, &renders);

        open(&mut session, AppId::Projects, original.clone());
        let generation = session.generation;
        let effects = reduce_session(&mut session, SessionAction::MinimizeApp).expect("minimize");
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusLauncherTile(AppId::Projects)]
        );
        assert_eq!(session.phase(), SessionPhase::Minimized);

        let effects = open(
            &mut session,
            AppId::Projects,
            content(AppId::Projects, &renders),
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindow]);
        assert_eq!(session.phase(), SessionPhase::Normal);
        assert_eq!(session.generation, generation);
        assert_eq!(
            session.active.as_ref().map(|active| &active.content),
            Some(&original)
        );
        assert_eq!(renders.get(), 0);
    }

    #[test]
    fn opening_other_app_while_minimized_replaces_and_resets_flags() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        open(&mut session, AppId::About, content(AppId::About, &renders));
        reduce_session(&mut session, SessionAction::MinimizeApp).expect("minimize");

        open(&mut session, AppId::Contact, content(AppId::Contact, &renders));
        assert_eq!(session.active_app_id(), Some(AppId::Contact));
        assert_eq!(session.phase(), SessionPhase::Normal);
        assert_eq!(session.generation, 2);
    }

    #[test]
    fn maximize_is_rejected_while_minimized() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        open(&mut session, AppId::Work, content(AppId::Work, &renders));
        reduce_session(&mut session, SessionAction::MinimizeApp).expect("minimize");
        let before = session.clone();

        let err = reduce_session(&mut session, SessionAction::ToggleMaximize)
            .expect_err("guarded transition");
        assert_eq!(err, SessionError::MaximizeWhileMinimized(AppId::Work));
        assert_eq!(session, before);
    }

    #[test]
    fn actions_without_active_app_are_rejected_or_ignored() {
        let mut session = AppSession::default();
        assert_eq!(
            reduce_session(&mut session, SessionAction::MinimizeApp),
            Err(SessionError::NoActiveApp)
        );
        assert_eq!(
            reduce_session(&mut session, SessionAction::ToggleMaximize),
            Err(SessionError::NoActiveApp)
        );
        assert_eq!(
            reduce_session(&mut session, SessionAction::CloseApp),
            Ok(Vec::new())
        );
        assert_eq!(session, AppSession::default());
    }

    #[test]
    fn close_is_idempotent() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        open(&mut session, AppId::Settings, content(AppId::Settings, &renders));
        reduce_session(&mut session, SessionAction::ToggleMaximize).expect("maximize");

        let effects = reduce_session(&mut session, SessionAction::CloseApp).expect("close");
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusLauncherTile(AppId::Settings)]
        );
        let after_first = session.clone();
        reduce_session(&mut session, SessionAction::CloseApp).expect("close again");

        assert_eq!(session, after_first);
        assert_eq!(session.phase(), SessionPhase::Closed);
        assert_exclusive(&session);
    }

    #[test]
    fn minimizing_maximized_window_keeps_flags_exclusive() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        open(&mut session, AppId::DinoGame, content(AppId::DinoGame, &renders));
        reduce_session(&mut session, SessionAction::ToggleMaximize).expect("maximize");
        assert_eq!(session.phase(), SessionPhase::Maximized);

        reduce_session(&mut session, SessionAction::MinimizeApp).expect("minimize");
        assert_exclusive(&session);
        open(&mut session, AppId::DinoGame, content(AppId::DinoGame, &renders));
        assert_eq!(session.phase(), SessionPhase::Normal);
    }

    #[test]
    fn toggle_maximize_round_trips() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        open(&mut session, AppId::About, content(AppId::About, &renders));

        reduce_session(&mut session, SessionAction::ToggleMaximize).expect("maximize");
        assert_eq!(session.phase(), SessionPhase::Maximized);
        reduce_session(&mut session, SessionAction::ToggleMaximize).expect("restore");
        assert_eq!(session.phase(), SessionPhase::Normal);
    }

    #[test]
    fn nested_open_from_app_starts_fresh_maximized_session() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        open(&mut session, AppId::Projects, content(AppId::Projects, &renders));
        let gallery_generation = session.generation;

        let browser = content(AppId::Projects, &renders);
        reduce_session(
            &mut session,
            SessionAction::OpenApp(
                OpenAppRequest::new(AppId::Projects, browser.clone())
                    .with_title("Project Browser")
                    .with_size_hint(SizeClass::Large)
                    .maximized(),
            ),
        )
        .expect("open browser");

        let active = session.active.as_ref().expect("active app");
        assert_eq!(active.content, browser);
        assert_eq!(active.size_class, SizeClass::Large);
        assert_eq!(active.title, "Project Browser");
        assert!(active.start_maximized);
        assert_eq!(session.phase(), SessionPhase::Maximized);
        assert_eq!(session.generation, gallery_generation + 1);
    }

    #[test]
    fn random_action_sequences_preserve_invariants() {
        let renders = Rc::new(Cell::new(0));
        let mut session = AppSession::default();
        let apps = AppId::ALL;
        let mut seed = 0x2545_f491_u32;

        for step in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let action = match seed % 4 {
                0 => {
                    let app_id = apps[(seed as usize / 4) % apps.len()];
                    SessionAction::OpenApp(OpenAppRequest::new(app_id, content(app_id, &renders)))
                }
                1 => SessionAction::CloseApp,
                2 => SessionAction::MinimizeApp,
                _ => SessionAction::ToggleMaximize,
            };
            let before = session.clone();
            if reduce_session(&mut session, action).is_err() {
                assert_eq!(session, before, "rejected step {step} mutated state");
            }
            assert_exclusive(&session);
        }
        assert_eq!(renders.get(), 0);
    }
}
