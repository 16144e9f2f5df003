//! External URL host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use crate::HostError;

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for opening links outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens `url` in a new browsing context.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// External URL service for hosts without navigation support.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), HostError>> {
        Box::pin(async { Err(HostError::Unavailable("external navigation")) })
    }
}

#[derive(Debug, Clone, Default)]
/// External URL service that records every requested URL.
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingExternalUrlService {
    /// URLs requested so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}
