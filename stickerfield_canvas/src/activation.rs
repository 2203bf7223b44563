// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where double-activated stickers go.

use core::fmt;

/// Host callback receiving the path of a double-activated sticker.
pub type ActivationHandler = Box<dyn FnMut(&str)>;

/// The sticker shown when no activation handler is installed.
///
/// Holds at most one path; a newer activation replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FallbackPreview {
    path: Option<String>,
}

impl FallbackPreview {
    /// Shows `path`.
    pub fn show(&mut self, path: &str) {
        self.path = Some(path.to_owned());
    }

    /// The path on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Closes the preview, returning what it showed.
    pub fn dismiss(&mut self) -> Option<String> {
        self.path.take()
    }
}

/// Routes activations to the host handler, or to the fallback preview.
#[derive(Default)]
pub(crate) struct Activation {
    handler: Option<ActivationHandler>,
    pub(crate) fallback: FallbackPreview,
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("handler", &self.handler.is_some())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl Activation {
    pub(crate) fn set_handler(&mut self, handler: Option<ActivationHandler>) {
        self.handler = handler;
    }

    pub(crate) fn activate(&mut self, path: &str) {
        match &mut self.handler {
            Some(handler) => handler(path),
            None => {
                tracing::debug!(path, "no activation handler, showing fallback preview");
                self.fallback.show(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Activation;

    #[test]
    fn fallback_until_handler_is_set() {
        let mut activation = Activation::default();
        activation.activate("/s/a.png");
        activation.activate("/s/b.png");
        assert_eq!(activation.fallback.current(), Some("/s/b.png"));
        assert_eq!(activation.fallback.dismiss().as_deref(), Some("/s/b.png"));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        activation.set_handler(Some(Box::new(move |path: &str| {
            log.borrow_mut().push(path.to_owned());
        })));
        activation.activate("/s/c.png");
        assert_eq!(*seen.borrow(), ["/s/c.png"]);
        assert_eq!(activation.fallback.current(), None);
    }
}
