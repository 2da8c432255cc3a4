//! Explicit cancellation for view-triggered requests. A view creates one
//! token per mount, builds its client handle with it, and cancels it on
//! cleanup; the HTTP layer races every send against the token so results
//! of abandoned requests are never delivered.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{AbortHandle, AbortRegistration};

#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    cancelled: Cell<bool>,
    handles: RefCell<Vec<AbortHandle>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aborts every in-flight request tied to this token. Idempotent;
    /// requests started afterwards abort before they are sent.
    pub fn cancel(&self) {
        self.inner.cancelled.set(true);
        for handle in self.inner.handles.borrow_mut().drain(..) {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Registration for a single send, pre-aborted when the token has
    /// already been cancelled.
    pub(crate) fn register(&self) -> AbortRegistration {
        let (handle, registration) = AbortHandle::new_pair();
        if self.is_cancelled() {
            handle.abort();
        } else {
            self.inner.handles.borrow_mut().push(handle);
        }
        registration
    }
}

impl std::fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
