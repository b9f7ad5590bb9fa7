//! Scoped pointer-listener subscription.
//!
//! # Responsibility
//! - Attach the document-level pointer listener once at mount.
//! - Detach it exactly once at teardown, including on early returns.
//!
//! # Invariants
//! - `detach` is never called for a source whose `attach` failed.
//! - Dropping the guard always releases the listener.

use log::{info, warn};

/// Frontend hook that delivers pointer-down events while attached.
pub trait PointerSource {
    type Error;

    fn attach(&mut self) -> Result<(), Self::Error>;

    /// Releases the listener. Must not panic.
    fn detach(&mut self);
}

/// RAII guard holding an attached `PointerSource`.
#[derive(Debug)]
pub struct PointerSubscription<S: PointerSource> {
    source: S,
}

impl<S: PointerSource> PointerSubscription<S> {
    /// Attaches `source` and returns a guard that detaches it on drop.
    ///
    /// # Errors
    /// - Propagates the source's attach error; nothing is held in that case.
    pub fn acquire(mut source: S) -> Result<Self, S::Error> {
        match source.attach() {
            Ok(()) => {
                info!("event=pointer_subscribe module=subscription status=ok");
                Ok(Self { source })
            }
            Err(err) => {
                warn!("event=pointer_subscribe module=subscription status=error");
                Err(err)
            }
        }
    }
}

impl<S: PointerSource> Drop for PointerSubscription<S> {
    fn drop(&mut self) {
        self.source.detach();
        info!("event=pointer_unsubscribe module=subscription status=ok");
    }
}
