//! The latch between the interrupt line and the driver.
//!
//! The interrupt context only ever gets an [`IrqHandle`], which can set the latch and wake a
//! waiting task. Reading and clearing stay with the [`PendingEvent`] owned by the driver.

use futures::future::Future;
use futures::task::{AtomicWaker, Context, Poll};
use std::pin::Pin;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::{Acquire, Release};
use std::sync::Arc;


#[derive(Debug)]
struct Inner {
    waker: AtomicWaker,
    set: AtomicBool,
}

/// "an unread event occurred"
#[derive(Debug)]
pub struct PendingEvent(Arc<Inner>);

impl PendingEvent {
    pub fn new() -> Self {
        Self(Arc::new(Inner {
            waker: AtomicWaker::new(),
            set: AtomicBool::new(false),
        }))
    }

    /// A producer handle for the interrupt callback
    pub fn handle(&self) -> IrqHandle {
        IrqHandle(self.0.clone())
    }

    pub fn is_set(&self) -> bool {
        self.0.set.load(Acquire)
    }

    pub fn reset(&self) {
        self.0.set.store(false, Release);
    }

    /// Resolves once the latch is set. Does not clear it.
    pub fn wait(&self) -> Wait<'_> {
        Wait { inner: &self.0 }
    }
}

impl Default for PendingEvent {
    fn default() -> Self {
        Self::new()
    }
}

/// Setter half of a [`PendingEvent`], safe to call from an interrupt callback (no bus access,
/// no allocation, no locking).
#[derive(Debug, Clone)]
pub struct IrqHandle(Arc<Inner>);

impl IrqHandle {
    pub fn signal(&self) {
        self.0.set.store(true, Release);
        self.0.waker.wake();
    }
}

pub struct Wait<'a> {
    inner: &'a Inner,
}

impl Future for Wait<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.inner.set.load(Acquire) {
            return Poll::Ready(());
        }

        self.inner.waker.register(cx.waker());

        // a signal between the first load and `register` only shows up here
        if self.inner.set.load(Acquire) {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}
