//! UI task queue: the single context tree mutation runs on.
//!
//! The tree, registry and style tables have no locking. Work that originates
//! elsewhere (timers, other threads) is posted here as a [`UiTask`] and runs
//! when the owner of the [`Framework`] drains the queue.
//!
//! Every task is stamped with the queue's epoch when it is posted or
//! scheduled. [`UiQueue::invalidate`] starts a new epoch, so tasks from before
//! it are dropped on arrival, including timers that are still sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

use crate::error::FrameworkError;
use crate::framework::Framework;

/// A unit of work to run against the framework on the UI context.
pub type UiTask = Box<dyn FnOnce(&mut Framework) -> Result<(), FrameworkError> + Send>;

struct Envelope {
    epoch: u64,
    task: UiTask,
}

/// Receiving end, owned by the framework.
#[derive(Debug)]
pub struct UiQueue {
    epoch: Arc<AtomicU64>,
    sender: UnboundedSender<Envelope>,
    receiver: UnboundedReceiver<Envelope>,
}

impl UiQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            epoch: Arc::new(AtomicU64::new(0)),
            sender,
            receiver,
        }
    }

    /// A cloneable handle for posting tasks.
    pub fn handle(&self) -> UiHandle {
        UiHandle {
            epoch: Arc::clone(&self.epoch),
            sender: self.sender.clone(),
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Start a new epoch. Queued tasks are discarded now; tasks posted or
    /// scheduled earlier are discarded when they arrive. Returns how many
    /// queued tasks were discarded.
    pub fn invalidate(&mut self) -> usize {
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        let mut dropped = 0;
        while self.receiver.try_recv().is_ok() {
            dropped += 1;
        }
        trace!(epoch, dropped, "ui queue invalidated");
        dropped
    }

    /// The next ready task of the current epoch, without waiting.
    pub fn try_next(&mut self) -> Option<UiTask> {
        loop {
            let envelope = self.receiver.try_recv().ok()?;
            if let Some(task) = self.accept(envelope) {
                return Some(task);
            }
        }
    }

    /// Wait for the next task of the current epoch.
    pub async fn next(&mut self) -> UiTask {
        loop {
            // The queue keeps a sender of its own, so the channel never closes.
            let Some(envelope) = self.receiver.recv().await else {
                return std::future::pending().await;
            };
            if let Some(task) = self.accept(envelope) {
                return task;
            }
        }
    }

    fn accept(&self, envelope: Envelope) -> Option<UiTask> {
        if envelope.epoch == self.epoch() {
            Some(envelope.task)
        } else {
            trace!(epoch = envelope.epoch, "stale ui task dropped");
            None
        }
    }
}

impl Default for UiQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Posts tasks onto the UI queue from any thread.
#[derive(Debug, Clone)]
pub struct UiHandle {
    epoch: Arc<AtomicU64>,
    sender: UnboundedSender<Envelope>,
}

impl UiHandle {
    fn envelope(&self, task: UiTask) -> Envelope {
        Envelope {
            epoch: self.epoch.load(Ordering::Acquire),
            task,
        }
    }

    /// Queue `task`. Returns `false` if the queue is gone.
    pub fn post<F>(&self, task: F) -> bool
    where
        F: FnOnce(&mut Framework) -> Result<(), FrameworkError> + Send + 'static,
    {
        self.sender.send(self.envelope(Box::new(task))).is_ok()
    }

    /// Queue `task` once `delay` has passed. The task belongs to the epoch
    /// current at scheduling time.
    ///
    /// Inside a tokio runtime the wait is a tokio timer (so paused-clock tests
    /// control it); otherwise a plain thread sleeps.
    pub fn post_after<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce(&mut Framework) -> Result<(), FrameworkError> + Send + 'static,
    {
        let sender = self.sender.clone();
        let envelope = self.envelope(Box::new(task));
        trace!(delay_ms = delay.as_millis() as u64, epoch = envelope.epoch, "scheduling ui task");
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = sender.send(envelope);
                });
            }
            Err(_) => {
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    let _ = sender.send(envelope);
                });
            }
        }
    }
}
