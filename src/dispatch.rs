//! UI-thread task queue
//!
//! Async completions (license activation, any future worker results) must not
//! touch the browser view from their worker thread. They post a closure onto
//! this queue instead; the UI-owning thread drains it inside its scheduling
//! loop via [`UiDispatcher::pump`].

use crossbeam_channel::{Receiver, Sender, TryRecvError};

/// A unit of work to run on the UI-owning thread.
pub type UiTask = Box<dyn FnOnce() + Send>;

/// Sending half handed to worker contexts.
#[derive(Clone)]
pub struct UiHandle {
    tx: Sender<UiTask>,
}

impl UiHandle {
    /// Enqueue a task for the next UI pump. Silently dropped if the
    /// dispatcher is gone (editor torn down).
    pub fn post<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.tx.send(Box::new(task)).is_err() {
            log::debug!("ui task dropped: dispatcher closed");
        }
    }
}

/// The queue itself; owned by the editor, pumped on the UI thread.
pub struct UiDispatcher {
    tx: Sender<UiTask>,
    rx: Receiver<UiTask>,
}

impl UiDispatcher {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    /// A cloneable sender for worker contexts.
    pub fn handle(&self) -> UiHandle {
        UiHandle {
            tx: self.tx.clone(),
        }
    }

    /// Run every queued task; returns how many ran.
    ///
    /// Must only be called from the UI-owning thread.
    pub fn pump(&self) -> usize {
        let mut ran = 0;
        loop {
            match self.rx.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        ran
    }
}

impl Default for UiDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn pump_runs_posted_tasks_in_order() {
        let dispatcher = UiDispatcher::new();
        let handle = dispatcher.handle();
        let seen = Arc::new(AtomicUsize::new(0));

        for i in 0..4 {
            let seen = seen.clone();
            handle.post(move || {
                assert_eq!(seen.fetch_add(1, Ordering::SeqCst), i);
            });
        }

        assert_eq!(dispatcher.pump(), 4);
        assert_eq!(seen.load(Ordering::SeqCst), 4);
        assert_eq!(dispatcher.pump(), 0);
    }

    #[test]
    fn tasks_posted_from_worker_thread_arrive() {
        let dispatcher = UiDispatcher::new();
        let handle = dispatcher.handle();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen2 = seen.clone();
        let worker = std::thread::spawn(move || {
            handle.post(move || {
                seen2.fetch_add(1, Ordering::SeqCst);
            });
        });
        worker.join().unwrap();

        assert_eq!(dispatcher.pump(), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
