use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Single timer slot. Arming it aborts whatever was pending, so only the
/// last task of a burst ever runs.
#[derive(Debug, Default)]
pub struct Debouncer {
    slot: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut slot = self.slot();
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = Some(tokio::spawn(async move {
            sleep(delay).await;
            task();
        }));
    }

    pub fn cancel(&self) {
        if let Some(previous) = self.slot().take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn only_last_task_runs() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let last = Arc::new(AtomicUsize::new(0));

        for i in 1..=3 {
            let runs = Arc::clone(&runs);
            let last = Arc::clone(&last);
            debouncer.schedule(Duration::from_millis(1000), move || {
                runs.fetch_add(1, Ordering::SeqCst);
                last.store(i, Ordering::SeqCst);
            });
            sleep(Duration::from_millis(400)).await;
        }
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(2000)).await;
        assert_eq!(1, runs.load(Ordering::SeqCst));
        assert_eq!(3, last.load(Ordering::SeqCst));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_quiet_period() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let r = Arc::clone(&runs);
        debouncer.schedule(Duration::from_millis(1000), move || {
            r.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(999)).await;
        assert_eq!(0, runs.load(Ordering::SeqCst));
        sleep(Duration::from_millis(2)).await;
        assert_eq!(1, runs.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_task() {
        let debouncer = Debouncer::new();
        let runs = Arc::new(AtomicUsize::new(0));
        let r = Arc::clone(&runs);
        debouncer.schedule(Duration::from_millis(1000), move || {
            r.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        sleep(Duration::from_millis(1500)).await;
        assert_eq!(0, runs.load(Ordering::SeqCst));
        assert!(!debouncer.is_pending());
    }
}
