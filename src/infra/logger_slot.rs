use crate::domain_port::{ExternalLogger, ExternalLoggerLookup};
use crate::logger::*;
use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

struct Registration {
    logger: Arc<dyn ExternalLogger>,
}

/// Watched reference to the current external log service.
///
/// The environment calls `register` and `unregister` as services come and
/// go. Loggers never read the slot directly; each one gets its own
/// [`LoggerTracker`] so opening and closing stay per logger.
pub struct LoggerSlot {
    current: ArcSwapOption<Registration>,
    open_trackers: AtomicUsize,
}

impl fmt::Debug for LoggerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerSlot")
            .field("registered", &self.current.load().is_some())
            .field("open_trackers", &self.open_trackers())
            .finish()
    }
}

impl Default for LoggerSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerSlot {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
            open_trackers: AtomicUsize::new(0),
        }
    }

    /// Makes `logger` the active service, replacing any previous one.
    pub fn register(&self, logger: Arc<dyn ExternalLogger>) {
        let previous = self.current.swap(Some(Arc::new(Registration { logger })));
        debug!(replaced = previous.is_some(), "external log service registered");
    }

    pub fn unregister(&self) {
        if self.current.swap(None).is_some() {
            debug!("external log service unregistered");
        }
    }

    pub fn current(&self) -> Option<Arc<dyn ExternalLogger>> {
        self.current
            .load_full()
            .map(|registration| registration.logger.clone())
    }

    /// Number of trackers that are open right now.
    pub fn open_trackers(&self) -> usize {
        self.open_trackers.load(Ordering::Acquire)
    }

    /// A new, closed tracker over this slot.
    pub fn tracker(self: &Arc<Self>) -> LoggerTracker {
        LoggerTracker {
            slot: self.clone(),
            open: AtomicBool::new(false),
        }
    }
}

/// One logger's view of a [`LoggerSlot`]: sees the registered service
/// only between its own `open` and `close`.
pub struct LoggerTracker {
    slot: Arc<LoggerSlot>,
    open: AtomicBool,
}

impl fmt::Debug for LoggerTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerTracker")
            .field("open", &self.is_open())
            .finish()
    }
}

impl LoggerTracker {
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

impl ExternalLoggerLookup for LoggerTracker {
    fn open(&self) {
        if !self.open.swap(true, Ordering::AcqRel) {
            self.slot.open_trackers.fetch_add(1, Ordering::AcqRel);
        }
    }

    fn active_logger(&self) -> Option<Arc<dyn ExternalLogger>> {
        if !self.is_open() {
            return None;
        }
        self.slot.current()
    }

    fn close(&self) {
        if self.open.swap(false, Ordering::AcqRel) {
            self.slot.open_trackers.fetch_sub(1, Ordering::AcqRel);
        }
    }
}

impl Drop for LoggerTracker {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MemoryLogService;

    #[test]
    fn empty_slot_has_no_logger() {
        let slot = Arc::new(LoggerSlot::new());
        let tracker = slot.tracker();
        tracker.open();
        assert!(tracker.active_logger().is_none());
    }

    #[test]
    fn logger_visible_only_while_open() {
        let slot = Arc::new(LoggerSlot::new());
        let tracker = slot.tracker();
        slot.register(Arc::new(MemoryLogService::new()));
        assert!(tracker.active_logger().is_none());

        tracker.open();
        assert!(tracker.active_logger().is_some());

        tracker.close();
        assert!(tracker.active_logger().is_none());
    }

    #[test]
    fn closing_one_tracker_leaves_the_others_open() {
        let slot = Arc::new(LoggerSlot::new());
        slot.register(Arc::new(MemoryLogService::new()));
        let first = slot.tracker();
        let second = slot.tracker();
        first.open();
        second.open();
        assert_eq!(slot.open_trackers(), 2);

        first.close();
        first.close();
        assert_eq!(slot.open_trackers(), 1);
        assert!(first.active_logger().is_none());
        assert!(second.active_logger().is_some());
    }

    #[test]
    fn dropping_an_open_tracker_closes_it() {
        let slot = Arc::new(LoggerSlot::new());
        let tracker = slot.tracker();
        tracker.open();
        drop(tracker);
        assert_eq!(slot.open_trackers(), 0);
    }

    #[test]
    fn unregister_clears_the_slot() {
        let slot = Arc::new(LoggerSlot::new());
        let tracker = slot.tracker();
        tracker.open();
        slot.register(Arc::new(MemoryLogService::new()));
        slot.unregister();
        slot.unregister();
        assert!(tracker.active_logger().is_none());
        assert!(slot.current().is_none());
    }
}
