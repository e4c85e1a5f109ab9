//! Storage for warnings raised while resolving

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use streambind_core::LogLevel;

/// A captured warning or error event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEvent {
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

/// Global warning log
static WARNING_LOG: OnceCell<WarningLog> = OnceCell::new();

/// Collected warning and error events, in arrival order
pub struct WarningLog {
    events: Mutex<Vec<CapturedEvent>>,
}

impl WarningLog {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Get the global warning log instance
    pub fn global() -> &'static WarningLog {
        WARNING_LOG.get_or_init(WarningLog::new)
    }

    pub fn record(&self, event: CapturedEvent) {
        self.events.lock().push(event);
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<CapturedEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl Default for WarningLog {
    fn default() -> Self {
        Self::new()
    }
}
