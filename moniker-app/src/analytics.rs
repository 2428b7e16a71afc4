use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use moniker_types::analytics::AnalyticsAction;

/// Fire-and-forget sink for analytics events. Implementations never fail the
/// caller; delivery problems are only logged.
pub trait AnalyticsLogger: Send + Sync {
    fn log(&self, action: AnalyticsAction);
}

/// Emits each action as a structured tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalytics;

impl AnalyticsLogger for TracingAnalytics {
    fn log(&self, action: AnalyticsAction) {
        tracing::info!(target: "moniker::analytics", action = %action, "analytics event");
    }
}

#[derive(Serialize)]
struct EventLine<'a> {
    action: &'a str,
    timestamp: String,
}

/// Appends each action to a file as one JSON object per line.
pub struct JsonLinesAnalytics {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonLinesAnalytics {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, action: AnalyticsAction) -> std::io::Result<()> {
        let line = serde_json::to_string(&EventLine {
            action: action.as_str(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        })?;

        let _guard = self
            .lock
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl AnalyticsLogger for JsonLinesAnalytics {
    fn log(&self, action: AnalyticsAction) {
        if let Err(e) = self.append(action) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to record analytics event"
            );
        }
    }
}

/// Forwards every action to each configured logger.
#[derive(Default, Clone)]
pub struct Analytics {
    loggers: Vec<Arc<dyn AnalyticsLogger>>,
}

impl Analytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, logger: Arc<dyn AnalyticsLogger>) -> Self {
        self.loggers.push(logger);
        self
    }
}

impl AnalyticsLogger for Analytics {
    fn log(&self, action: AnalyticsAction) {
        for logger in &self.loggers {
            logger.log(action);
        }
    }
}
