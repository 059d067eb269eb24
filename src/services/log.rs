use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub target: Option<String>,
    pub event: String,
    pub details: Option<String>,
}

impl LogEntry {
    fn render(&self) -> String {
        let level = match self.level {
            LogLevel::Info => "INFO ",
            LogLevel::Error => "ERROR",
        };
        format!(
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            level,
            self.event,
            self.target.as_deref().unwrap_or("*"),
            self.details.as_deref().unwrap_or("")
        )
        .trim_end()
        .to_string()
    }
}

/// Append-only run history in `~/.wikibox/activity.log`.
pub struct ActivityLogger {
    log_path: PathBuf,
}

impl ActivityLogger {
    pub fn new() -> crate::Result<Self> {
        let user_dirs = directories::UserDirs::new().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine home directory",
            )
        })?;
        Self::at(user_dirs.home_dir().join(".wikibox"))
    }

    /// Log into `dir/activity.log`.
    pub fn at(dir: impl Into<PathBuf>) -> crate::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            log_path: dir.join("activity.log"),
        })
    }

    pub fn log(
        &self,
        level: LogLevel,
        target: Option<&str>,
        event: &str,
        details: Option<&str>,
    ) -> crate::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            target: target.map(|t| t.to_string()),
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", entry.render())?;
        Ok(())
    }

    pub fn info(&self, target: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
        self.log(LogLevel::Info, target, event, details)
    }

    pub fn error(&self, target: Option<&str>, event: &str, details: Option<&str>) -> crate::Result<()> {
        self.log(LogLevel::Error, target, event, details)
    }

    /// Matching lines, most recent first.
    pub fn read_logs(&self, target_filter: Option<&str>, errors_only: bool) -> crate::Result<Vec<String>> {
        if !self.log_path.exists() {
            return Ok(vec![]);
        }

        let reader = BufReader::new(fs::File::open(&self.log_path)?);
        let mut matching = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if errors_only && !line.contains(" ERROR ") {
                continue;
            }
            if let Some(target) = target_filter {
                if !line.contains(target) {
                    continue;
                }
            }
            matching.push(line);
        }

        matching.reverse();
        Ok(matching)
    }
}

/// Record an event in the default activity log; logging failures are ignored.
pub fn record(level: LogLevel, target: Option<&str>, event: &str, details: Option<&str>) {
    if let Ok(logger) = ActivityLogger::new() {
        let _ = logger.log(level, target, event, details);
    }
}
