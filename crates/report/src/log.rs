//! Human-readable account of an export run.

use hanzi_analysis::StopReason;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Analysed {
        book: String,
        total_hanzi: usize,
        unique_hanzi: usize,
    },
    /// The book could not be read or analysed; the rest of the run went on.
    Failed { book: String, reason: String },
    Learning {
        book: String,
        selected: usize,
        target: u8,
        coverage: f64,
        reason: StopReason,
    },
    /// An export was not produced because its preconditions were not met.
    Skipped { export: &'static str, reason: String },
    Written { path: PathBuf, rows: usize },
    WriteFailed { path: PathBuf, reason: String },
}
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analysed {
                book,
                total_hanzi,
                unique_hanzi,
            } => write!(f, "{book}: {total_hanzi} hanzi, {unique_hanzi} unique"),
            Self::Failed { book, reason } => write!(f, "{book}: failed, {reason}"),
            Self::Learning {
                book,
                selected,
                target,
                coverage,
                reason,
            } => {
                write!(f, "{book}: {selected} hanzi to learn, {coverage:.2}% coverage ")?;
                match reason {
                    StopReason::TargetReached => write!(f, "(target {target}% reached)"),
                    _ => write!(f, "(target {target}% not reached, {reason})"),
                }
            },
            Self::Skipped { export, reason } => write!(f, "{export}: skipped, {reason}"),
            Self::Written { path, rows } => write!(f, "wrote {} ({rows} rows)", path.display()),
            Self::WriteFailed { path, reason } => write!(f, "could not write {}: {reason}", path.display()),
        }
    }
}

/// Ordered list of [`Event`]s, rendered one `- ` line each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunLog {
    events: Vec<Event>,
}
impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Books analysed successfully.
    pub fn succeeded(&self) -> usize {
        self.events.iter().filter(|event| matches!(event, Event::Analysed { .. })).count()
    }

    /// Books that could not be read or analysed.
    pub fn failed(&self) -> usize {
        self.events.iter().filter(|event| matches!(event, Event::Failed { .. })).count()
    }

    pub fn write_failures(&self) -> usize {
        self.events.iter().filter(|event| matches!(event, Event::WriteFailed { .. })).count()
    }
}
impl fmt::Display for RunLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "- {event}")?;
        }
        Ok(())
    }
}
