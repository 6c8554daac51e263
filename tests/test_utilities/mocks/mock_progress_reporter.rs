use package_graph::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// One call received by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Message(String),
    Progress {
        current: usize,
        total: usize,
        package: Option<String>,
    },
    Warning(String),
    Error(String),
    Completion(String),
}

/// Mock ProgressReporter recording every call in order
///
/// Clones share the same log, so a test can keep one handle while the use
/// case owns the other.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Rc<RefCell<Vec<ReportedEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.events.borrow().clone()
    }

    /// Plain `report` messages
    pub fn messages(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportedEvent::Message(m) => Some(m.clone()),
            _ => None,
        })
    }

    /// Warning texts as passed to `report_warning`, without the console prefix
    pub fn warnings(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportedEvent::Warning(w) => Some(w.clone()),
            _ => None,
        })
    }

    pub fn completions(&self) -> Vec<String> {
        self.collect(|event| match event {
            ReportedEvent::Completion(c) => Some(c.clone()),
            _ => None,
        })
    }

    /// The last progress tick, as `(current, total, package)`
    pub fn last_progress(&self) -> Option<(usize, usize, Option<String>)> {
        self.collect(|event| match event {
            ReportedEvent::Progress {
                current,
                total,
                package,
            } => Some((*current, *total, package.clone())),
            _ => None,
        })
        .pop()
    }

    fn collect<T>(&self, pick: impl Fn(&ReportedEvent) -> Option<T>) -> Vec<T> {
        self.events.borrow().iter().filter_map(pick).collect()
    }

    fn push(&self, event: ReportedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(ReportedEvent::Message(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(ReportedEvent::Progress {
            current,
            total,
            package: message.map(str::to_string),
        });
    }

    fn report_error(&self, message: &str) {
        self.push(ReportedEvent::Error(message.to_string()));
    }

    fn report_warning(&self, message: &str) {
        self.push(ReportedEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(ReportedEvent::Completion(message.to_string()));
    }
}
