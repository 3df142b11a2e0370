//! Injizierbare ID-Vergabe für neue Linien.

use std::time::{SystemTime, UNIX_EPOCH};

/// Liefert eindeutige Linien-IDs.
pub trait LineIdSource {
    /// Nächste ID mit dem angegebenen Präfix (z.B. `"line"`).
    fn next_id(&mut self, prefix: &str) -> String;
}

impl<F> LineIdSource for F
where
    F: FnMut(&str) -> String,
{
    fn next_id(&mut self, prefix: &str) -> String {
        self(prefix)
    }
}

/// Fortlaufende IDs: `line-1`, `line-2`, …
#[derive(Debug, Clone, Default)]
pub struct SequentialLineIds {
    counter: u64,
}

impl SequentialLineIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineIdSource for SequentialLineIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}-{}", self.counter)
    }
}

/// Zeitbasierte IDs: `{prefix}-{unix millis}-{zähler}`.
#[derive(Debug, Clone, Default)]
pub struct ClockLineIds {
    counter: u64,
}

impl ClockLineIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineIdSource for ClockLineIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis());
        format!("{prefix}-{millis}-{}", self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialLineIds::new();
        assert_eq!(ids.next_id("line"), "line-1");
        assert_eq!(ids.next_id("line"), "line-2");
        assert_eq!(ids.next_id("draft"), "draft-3");
    }

    #[test]
    fn test_clock_ids_are_unique_and_prefixed() {
        let mut ids = ClockLineIds::new();
        let generated: HashSet<String> = (0..20).map(|_| ids.next_id("line")).collect();
        assert_eq!(generated.len(), 20);
        assert!(generated.iter().all(|id| id.starts_with("line-")));
        assert!(ids.next_id("draft").starts_with("draft-"));
    }

    #[test]
    fn test_closure_is_a_source() {
        let mut calls = 0;
        let mut source = |prefix: &str| {
            calls += 1;
            format!("{prefix}/{calls}")
        };
        assert_eq!(source.next_id("x"), "x/1");
        assert_eq!(LineIdSource::next_id(&mut source, "y"), "y/2");
    }
}
