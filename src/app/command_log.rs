//! Verlauf ausgeführter Commands als Ringpuffer.
//!
//! Dient Diagnose und Tests; ist der Puffer voll, fällt jeweils der älteste
//! Eintrag heraus.

use std::collections::VecDeque;

use super::AppCommand;

/// Maximale Anzahl gemerkter Commands.
const CAPACITY: usize = 256;

#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merkt einen ausgeführten Command.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Alle gemerkten Commands, älteste zuerst.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_command_is_dropped_when_full() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::ReallocateAllLines);
        for _ in 1..CAPACITY {
            log.record(&AppCommand::ToggleSnapSize);
        }
        assert_eq!(log.len(), CAPACITY);
        assert!(matches!(
            log.entries().next(),
            Some(AppCommand::ReallocateAllLines)
        ));

        log.record(&AppCommand::DismissWarning);
        assert_eq!(log.len(), CAPACITY);
        assert!(log
            .entries()
            .all(|c| !matches!(c, AppCommand::ReallocateAllLines)));
        assert!(matches!(log.last(), Some(AppCommand::DismissWarning)));
    }
}
