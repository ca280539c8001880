//! Last-observed progress per server, held for the lifetime of the process.

use std::collections::HashMap;

use crate::servers::{Progress, ServerKey, ServerSnapshot};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressBaseline {
    values: HashMap<ServerKey, Progress>,
}

impl ProgressBaseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every well-formed row of `batch` without producing events.
    ///
    /// Malformed rows are skipped. Returns the number of rows recorded.
    pub fn seed(&mut self, batch: &[ServerSnapshot]) -> usize {
        let mut seeded = 0;
        for snapshot in batch {
            match snapshot.progress.parse() {
                Ok(progress) => {
                    self.values.insert(snapshot.key(), progress);
                    seeded += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        event = "core.baseline.seed_entry_skipped",
                        server = %snapshot.key(),
                        error = %e,
                    );
                }
            }
        }
        tracing::debug!(event = "core.baseline.seed_completed", seeded);
        seeded
    }

    pub fn get(&self, key: &ServerKey) -> Option<Progress> {
        self.values.get(key).copied()
    }

    /// Set the last-observed value, returning the previous one.
    pub fn record(&mut self, key: ServerKey, progress: Progress) -> Option<Progress> {
        self.values.insert(key, progress)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servers::{Core, Ladder, Region, Server};

    #[test]
    fn test_new_is_empty() {
        let baseline = ProgressBaseline::new();
        assert!(baseline.is_empty());
        let key = Server::new(Region::Asia, Ladder::Ladder, Core::Softcore).key();
        assert_eq!(baseline.get(&key), None);
    }

    #[test]
    fn test_seed_skips_malformed_rows() {
        let a = Server::new(Region::Americas, Ladder::Ladder, Core::Hardcore);
        let b = Server::new(Region::Europe, Ladder::Ladder, Core::Hardcore);
        let c = Server::new(Region::Asia, Ladder::Ladder, Core::Hardcore);
        let batch = vec![
            ServerSnapshot::new(a, "3", 0),
            ServerSnapshot::new(b, "abc", 0),
            ServerSnapshot::new(c, 9, 0),
        ];

        let mut baseline = ProgressBaseline::new();
        assert_eq!(baseline.seed(&batch), 1);
        assert_eq!(baseline.len(), 1);
        assert_eq!(baseline.get(&a.key()), Progress::new(3).ok());
        assert_eq!(baseline.get(&b.key()), None);
    }

    #[test]
    fn test_record_returns_previous() {
        let key = Server::new(Region::Europe, Ladder::NonLadder, Core::Softcore).key();
        let mut baseline = ProgressBaseline::new();
        assert_eq!(baseline.record(key.clone(), Progress::new(5).unwrap()), None);
        assert_eq!(
            baseline.record(key.clone(), Progress::ZERO),
            Some(Progress::new(5).unwrap())
        );
        assert_eq!(baseline.get(&key), Some(Progress::ZERO));
    }
}
