//! Status view helpers: filtering a batch to one core/ladder selection,
//! ordering it for display, and relative timestamps.

use serde::Serialize;

use crate::servers::{Core, Ladder, MAX_PROGRESS, Progress, Region, ServerKey, ServerSnapshot};

/// One display row of the status view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub server_key: ServerKey,
    pub region: Region,
    pub ladder: Ladder,
    pub core: Core,
    /// `None` when the API sent an unusable value.
    pub progress: Option<Progress>,
    pub observed_at: i64,
}

impl StatusRow {
    pub fn from_snapshot(snapshot: &ServerSnapshot) -> Self {
        Self {
            server_key: snapshot.key(),
            region: snapshot.region,
            ladder: snapshot.ladder,
            core: snapshot.core,
            progress: snapshot.progress.parse().ok(),
            observed_at: snapshot.observed_at,
        }
    }

    /// `[n/6]`, or `[?/6]` for an unusable value.
    pub fn progress_label(&self) -> String {
        match self.progress {
            Some(p) => p.to_string(),
            None => format!("[?/{}]", MAX_PROGRESS),
        }
    }
}

/// Rows matching `core` and `ladder`, highest progress first, then by region
/// name. Rows with unusable progress sort last.
pub fn filter_view(batch: &[ServerSnapshot], core: Core, ladder: Ladder) -> Vec<StatusRow> {
    let mut rows: Vec<StatusRow> = batch
        .iter()
        .filter(|s| s.core == core && s.ladder == ladder)
        .map(StatusRow::from_snapshot)
        .collect();
    sort_rows(&mut rows);
    rows
}

/// Every row, ordered as [`filter_view`] orders a single selection.
pub fn all_rows(batch: &[ServerSnapshot]) -> Vec<StatusRow> {
    let mut rows: Vec<StatusRow> = batch.iter().map(StatusRow::from_snapshot).collect();
    sort_rows(&mut rows);
    rows
}

fn sort_rows(rows: &mut [StatusRow]) {
    rows.sort_by(|a, b| {
        b.progress
            .cmp(&a.progress)
            .then_with(|| a.region.name().cmp(b.region.name()))
    });
}

const UNITS: [(i64, &str); 5] = [
    (31_536_000, "years"),
    (2_592_000, "months"),
    (86_400, "days"),
    (3_600, "hours"),
    (60, "minutes"),
];

/// Relative age of `observed_at` at `now`, both in epoch seconds.
///
/// A unit is used only once its count exceeds one, so 90 seconds reads
/// "90 seconds ago" and 150 seconds "2 minutes ago".
pub fn time_ago(observed_at: i64, now: i64) -> String {
    let seconds = now - observed_at;
    for (unit_secs, unit) in UNITS {
        let count = seconds / unit_secs;
        if count > 1 {
            return format!("{} {} ago", count, unit);
        }
    }
    format!("{} seconds ago", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servers::{RawProgress, Server};

    fn snap(region: Region, ladder: Ladder, core: Core, progress: impl Into<RawProgress>) -> ServerSnapshot {
        ServerSnapshot::new(Server::new(region, ladder, core), progress, 100)
    }

    #[test]
    fn filter_view_selects_and_sorts() {
        let batch = vec![
            snap(Region::Asia, Ladder::Ladder, Core::Softcore, "2"),
            snap(Region::Americas, Ladder::Ladder, Core::Softcore, "2"),
            snap(Region::Europe, Ladder::Ladder, Core::Softcore, "5"),
            snap(Region::Europe, Ladder::Ladder, Core::Hardcore, "6"),
            snap(Region::Europe, Ladder::NonLadder, Core::Softcore, "6"),
        ];
        let rows = filter_view(&batch, Core::Softcore, Ladder::Ladder);
        let regions: Vec<Region> = rows.iter().map(|r| r.region).collect();
        assert_eq!(regions, vec![Region::Europe, Region::Americas, Region::Asia]);
    }

    #[test]
    fn malformed_progress_sorts_last_and_renders_unknown() {
        let batch = vec![
            snap(Region::Americas, Ladder::Ladder, Core::Softcore, "abc"),
            snap(Region::Asia, Ladder::Ladder, Core::Softcore, "0"),
        ];
        let rows = filter_view(&batch, Core::Softcore, Ladder::Ladder);
        assert_eq!(rows[0].region, Region::Asia);
        assert_eq!(rows[0].progress_label(), "[0/6]");
        assert_eq!(rows[1].progress_label(), "[?/6]");
    }

    #[test]
    fn all_rows_keeps_everything() {
        let batch: Vec<ServerSnapshot> = Server::all()
            .into_iter()
            .map(|s| ServerSnapshot::new(s, "1", 0))
            .collect();
        assert_eq!(all_rows(&batch).len(), 12);
    }

    #[test]
    fn time_ago_unit_thresholds() {
        assert_eq!(time_ago(0, 5), "5 seconds ago");
        assert_eq!(time_ago(0, 119), "119 seconds ago");
        assert_eq!(time_ago(0, 120), "2 minutes ago");
        assert_eq!(time_ago(0, 7_199), "119 minutes ago");
        assert_eq!(time_ago(0, 7_200), "2 hours ago");
        assert_eq!(time_ago(0, 2 * 86_400), "2 days ago");
        assert_eq!(time_ago(0, 3 * 2_592_000), "3 months ago");
        assert_eq!(time_ago(0, 2 * 31_536_000), "2 years ago");
    }

    #[test]
    fn time_ago_in_the_future_is_negative_seconds() {
        assert_eq!(time_ago(10, 0), "-10 seconds ago");
    }
}
