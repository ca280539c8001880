//! Wire format of the status API and mapping to [`ServerSnapshot`].

use serde::Deserialize;

use super::errors::FetchError;
use crate::servers::{
    Core, EntryError, Ladder, RawProgress, Region, Server, ServerSnapshot,
};

/// One record as the API sends it. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawStatusRecord {
    region: CodeValue,
    ladder: CodeValue,
    hc: CodeValue,
    progress: RawProgress,
    #[serde(alias = "timestamp")]
    timestamped: Option<RawProgress>,
}

/// Codes arrive as strings ("1") but tolerate bare integers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CodeValue {
    Number(i64),
    Text(String),
}

impl CodeValue {
    fn as_code(&self) -> String {
        match self {
            CodeValue::Number(n) => n.to_string(),
            CodeValue::Text(s) => s.clone(),
        }
    }
}

fn parse_timestamp(raw: Option<&RawProgress>) -> Result<i64, EntryError> {
    match raw {
        Some(RawProgress::Number(n)) => Ok(*n),
        Some(RawProgress::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| EntryError::TimestampUnparsable { value: s.clone() }),
        None => Err(EntryError::TimestampUnparsable {
            value: String::new(),
        }),
    }
}

/// Decode a response body into snapshots.
///
/// A body that is not a JSON array is a [`FetchError::Decode`]. Each element
/// is decoded on its own: an element that does not fit the record shape, or
/// whose timestamp is unusable, is dropped and the rest of the batch is kept.
/// Progress is left raw for the detector to validate.
pub fn decode_batch(body: &str) -> Result<Vec<ServerSnapshot>, FetchError> {
    let rows: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })?;

    let mut snapshots = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let record = match RawStatusRecord::deserialize(row) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(
                    event = "core.fetch.entry_skipped",
                    row = index,
                    error = %e,
                );
                continue;
            }
        };

        let server = Server::new(
            Region::from_code(&record.region.as_code()),
            Ladder::from_code(&record.ladder.as_code()),
            Core::from_code(&record.hc.as_code()),
        );
        match parse_timestamp(record.timestamped.as_ref()) {
            Ok(observed_at) => {
                snapshots.push(ServerSnapshot::new(server, record.progress, observed_at));
            }
            Err(e) => {
                tracing::warn!(
                    event = "core.fetch.entry_skipped",
                    row = index,
                    server = %server.key(),
                    error = %e,
                );
            }
        }
    }
    Ok(snapshots)
}
