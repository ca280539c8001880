use serde::Serialize;

use dclone_core::status::StatusRow;

/// Status row with its relative age, for `status --json`.
#[derive(Serialize)]
pub struct StatusRowJson {
    #[serde(flatten)]
    pub row: StatusRow,
    pub updated: String,
}

#[derive(Serialize)]
pub struct ServerEntryJson {
    pub key: String,
    pub label: String,
    pub tracked: bool,
}

#[derive(Serialize)]
pub struct ServersJson {
    pub notifications_enabled: bool,
    pub servers: Vec<ServerEntryJson>,
}
