//! Domain types for tracked servers and their progress snapshots.
//!
//! Raw wire records from the status API live in `fetch::decode`; these are
//! our own types, decoupled from the API's string codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::EntryError;

/// Highest progress stage the world boss can reach before it spawns.
pub const MAX_PROGRESS: u8 = 6;

/// Game region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Americas,
    Europe,
    Asia,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Americas, Region::Europe, Region::Asia];

    /// Map the API's region code: `"1"` Americas, `"2"` Europe, anything else Asia.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => Self::Americas,
            "2" => Self::Europe,
            _ => Self::Asia,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Americas => "Americas",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
        }
    }
}

/// Ladder season variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ladder {
    Ladder,
    NonLadder,
}

impl Ladder {
    pub const ALL: [Ladder; 2] = [Ladder::Ladder, Ladder::NonLadder];

    /// Map the API's ladder code: `"1"` Ladder, anything else Non-Ladder.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => Self::Ladder,
            _ => Self::NonLadder,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ladder => "Ladder",
            Self::NonLadder => "Non-Ladder",
        }
    }
}

/// Hardcore or softcore characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Core {
    Softcore,
    Hardcore,
}

impl Core {
    pub const ALL: [Core; 2] = [Core::Hardcore, Core::Softcore];

    /// Map the API's `hc` code: `"1"` Hardcore, anything else Softcore.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => Self::Hardcore,
            _ => Self::Softcore,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Softcore => "Softcore",
            Self::Hardcore => "Hardcore",
        }
    }
}

macro_rules! impl_display_and_parse {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            /// Case-insensitive, accepts the display name with or without hyphens.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase().replace('-', "");
                Self::ALL
                    .into_iter()
                    .find(|v| v.name().to_lowercase().replace('-', "") == wanted)
                    .ok_or_else(|| {
                        let valid: Vec<&str> = Self::ALL.iter().map(|v| v.name()).collect();
                        format!("unknown value '{}', expected one of: {}", s, valid.join(", "))
                    })
            }
        }
    };
}

impl_display_and_parse!(Region);
impl_display_and_parse!(Ladder);
impl_display_and_parse!(Core);

/// Identity of a tracked server: one region/ladder/core triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Server {
    pub region: Region,
    pub ladder: Ladder,
    pub core: Core,
}

impl Server {
    pub fn new(region: Region, ladder: Ladder, core: Core) -> Self {
        Self {
            region,
            ladder,
            core,
        }
    }

    /// All 12 servers, in catalog order (region, then ladder, then hardcore first).
    pub fn all() -> Vec<Server> {
        let mut servers = Vec::with_capacity(12);
        for region in Region::ALL {
            for ladder in Ladder::ALL {
                for core in Core::ALL {
                    servers.push(Server::new(region, ladder, core));
                }
            }
        }
        servers
    }

    pub fn key(&self) -> ServerKey {
        ServerKey::from(*self)
    }

    /// Human label, e.g. "Americas Non-Ladder Hardcore".
    pub fn label(&self) -> String {
        format!(
            "{} {} {}",
            self.region.name(),
            self.ladder.name(),
            self.core.name()
        )
    }
}

/// String identity of a [`Server`], used as the map key for preferences and
/// the progress baseline.
///
/// Lower-cased, ladder hyphen removed: `americas-nonladder-hardcore`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerKey(String);

impl ServerKey {
    /// Parse a user-supplied key, accepting only the 12 catalog keys.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Server::all()
            .into_iter()
            .map(|server| server.key())
            .find(|key| key.0 == wanted)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The server this key identifies, if it is a catalog key.
    pub fn server(&self) -> Option<Server> {
        Server::all().into_iter().find(|s| s.key() == *self)
    }
}

impl From<Server> for ServerKey {
    fn from(server: Server) -> Self {
        Self(format!(
            "{}-{}-{}",
            server.region.name().to_lowercase(),
            server.ladder.name().to_lowercase().replace('-', ""),
            server.core.name().to_lowercase()
        ))
    }
}

impl fmt::Display for ServerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated progress stage in `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Progress = Progress(0);

    pub fn new(value: i64) -> Result<Self, EntryError> {
        match u8::try_from(value) {
            Ok(v) if v <= MAX_PROGRESS => Ok(Self(v)),
            _ => Err(EntryError::ProgressOutOfRange { value }),
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Progress {
    type Error = EntryError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Renders as the `[n/6]` fraction shown to users.
impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}]", self.0, MAX_PROGRESS)
    }
}

/// Progress exactly as received, validated lazily by the detector.
///
/// The API sends progress as a string; some mirrors send a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawProgress {
    Number(i64),
    Text(String),
}

impl RawProgress {
    pub fn parse(&self) -> Result<Progress, EntryError> {
        match self {
            Self::Number(n) => Progress::new(*n),
            Self::Text(s) => {
                let n: i64 = s
                    .trim()
                    .parse()
                    .map_err(|_| EntryError::ProgressUnparsable { value: s.clone() })?;
                Progress::new(n)
            }
        }
    }
}

impl From<i64> for RawProgress {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RawProgress {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// One row of fetched status data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    pub region: Region,
    pub ladder: Ladder,
    pub core: Core,
    pub progress: RawProgress,
    /// Seconds since the Unix epoch.
    pub observed_at: i64,
}

impl ServerSnapshot {
    pub fn new(server: Server, progress: impl Into<RawProgress>, observed_at: i64) -> Self {
        Self {
            region: server.region,
            ladder: server.ladder,
            core: server.core,
            progress: progress.into(),
            observed_at,
        }
    }

    pub fn server(&self) -> Server {
        Server::new(self.region, self.ladder, self.core)
    }

    pub fn key(&self) -> ServerKey {
        self.server().key()
    }
}
