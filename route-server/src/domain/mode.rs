//! Transport mode types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode: {0:?}")]
pub struct InvalidMode(String);

/// A way of moving freight along a link.
///
/// `train` is accepted as a synonym for [`TransportMode::Rail`] when parsing,
/// since station catalogues tend to use both.
///
/// # Examples
///
/// ```
/// use route_server::domain::TransportMode;
///
/// assert_eq!(TransportMode::parse("air").unwrap(), TransportMode::Air);
/// assert_eq!(TransportMode::parse(" Sea ").unwrap(), TransportMode::Sea);
/// assert_eq!(TransportMode::parse("train").unwrap(), TransportMode::Rail);
/// assert!(TransportMode::parse("teleport").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Air,
    Sea,
    Land,
    #[serde(alias = "train")]
    Rail,
}

impl TransportMode {
    /// Every mode, in canonical order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Air,
        TransportMode::Sea,
        TransportMode::Land,
        TransportMode::Rail,
    ];

    /// Parse a mode name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        match s.trim().to_ascii_lowercase().as_str() {
            "air" => Ok(TransportMode::Air),
            "sea" => Ok(TransportMode::Sea),
            "land" => Ok(TransportMode::Land),
            "rail" | "train" => Ok(TransportMode::Rail),
            _ => Err(InvalidMode(s.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Air => "air",
            TransportMode::Sea => "sea",
            TransportMode::Land => "land",
            TransportMode::Rail => "rail",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            TransportMode::Air => 0b0001,
            TransportMode::Sea => 0b0010,
            TransportMode::Land => 0b0100,
            TransportMode::Rail => 0b1000,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of transport modes, stored as a bitmask.
///
/// Serializes as a list of mode names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<TransportMode>", into = "Vec<TransportMode>")]
pub struct ModeSet(u8);

impl ModeSet {
    /// The empty set.
    pub const fn empty() -> Self {
        ModeSet(0)
    }

    /// The set of every mode.
    pub const fn all() -> Self {
        ModeSet(0b1111)
    }

    /// Returns a copy of this set with `mode` added.
    pub const fn with(self, mode: TransportMode) -> Self {
        ModeSet(self.0 | mode.bit())
    }

    /// Adds a mode to the set.
    pub fn insert(&mut self, mode: TransportMode) {
        self.0 |= mode.bit();
    }

    pub fn contains(&self, mode: TransportMode) -> bool {
        self.0 & mode.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the modes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = TransportMode> + '_ {
        TransportMode::ALL
            .into_iter()
            .filter(move |m| self.contains(*m))
    }

    /// Raw bitmask, used as a compact cache key.
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl FromIterator<TransportMode> for ModeSet {
    fn from_iter<I: IntoIterator<Item = TransportMode>>(iter: I) -> Self {
        iter.into_iter().fold(ModeSet::empty(), ModeSet::with)
    }
}

impl From<Vec<TransportMode>> for ModeSet {
    fn from(modes: Vec<TransportMode>) -> Self {
        modes.into_iter().collect()
    }
}

impl From<ModeSet> for Vec<TransportMode> {
    fn from(set: ModeSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
