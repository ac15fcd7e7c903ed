//! Transport mode type.

use std::fmt;
use std::str::FromStr;

/// Error returned when a transport mode name is not one of the supported modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported transport mode: {name:?}")]
pub struct UnsupportedTransportMode {
    name: String,
}

impl UnsupportedTransportMode {
    /// The rejected input.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The way a passenger travels.
///
/// The set is closed: each mode maps to exactly one fare strategy. Inputs
/// naming any other mode are rejected at parse time, so a `TransportMode`
/// value never needs a fallback case.
///
/// # Examples
///
/// ```
/// use booking_engine::domain::TransportMode;
///
/// let mode: TransportMode = "train".parse().unwrap();
/// assert_eq!(mode, TransportMode::Train);
/// assert_eq!(mode.as_str(), "Train");
///
/// assert!("boat".parse::<TransportMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    Airplane,
    Train,
    Bus,
}

impl TransportMode {
    /// Every mode, in listing order.
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Airplane,
        TransportMode::Train,
        TransportMode::Bus,
    ];

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Airplane => "Airplane",
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
        }
    }

    /// Position of this mode in [`TransportMode::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            TransportMode::Airplane => 0,
            TransportMode::Train => 1,
            TransportMode::Bus => 2,
        }
    }
}

impl FromStr for TransportMode {
    type Err = UnsupportedTransportMode;

    /// Parses a mode name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnsupportedTransportMode { name: s.to_string() })
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_modes() {
        assert_eq!("Airplane".parse::<TransportMode>(), Ok(TransportMode::Airplane));
        assert_eq!("TRAIN".parse::<TransportMode>(), Ok(TransportMode::Train));
        assert_eq!(" bus ".parse::<TransportMode>(), Ok(TransportMode::Bus));
    }

    #[test]
    fn reject_unknown_mode() {
        let err = "Ferry".parse::<TransportMode>().unwrap_err();
        assert_eq!(err.name(), "Ferry");
        assert_eq!(err.to_string(), "unsupported transport mode: \"Ferry\"");
    }

    #[test]
    fn reject_empty() {
        assert!("".parse::<TransportMode>().is_err());
    }

    #[test]
    fn index_matches_all() {
        for (i, mode) in TransportMode::ALL.into_iter().enumerate() {
            assert_eq!(mode.index(), i);
        }
    }

    #[test]
    fn display() {
        assert_eq!(TransportMode::Bus.to_string(), "Bus");
    }
}
