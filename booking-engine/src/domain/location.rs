//! Location types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// A supported place, identified by its two-letter UF code.
///
/// The set of locations is closed: every value carries both a code and a
/// display name, and no other places can be constructed.
///
/// # Examples
///
/// ```
/// use booking_engine::domain::Location;
///
/// let sp = Location::parse("SP").unwrap();
/// assert_eq!(sp, Location::SaoPaulo);
/// assert_eq!(sp.code(), "SP");
/// assert_eq!(sp.name(), "São Paulo");
///
/// // Lowercase is rejected
/// assert!(Location::parse("sp").is_err());
///
/// // Unknown codes are rejected
/// assert!(Location::parse("XX").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Alagoas,
    Bahia,
    Ceara,
    EspiritoSanto,
    Maranhao,
    Paraiba,
    Pernambuco,
    Piaui,
    RioDeJaneiro,
    RioGrandeDoNorte,
    SaoPaulo,
    Sergipe,
    MinasGerais,
}

impl Location {
    /// Every supported location, in declaration order.
    pub const ALL: [Location; 13] = [
        Location::Alagoas,
        Location::Bahia,
        Location::Ceara,
        Location::EspiritoSanto,
        Location::Maranhao,
        Location::Paraiba,
        Location::Pernambuco,
        Location::Piaui,
        Location::RioDeJaneiro,
        Location::RioGrandeDoNorte,
        Location::SaoPaulo,
        Location::Sergipe,
        Location::MinasGerais,
    ];

    /// Parse a location from its code.
    ///
    /// The input must be exactly 2 uppercase ASCII letters naming a
    /// supported location.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        let bytes = s.as_bytes();

        if bytes.len() != 2 {
            return Err(InvalidLocation {
                reason: "must be exactly 2 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidLocation {
                reason: "must be uppercase ASCII letters A-Z",
            });
        }

        Self::ALL
            .into_iter()
            .find(|loc| loc.code() == s)
            .ok_or(InvalidLocation {
                reason: "not a supported location",
            })
    }

    /// Parse a location code, normalizing surrounding whitespace and case.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLocation> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Location::Alagoas => "AL",
            Location::Bahia => "BA",
            Location::Ceara => "CE",
            Location::EspiritoSanto => "ES",
            Location::Maranhao => "MA",
            Location::Paraiba => "PB",
            Location::Pernambuco => "PE",
            Location::Piaui => "PI",
            Location::RioDeJaneiro => "RJ",
            Location::RioGrandeDoNorte => "RN",
            Location::SaoPaulo => "SP",
            Location::Sergipe => "SE",
            Location::MinasGerais => "MG",
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Location::Alagoas => "Alagoas",
            Location::Bahia => "Bahia",
            Location::Ceara => "Ceará",
            Location::EspiritoSanto => "Espírito Santo",
            Location::Maranhao => "Maranhão",
            Location::Paraiba => "Paraíba",
            Location::Pernambuco => "Pernambuco",
            Location::Piaui => "Piauí",
            Location::RioDeJaneiro => "Rio de Janeiro",
            Location::RioGrandeDoNorte => "Rio Grande do Norte",
            Location::SaoPaulo => "São Paulo",
            Location::Sergipe => "Sergipe",
            Location::MinasGerais => "Minas Gerais",
        }
    }
}

impl FromStr for Location {
    type Err = InvalidLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_every_code() {
        for loc in Location::ALL {
            assert_eq!(Location::parse(loc.code()), Ok(loc));
        }
    }

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<_> = Location::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes.len(), Location::ALL.len());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Location::parse("al").is_err());
        assert!(Location::parse("Al").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Location::parse("").is_err());
        assert!(Location::parse("A").is_err());
        assert!(Location::parse("ALA").is_err());
    }

    #[test]
    fn reject_unknown_code() {
        let err = Location::parse("ZZ").unwrap_err();
        assert_eq!(err.to_string(), "invalid location code: not a supported location");
    }

    #[test]
    fn parse_normalized_trims_and_uppercases() {
        assert_eq!(Location::parse_normalized(" rj "), Ok(Location::RioDeJaneiro));
        assert!(Location::parse_normalized("rio").is_err());
    }

    #[test]
    fn from_str() {
        let loc: Location = "MG".parse().unwrap();
        assert_eq!(loc, Location::MinasGerais);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Location::Ceara.to_string(), "Ceará");
        assert_eq!(Location::RioGrandeDoNorte.to_string(), "Rio Grande do Norte");
    }
}
