//! Ledger configuration.

use tracing::warn;

/// Set to a true value to decline bookings on routes missing from the table.
pub const REJECT_UNKNOWN_ROUTES_VAR: &str = "BOOKING_REJECT_UNKNOWN_ROUTES";

/// Set to a true value to let repeated ticket ids through.
pub const ALLOW_DUPLICATE_IDS_VAR: &str = "BOOKING_ALLOW_DUPLICATE_IDS";

/// Policy switches for the reservation ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Decline bookings for routes missing from the distance table.
    /// When false, such bookings go through priced at zero.
    pub reject_unknown_routes: bool,

    /// Reject a booking whose ticket id is already in the ledger.
    pub enforce_unique_ids: bool,
}

impl LedgerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(reject_unknown_routes: bool, enforce_unique_ids: bool) -> Self {
        Self {
            reject_unknown_routes,
            enforce_unique_ids,
        }
    }

    /// Accept everything the fare strategies accept: zero-priced unknown
    /// routes and repeated ticket ids.
    pub fn permissive() -> Self {
        Self::new(false, false)
    }

    pub fn with_reject_unknown_routes(mut self, reject: bool) -> Self {
        self.reject_unknown_routes = reject;
        self
    }

    pub fn with_enforce_unique_ids(mut self, enforce: bool) -> Self {
        self.enforce_unique_ids = enforce;
        self
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Unset or unrecognised values leave the default in place.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |name: &str| {
            let value = lookup(name)?;
            let parsed = parse_flag(&value);
            if parsed.is_none() {
                warn!(name, value = %value, "ignoring unrecognised boolean");
            }
            parsed
        };

        let mut config = Self::default();
        if let Some(reject) = flag(REJECT_UNKNOWN_ROUTES_VAR) {
            config = config.with_reject_unknown_routes(reject);
        }
        if let Some(allow) = flag(ALLOW_DUPLICATE_IDS_VAR) {
            config = config.with_enforce_unique_ids(!allow);
        }
        config
    }
}

/// Parse a boolean setting, case-insensitively and ignoring surrounding
/// whitespace.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            reject_unknown_routes: false,
            enforce_unique_ids: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = LedgerConfig::default();

        assert!(!config.reject_unknown_routes);
        assert!(config.enforce_unique_ids);
    }

    #[test]
    fn permissive_config() {
        let config = LedgerConfig::permissive();

        assert!(!config.reject_unknown_routes);
        assert!(!config.enforce_unique_ids);
    }

    #[test]
    fn builder_methods() {
        let config = LedgerConfig::default()
            .with_reject_unknown_routes(true)
            .with_enforce_unique_ids(false);

        assert_eq!(config, LedgerConfig::new(true, false));
    }

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn flag_spellings() {
        for truthy in ["1", "true", "TRUE", "Yes", "on", " on "] {
            assert_eq!(parse_flag(truthy), Some(true), "{truthy:?}");
        }
        for falsy in ["0", "false", "False", "no", "OFF", "\toff\n"] {
            assert_eq!(parse_flag(falsy), Some(false), "{falsy:?}");
        }
        for junk in ["", "2", "y", "enabled", "truee"] {
            assert_eq!(parse_flag(junk), None, "{junk:?}");
        }
    }

    #[test]
    fn no_variables_gives_defaults() {
        assert_eq!(LedgerConfig::from_lookup(|_| None), LedgerConfig::default());
    }

    #[test]
    fn reject_unknown_routes_from_lookup() {
        let config = LedgerConfig::from_lookup(lookup_from(&[(REJECT_UNKNOWN_ROUTES_VAR, "yes")]));
        assert!(config.reject_unknown_routes);
        assert!(config.enforce_unique_ids);

        let config = LedgerConfig::from_lookup(lookup_from(&[(REJECT_UNKNOWN_ROUTES_VAR, "0")]));
        assert!(!config.reject_unknown_routes);
    }

    #[test]
    fn allow_duplicates_inverts_enforcement() {
        let config = LedgerConfig::from_lookup(lookup_from(&[(ALLOW_DUPLICATE_IDS_VAR, "true")]));
        assert!(!config.enforce_unique_ids);

        let config = LedgerConfig::from_lookup(lookup_from(&[(ALLOW_DUPLICATE_IDS_VAR, "off")]));
        assert!(config.enforce_unique_ids);

        let config = LedgerConfig::from_lookup(lookup_from(&[
            (REJECT_UNKNOWN_ROUTES_VAR, "on"),
            (ALLOW_DUPLICATE_IDS_VAR, "1"),
        ]));
        assert_eq!(config, LedgerConfig::new(true, false));
    }

    #[test]
    fn unrecognised_values_keep_defaults() {
        let config = LedgerConfig::from_lookup(lookup_from(&[
            (REJECT_UNKNOWN_ROUTES_VAR, "maybe"),
            (ALLOW_DUPLICATE_IDS_VAR, ""),
        ]));
        assert_eq!(config, LedgerConfig::default());
    }
}
