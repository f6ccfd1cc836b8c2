//! Built-in regression suites, one per synthetic subsystem.

pub mod aurora;
pub mod gps;
pub mod spectra;
pub mod tile;

use crate::harness::Suite;

/// Names of the built-in suites, in run order.
pub const SUITE_NAMES: [&str; 4] = ["tile", "gps", "spectra", "aurora"];

/// Every built-in suite, in fixed order.
pub fn all() -> Vec<Suite> {
    vec![tile::suite(), gps::suite(), spectra::suite(), aurora::suite()]
}

/// Look up one built-in suite by name.
pub fn find(name: &str) -> Option<Suite> {
    match name {
        "tile" => Some(tile::suite()),
        "gps" => Some(gps::suite()),
        "spectra" => Some(spectra::suite()),
        "aurora" => Some(aurora::suite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_consistent() {
        assert_eq!(all().len(), SUITE_NAMES.len());
        for name in SUITE_NAMES {
            let suite = find(name).expect("registered suite");
            assert_eq!(suite.name(), name);
            assert!(suite.case_count() > 0);
        }
        assert!(find("bogus").is_none());
    }
}
