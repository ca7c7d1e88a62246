//! Condition derivation when seeding out of a check-out.
//!
//! A check-out row can hold up to three condition readings: the fresh
//! check-out condition, the baseline inventory condition, and a plain
//! condition left over from earlier documents. When that row seeds a new
//! baseline inspection, exactly one condition survives.

/// Pick the condition for a row seeded out of a check-out.
///
/// The most recent reading wins: check-out condition first, then the baseline
/// inventory condition, then any plain condition. Empty strings count as
/// absent. Returns an empty string when nothing usable is present.
pub fn derive_condition(
    check_out: Option<&str>,
    inventory: Option<&str>,
    existing: Option<&str>,
) -> String {
    [check_out, inventory, existing]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_out_wins_over_all() {
        assert_eq!(derive_condition(Some("Fair"), Some("Good"), Some("Poor")), "Fair");
    }

    #[test]
    fn inventory_wins_when_check_out_absent() {
        assert_eq!(derive_condition(None, Some("Good"), Some("Poor")), "Good");
    }

    #[test]
    fn inventory_wins_when_check_out_empty() {
        assert_eq!(derive_condition(Some(""), Some("Good"), Some("Poor")), "Good");
    }

    #[test]
    fn existing_used_as_last_resort() {
        assert_eq!(derive_condition(None, None, Some("Poor")), "Poor");
    }

    #[test]
    fn all_absent_yields_empty() {
        assert_eq!(derive_condition(None, None, None), "");
    }

    #[test]
    fn all_empty_yields_empty() {
        assert_eq!(derive_condition(Some(""), Some(""), Some("")), "");
    }
}
