//! Free-text location → named hub resolution.

use vitrolead_common::Hub;

/// Resolve a location string to a named hub, first match wins.
/// The precedence order is fixed: Boston/Cambridge is checked before the UK
/// cluster, so a bare "cambridge" resolves to Boston/Cambridge.
pub fn infer_hub(location: &str) -> Option<Hub> {
    let s = location.to_lowercase();
    if s.contains("boston") || s.contains("cambridge") {
        Some(Hub::BostonCambridge)
    } else if s.contains("bay area") || s.contains("san francisco") {
        Some(Hub::BayArea)
    } else if s.contains("basel") {
        Some(Hub::Basel)
    } else if s.contains("oxford") || s.contains("cambridge uk") || s.contains("golden triangle") {
        Some(Hub::UkGoldenTriangle)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_hub_resolves() {
        assert_eq!(infer_hub("Boston, MA"), Some(Hub::BostonCambridge));
        assert_eq!(infer_hub("South San Francisco"), Some(Hub::BayArea));
        assert_eq!(infer_hub("Basel, Switzerland"), Some(Hub::Basel));
        assert_eq!(infer_hub("Oxford, UK"), Some(Hub::UkGoldenTriangle));
        assert_eq!(infer_hub("the golden triangle"), Some(Hub::UkGoldenTriangle));
    }

    #[test]
    fn test_no_hub_for_other_locations() {
        assert_eq!(infer_hub("Austin, TX"), None);
        assert_eq!(infer_hub(""), None);
    }

    #[test]
    fn test_first_match_precedence() {
        // Contains both "boston" and "basel" — Boston/Cambridge wins.
        assert_eq!(
            infer_hub("Boston office, Basel HQ"),
            Some(Hub::BostonCambridge)
        );
        // A bare "cambridge" is the US cluster, not the UK one.
        assert_eq!(infer_hub("Cambridge"), Some(Hub::BostonCambridge));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_hub("BASEL"), Some(Hub::Basel));
    }
}
