use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Letter case policy applied to target words and grid tiles.
///
/// `Mixed` capitalizes the first letter and lowercases the rest.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Upper,
    Lower,
    Mixed,
}

/// Derive the target spelling from a character name under a case mode.
pub fn format_name(name: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => name.to_uppercase(),
        CaseMode::Lower => name.to_lowercase(),
        CaseMode::Mixed => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_upper() {
        assert_eq!(format_name("mario", CaseMode::Upper), "MARIO");
        assert_eq!(format_name("Pikachu", CaseMode::Upper), "PIKACHU");
    }

    #[test]
    fn test_format_lower() {
        assert_eq!(format_name("MARIO", CaseMode::Lower), "mario");
        assert_eq!(format_name("Totoro", CaseMode::Lower), "totoro");
    }

    #[test]
    fn test_format_mixed() {
        assert_eq!(format_name("mario", CaseMode::Mixed), "Mario");
        assert_eq!(format_name("DORAEMON", CaseMode::Mixed), "Doraemon");
        assert_eq!(format_name("g", CaseMode::Mixed), "G");
    }

    #[test]
    fn test_format_empty_name() {
        assert_eq!(format_name("", CaseMode::Mixed), "");
        assert_eq!(format_name("", CaseMode::Upper), "");
    }

    #[test]
    fn test_format_preserves_length_and_letters() {
        for mode in [CaseMode::Upper, CaseMode::Lower, CaseMode::Mixed] {
            for name in ["anpanman", "Conan", "KIRBY", "luffy"] {
                let formatted = format_name(name, mode);
                assert_eq!(formatted.len(), name.len());
                assert_eq!(formatted.to_lowercase(), name.to_lowercase());
            }
        }
    }

    #[test]
    fn test_default_is_upper() {
        assert_eq!(CaseMode::default(), CaseMode::Upper);
    }
}
