#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Fixed width of a metropolitan commune code.
pub const CODGEO_WIDTH: usize = 5;

/// A commune geographic code (INSEE CODGEO).
///
/// Codes are numeric-looking strings with significant leading zeros
/// ("01001"). Construction trims the raw text and left-pads short codes to
/// five characters so values that round-tripped through a numeric type
/// ("1001") compare equal to their canonical form.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Codgeo(String);

impl Codgeo {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCodgeo(value));
        }
        if trimmed.len() >= CODGEO_WIDTH {
            return Ok(Self(trimmed.to_string()));
        }
        let mut padded = String::with_capacity(CODGEO_WIDTH);
        for _ in trimmed.len()..CODGEO_WIDTH {
            padded.push('0');
        }
        padded.push_str(trimmed);
        Ok(Self(padded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Codgeo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_codes() {
        let code = Codgeo::new("1001").expect("valid code");
        assert_eq!(code.as_str(), "01001");
    }

    #[test]
    fn trims_and_keeps_full_width_codes() {
        let code = Codgeo::new(" 69001 ").expect("valid code");
        assert_eq!(code.as_str(), "69001");
    }

    #[test]
    fn keeps_wider_codes_verbatim() {
        let code = Codgeo::new("987601").expect("valid code");
        assert_eq!(code.as_str(), "987601");
    }

    #[test]
    fn rejects_blank_input() {
        assert!(Codgeo::new("   ").is_err());
        assert!(Codgeo::new("").is_err());
    }

    #[test]
    fn padded_and_canonical_forms_compare_equal() {
        let a = Codgeo::new("1001").expect("valid code");
        let b = Codgeo::new("01001").expect("valid code");
        assert_eq!(a, b);
    }
}
