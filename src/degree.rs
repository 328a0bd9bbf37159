use crate::error::ArgError;
use crate::output_name::rotate_suffix;
use std::fmt;

/// A page rotation normalized into `[0, 360)`. Always 0, 90, 180 or 270.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Degree(u16);

impl Degree {
    pub const ZERO: Degree = Degree(0);

    /// Parse a textual degree such as "90", "+180" or "-90".
    ///
    /// Any integer is reduced modulo 360, so "-450" becomes 270 and "450"
    /// becomes 90. The reduced value must be a multiple of 90.
    pub fn parse(s: &str) -> Result<Self, ArgError> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| ArgError::InvalidDegree(s.to_string()))?;

        let normalized = raw.rem_euclid(360);
        if normalized % 90 != 0 {
            return Err(ArgError::NotRightAngle(s.to_string()));
        }

        Ok(Degree(normalized as u16))
    }

    /// Build from a `/Rotate` value found in a PDF, which may be negative or
    /// exceed 360. Values that are not a multiple of 90 yield `None`.
    pub fn from_rotate(value: i64) -> Option<Self> {
        let normalized = value.rem_euclid(360);
        (normalized % 90 == 0).then_some(Degree(normalized as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }

    /// Filename suffix, e.g. `_rotate090`.
    pub fn suffix(self) -> String {
        rotate_suffix(u32::from(self.0))
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_angles() {
        assert_eq!(Degree::parse("0").unwrap().get(), 0);
        assert_eq!(Degree::parse("90").unwrap().get(), 90);
        assert_eq!(Degree::parse("180").unwrap().get(), 180);
        assert_eq!(Degree::parse("270").unwrap().get(), 270);
    }

    #[test]
    fn test_full_turns_wrap() {
        assert_eq!(Degree::parse("360").unwrap().get(), 0);
        assert_eq!(Degree::parse("450").unwrap().get(), 90);
        assert_eq!(Degree::parse("1080").unwrap().get(), 0);
    }

    #[test]
    fn test_negative_uses_full_modulo() {
        assert_eq!(Degree::parse("-90").unwrap().get(), 270);
        assert_eq!(Degree::parse("-180").unwrap().get(), 180);
        assert_eq!(Degree::parse("-360").unwrap().get(), 0);
        // A single +360 adjustment would leave this at -90.
        assert_eq!(Degree::parse("-450").unwrap().get(), 270);
    }

    #[test]
    fn test_whitespace_and_sign() {
        assert_eq!(Degree::parse(" 90 ").unwrap().get(), 90);
        assert_eq!(Degree::parse("+180").unwrap().get(), 180);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(
            Degree::parse("abc"),
            Err(ArgError::InvalidDegree("abc".to_string()))
        );
        assert_eq!(
            Degree::parse(""),
            Err(ArgError::InvalidDegree(String::new()))
        );
        assert!(matches!(
            Degree::parse("90.5"),
            Err(ArgError::InvalidDegree(_))
        ));
    }

    #[test]
    fn test_not_right_angle() {
        for s in ["45", "91", "-91", "1"] {
            assert_eq!(
                Degree::parse(s),
                Err(ArgError::NotRightAngle(s.to_string())),
                "{s}"
            );
        }
    }

    #[test]
    fn test_from_rotate() {
        assert_eq!(Degree::from_rotate(-90), Some(Degree(270)));
        assert_eq!(Degree::from_rotate(540), Some(Degree(180)));
        assert_eq!(Degree::from_rotate(45), None);
    }

    #[test]
    fn test_suffix_is_zero_padded() {
        assert_eq!(Degree::ZERO.suffix(), "_rotate000");
        assert_eq!(Degree::parse("90").unwrap().suffix(), "_rotate090");
        assert_eq!(Degree::parse("270").unwrap().suffix(), "_rotate270");
    }
}
