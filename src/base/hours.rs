use crate::base::util;

/// Time quantity in hundredths of an hour. Serialized as a decimal number of
/// hours, rounded to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Hours(pub i64);

impl Hours {
    pub const ZERO: Self = Self(0);

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `self` as a percentage of `total`, or `0.0` if `total` is not
    /// positive.
    pub fn percent_of(self, total: Self) -> f64 {
        if total.0 > 0 {
            self.0 as f64 / total.0 as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Returns `hours.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        util::hundredths_charlen(self.0)
    }
}

impl From<f64> for Hours {
    fn from(value: f64) -> Self {
        Self(util::to_hundredths(value))
    }
}

impl From<Hours> for f64 {
    fn from(value: Hours) -> Self {
        value.as_f64()
    }
}

impl std::fmt::Display for Hours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        util::write_hundredths(f, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Float(#[from] std::num::ParseFloatError),
    #[error("hours must be a finite number")]
    NotFinite,
    #[error("hours must not be negative")]
    Negative,
}

impl std::str::FromStr for Hours {
    type Err = ParseError;

    /// Parses a non-negative decimal number of hours. Precision beyond two
    /// decimal places is rounded away.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let x = s.trim().parse::<f64>()?;
        if !x.is_finite() {
            return Err(ParseError::NotFinite);
        }
        if x < 0.0 {
            return Err(ParseError::Negative);
        }
        Ok(Self::from(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4", Hours(400))]
    #[case("0.25", Hours(25))]
    #[case(" 7.5 ", Hours(750))]
    #[case("1.005", Hours(100))]
    #[case("0", Hours(0))]
    fn test_from_str(#[case] s: &str, #[case] want: Hours) {
        assert_eq!(s.parse::<Hours>().unwrap(), want)
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-1")]
    #[case("inf")]
    #[case("NaN")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Hours>().is_err())
    }

    #[rstest]
    #[case(Hours(400), Hours(800), 50.0)]
    #[case(Hours(800), Hours(800), 100.0)]
    #[case(Hours(0), Hours(800), 0.0)]
    #[case(Hours(0), Hours(0), 0.0)]
    #[case(Hours(100), Hours(-100), 0.0)]
    fn test_percent_of(#[case] part: Hours, #[case] total: Hours, #[case] want: f64) {
        assert_eq!(part.percent_of(total), want)
    }

    #[test]
    fn test_serde() {
        let h: Hours = serde_json::from_str("7.25").unwrap();
        assert_eq!(h, Hours(725));
        assert_eq!(serde_json::to_string(&h).unwrap(), "7.25");
        assert_eq!(serde_json::to_string(&Hours(400)).unwrap(), "4.0");
    }
}
