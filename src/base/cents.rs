use crate::base::util;

/// Monetary quantity in hundredths. Serialized as a decimal number.
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
    derive_more::Add,
    derive_more::Sum,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Cents(pub i64);

impl Cents {
    /// Fee per hour worked, or `None` if either quantity is not positive.
    pub fn per_hour(self, hours: crate::base::Hours) -> Option<Self> {
        if self.0 <= 0 || hours.0 <= 0 {
            return None;
        }
        // Both are in hundredths, so the ratio is already in plain units.
        Some(Self(util::to_hundredths(self.0 as f64 / hours.0 as f64)))
    }

    pub fn charlen(self) -> usize {
        util::hundredths_charlen(self.0)
    }
}

impl From<f64> for Cents {
    fn from(value: f64) -> Self {
        Self(util::to_hundredths(value))
    }
}

impl From<Cents> for f64 {
    fn from(value: Cents) -> Self {
        value.0 as f64 / 100.0
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        util::write_hundredths(f, self.0)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseFloatError;

    /// Parses a decimal amount, ignoring comma thousands separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.replace(',', "").trim().parse::<f64>().map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Hours;
    use rstest::rstest;

    #[rstest]
    #[case("1500", Cents(150000))]
    #[case("1,234.56", Cents(123456))]
    #[case("0.1", Cents(10))]
    fn test_from_str(#[case] s: &str, #[case] want: Cents) {
        assert_eq!(s.parse::<Cents>().unwrap(), want)
    }

    #[rstest]
    #[case(Cents(150000), Hours(1250), Some(Cents(12000)))]
    #[case(Cents(100000), Hours(300), Some(Cents(33333)))]
    #[case(Cents(0), Hours(1250), None)]
    #[case(Cents(150000), Hours(0), None)]
    fn test_per_hour(#[case] fees: Cents, #[case] hours: Hours, #[case] want: Option<Cents>) {
        assert_eq!(fees.per_hour(hours), want)
    }
}
