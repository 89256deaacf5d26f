use crate::base;

/// Inclusive range of dates. An interval whose `start` is after its `end` is
/// empty, and all empty intervals compare equal.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Interval {
    pub start: base::Date,
    pub end: base::Date,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.is_empty() && other.is_empty() || self.start == other.start && self.end == other.end
    }
}

impl Interval {
    pub const MAX: Self = Self {
        start: base::Date::MIN,
        end: base::Date::MAX,
    };

    pub const EMPTY: Self = Self {
        start: base::Date::MAX,
        end: base::Date::MIN,
    };

    pub fn is_empty(self) -> bool {
        self.start > self.end
    }

    pub fn contains(self, date: base::Date) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        }
    }

    /// Number of days spanned, zero if empty.
    pub fn days(self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        let n = self.start.days_until(self.end) + 1;
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    /// Returns the subintervals aligned to calendar boundaries of `part`. The
    /// first and last may be partial: iterating \[2017-03-01, 2017-03-14] by
    /// week yields \[03-01, 03-05], \[03-06, 03-12] and \[03-13, 03-14].
    pub fn iter(self, part: base::Datepart) -> impl Iterator<Item = Self> {
        let first = (!self.is_empty()).then(|| Self {
            start: self.start,
            end: self.start.last_of(part).min(self.end),
        });
        std::iter::successors(first, move |prev| {
            let dt = prev.end.shift(base::Datepart::Day, 1)?;
            let next = Self {
                start: dt,
                end: dt.last_of(part).min(self.end),
            };
            (!next.is_empty()).then_some(next)
        })
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Date(#[from] base::date::ParseError),
    #[error("invalid start date")]
    Start(#[source] base::date::ParseError),
    #[error("invalid end date")]
    End(#[source] base::date::ParseError),
}

impl std::str::FromStr for Interval {
    type Err = ParseError;

    /// Accepts `start:end` with either side optionally omitted, or a single
    /// date. A single relative date such as `m-1` spans the whole unit it
    /// names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let side = |x: &str, unbounded: base::Date| {
            if x.is_empty() {
                Ok(unbounded)
            } else {
                x.parse::<base::Date>()
            }
        };
        if let Some((left, right)) = s.split_once(':') {
            return Ok(Self {
                start: side(left, base::Date::MIN).map_err(Self::Err::Start)?,
                end: side(right, base::Date::MAX).map_err(Self::Err::End)?,
            });
        }
        let dt = s.parse::<base::Date>()?;
        let part = match s.chars().next() {
            Some('y' | 'Y') => base::Datepart::Year,
            Some('m' | 'M') => base::Datepart::Month,
            Some('w' | 'W') => base::Datepart::Week,
            _ => base::Datepart::Day,
        };
        Ok(Self {
            start: dt.first_of(part),
            end: dt.last_of(part),
        })
    }
}

impl TryFrom<&str> for Interval {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
