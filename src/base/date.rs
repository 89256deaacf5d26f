use crate::base::Datepart;

/// A date without time or timezone information. Values are guaranteed to be
/// between `0000-01-01` and `9999-12-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

const fn const_date(year: i32, month: time::Month, day: u8) -> time::Date {
    match time::Date::from_calendar_date(year, month, day) {
        Ok(dt) => dt,
        Err(_) => panic!("constant date should be valid"),
    }
}

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(const_date(0, time::Month::January, 1));

    /// 9999-12-31
    pub const MAX: Self = Self(const_date(9999, time::Month::December, 31));

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        (Self::MIN..=Self::MAX).contains(&dt).then_some(dt)
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// Zero-based day of the week, starting from Monday.
    pub fn weekday(self) -> u8 {
        self.0.weekday().number_days_from_monday()
    }

    pub fn is_friday(self) -> bool {
        self.0.weekday() == time::Weekday::Friday
    }

    /// The Monday on or before this date.
    pub fn week_key(self) -> Self {
        self.first_of(Datepart::Week)
    }

    pub fn month_key(self) -> (i32, u8) {
        (self.year(), self.month())
    }

    /// Returns the local date, or the UTC date if the local offset cannot be
    /// determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2015, 3, 30).expect("'today' for tests should be valid")
    }

    pub fn format(
        self,
        fmt: &(impl time::formatting::Formattable + ?Sized),
    ) -> Result<String, time::error::Format> {
        self.0.format(fmt)
    }

    /// Formats as `Mon 06/03/2017`.
    pub fn long_label(self) -> String {
        self.format(time::macros::format_description!(
            "[weekday repr:short] [day]/[month]/[year]"
        ))
        .expect("formatting a calendar date should succeed")
    }

    /// Formats as `Mar 2017`.
    pub fn month_label(self) -> String {
        self.format(time::macros::format_description!(
            "[month repr:short] [year]"
        ))
        .expect("formatting a calendar date should succeed")
    }

    pub fn first_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Week => self
                .shift(Datepart::Day, -i32::from(self.weekday()))
                .unwrap_or(Self::MIN),
            Datepart::Month => Self::from_ymd(self.year(), self.month(), 1)
                .expect("first day of a valid month should be a valid date"),
            Datepart::Year => Self::from_ymd(self.year(), 1, 1)
                .expect("first day of a valid year should be a valid date"),
        }
    }

    pub fn last_of(self, part: Datepart) -> Self {
        match part {
            Datepart::Day => self,
            Datepart::Week => self
                .shift(Datepart::Day, 6 - i32::from(self.weekday()))
                .unwrap_or(Self::MAX),
            Datepart::Month => {
                let last = self.0.month().length(self.year());
                Self::from_ymd(self.year(), self.month(), last)
                    .expect("final day of a valid month should be a valid date")
            }
            Datepart::Year => Self::from_ymd(self.year(), 12, 31)
                .expect("final day of a valid year should be a valid date"),
        }
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).whole_days()
    }

    /// Offsets the date by the given datepart, returning `None` if the result
    /// is out of bounds.
    ///
    /// When shifting by years or months, the day is clamped to the resultant
    /// month's last day. For example, shifting Feb 29 by 1 year yields Feb 28.
    pub fn shift(self, part: Datepart, offset: i32) -> Option<Self> {
        let days = match part {
            Datepart::Day => Some(i64::from(offset)),
            Datepart::Week => i64::from(offset).checked_mul(7),
            Datepart::Month | Datepart::Year => None,
        };
        if let Some(days) = days {
            return self
                .0
                .checked_add(time::Duration::days(days))
                .and_then(Self::new);
        }

        let months = match part {
            Datepart::Year => i64::from(offset) * 12,
            _ => i64::from(offset),
        };
        let index = i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + months;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = time::Month::try_from(index.rem_euclid(12) as u8 + 1).ok()?;
        let day = self.day().min(month.length(year));
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Parses `yyyy-mm-dd`. Components need not be zero padded.
    pub fn parse_iso(s: &str) -> Result<Self, ParseError> {
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::BadFormat);
        };
        let all_digits = |x: &str| !x.is_empty() && x.bytes().all(|b| b.is_ascii_digit());
        if ![y, m, d].into_iter().all(all_digits) {
            return Err(ParseError::BadFormat);
        }
        let year = y.parse::<i32>().map_err(|_| ParseError::OutOfRange)?;
        if !(Self::MIN.year()..=Self::MAX.year()).contains(&year) {
            return Err(ParseError::OutOfRange);
        }
        let month = m.parse::<u8>().map_err(|_| ParseError::NoSuchDate)?;
        let day = d.parse::<u8>().map_err(|_| ParseError::NoSuchDate)?;
        Self::from_ymd(year, month, day).ok_or(ParseError::NoSuchDate)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .format(time::macros::format_description!("[year]-[month]-[day]"))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected a date formatted as yyyy-mm-dd")]
    BadFormat,
    #[error("no such calendar date")]
    NoSuchDate,
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not one of {{y, Y, m, M, w, W, d, D}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `xn` where `x` is one of `{y, Y, m, M, w, W, d, D}` and `n` is an
    ///   optional integer offset
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            return Self::parse_iso(s);
        }

        let mut chars = s.chars();
        let first = chars.next().ok_or(Self::Err::Empty)?;
        let rest = chars.as_str();
        let offset = if rest.is_empty() {
            0
        } else {
            rest.parse::<i32>()?
        };
        let today = Self::today();
        match first {
            'd' | 'D' => today.shift(Datepart::Day, offset),
            'w' => today
                .first_of(Datepart::Week)
                .shift(Datepart::Week, offset),
            'W' => today
                .shift(Datepart::Week, offset)
                .map(|dt| dt.last_of(Datepart::Week)),
            'm' => today
                .first_of(Datepart::Month)
                .shift(Datepart::Month, offset),
            'M' => today
                .shift(Datepart::Month, offset)
                .map(|dt| dt.last_of(Datepart::Month)),
            'y' => today.first_of(Datepart::Year).shift(Datepart::Year, offset),
            'Y' => today.last_of(Datepart::Year).shift(Datepart::Year, offset),
            _ => return Err(Self::Err::InvalidFirstChar),
        }
        .ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
