//! Running subtotals over a date-ordered stream of entries.
//!
//! The aggregator walks entries in ascending date order and, between
//! consecutive entries whose dates differ, closes out the day and possibly
//! the week and month. Each closed period becomes a [`Subtotal`] row placed
//! before the first entry of the next period. Once input runs out, every
//! level is closed one final time, followed by the grand total.

use std::collections::VecDeque;

use crate::base;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Level {
    Day,
    Week,
    Month,
    Total,
}

/// When the week and month subtotals are closed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Boundaries {
    /// Close the week after a day that was a Friday, and the month when the
    /// month changes, checking only at date transitions between consecutive
    /// entries. Gaps in the data can fold a week or month into the next.
    #[default]
    Transitions,
    /// Close the week or month whenever consecutive entries fall in different
    /// ISO weeks or calendar months, regardless of gaps.
    Calendar,
}

/// Which intermediate levels produce subtotal rows. The grand total is always
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels {
    pub day: bool,
    pub week: bool,
    pub month: bool,
}

impl Levels {
    pub const ALL: Self = Self {
        day: true,
        week: true,
        month: true,
    };

    pub const NONE: Self = Self {
        day: false,
        week: false,
        month: false,
    };

    pub fn contains(self, level: Level) -> bool {
        match level {
            Level::Day => self.day,
            Level::Week => self.week,
            Level::Month => self.month,
            Level::Total => true,
        }
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::ALL
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Projects whose hours count toward no subtotal. Their entries are still
    /// yielded, flagged as ignored.
    pub ignored: std::collections::BTreeSet<base::ProjectId>,
    pub levels: Levels,
    pub boundaries: Boundaries,
}

impl Config {
    /// Lazily aggregates `entries`, which must already be sorted by ascending
    /// date.
    pub fn aggregate<'a, I>(&'a self, entries: I) -> Aggregator<'a, I::IntoIter>
    where
        I: IntoIterator<Item = &'a base::Entry>,
    {
        Aggregator {
            config: self,
            entries: entries.into_iter(),
            prev: None,
            day: Accumulator::default(),
            week: Accumulator::default(),
            month: Accumulator::default(),
            total: Accumulator::default(),
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    pub total: base::Hours,
    pub billable: base::Hours,
}

impl Accumulator {
    pub(crate) fn add(&mut self, hours: base::Hours, billable: bool) {
        self.total += hours;
        if billable {
            self.billable += hours;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subtotal {
    pub level: Level,
    pub label: String,
    pub total: base::Hours,
    pub billable: base::Hours,
    /// Billable hours as a percentage of total hours; `0.0` when there are no
    /// hours.
    pub productivity: f64,
}

impl Subtotal {
    fn new(level: Level, last: Option<&base::EntryDate>, acc: Accumulator) -> Self {
        Self {
            level,
            label: label(level, last),
            total: acc.total,
            billable: acc.billable,
            productivity: acc.billable.percent_of(acc.total),
        }
    }
}

/// Describes the period closed by a subtotal, given the date of the last
/// entry in it.
fn label(level: Level, last: Option<&base::EntryDate>) -> String {
    let last_valid = last.and_then(base::EntryDate::valid);
    match (level, last, last_valid) {
        (Level::Day, Some(dt), _) => dt.label(),
        (Level::Day, None, _) => "(no date)".to_string(),
        (Level::Week, _, Some(dt)) => format!("Week to {}", dt.long_label()),
        (Level::Week, _, None) => "Week subtotal".to_string(),
        (Level::Month, _, Some(dt)) => format!("Month of {}", dt.month_label()),
        (Level::Month, _, None) => "Month subtotal".to_string(),
        (Level::Total, _, _) => "Total".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row<'a> {
    Detail {
        entry: &'a base::Entry,
        ignored: bool,
    },
    Subtotal(Subtotal),
}

pub struct Aggregator<'a, I> {
    config: &'a Config,
    entries: I,
    prev: Option<&'a base::EntryDate>,
    day: Accumulator,
    week: Accumulator,
    month: Accumulator,
    total: Accumulator,
    /// Rows produced by the last consumed entry but not yet yielded.
    pending: VecDeque<Row<'a>>,
    finished: bool,
}

impl<'a, I> Aggregator<'a, I>
where
    I: Iterator<Item = &'a base::Entry>,
{
    fn consume(&mut self, entry: &'a base::Entry) {
        if let Some(prev) = self.prev {
            if !prev.same_day(entry.date()) {
                self.flush(Level::Day);
                if self.week_ended(prev, entry.date()) {
                    self.flush(Level::Week);
                }
                if self.month_ended(prev, entry.date()) {
                    self.flush(Level::Month);
                }
            }
        }

        let ignored = self.config.ignored.contains(&entry.project_id());
        self.pending.push_back(Row::Detail { entry, ignored });
        if !ignored {
            for acc in [
                &mut self.day,
                &mut self.week,
                &mut self.month,
                &mut self.total,
            ] {
                acc.add(entry.hours(), entry.billable());
            }
        }
        self.prev = Some(entry.date());
    }

    fn week_ended(&self, prev: &base::EntryDate, next: &base::EntryDate) -> bool {
        match self.config.boundaries {
            Boundaries::Transitions => prev.valid().is_some_and(base::Date::is_friday),
            Boundaries::Calendar => match (prev.valid(), next.valid()) {
                (Some(a), Some(b)) => a.week_key() != b.week_key(),
                _ => false,
            },
        }
    }

    fn month_ended(&self, prev: &base::EntryDate, next: &base::EntryDate) -> bool {
        match (prev.valid(), next.valid()) {
            (Some(a), Some(b)) => a.month_key() != b.month_key(),
            _ => false,
        }
    }

    /// Queues a subtotal row for `level` if that level is enabled, and resets
    /// its accumulator either way.
    fn flush(&mut self, level: Level) {
        let acc = match level {
            Level::Day => &mut self.day,
            Level::Week => &mut self.week,
            Level::Month => &mut self.month,
            Level::Total => &mut self.total,
        };
        let acc = std::mem::take(acc);
        if self.config.levels.contains(level) {
            let row = Subtotal::new(level, self.prev, acc);
            self.pending.push_back(Row::Subtotal(row));
        }
    }

    fn finish(&mut self) {
        for level in [Level::Day, Level::Week, Level::Month, Level::Total] {
            self.flush(level);
        }
        self.finished = true;
    }
}

impl<'a, I> Iterator for Aggregator<'a, I>
where
    I: Iterator<Item = &'a base::Entry>,
{
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(row) = self.pending.pop_front() {
                return Some(row);
            }
            if self.finished {
                return None;
            }
            match self.entries.next() {
                Some(entry) => self.consume(entry),
                None => self.finish(),
            }
        }
    }
}

impl<'a, I> std::iter::FusedIterator for Aggregator<'a, I> where I: Iterator<Item = &'a base::Entry> {}
