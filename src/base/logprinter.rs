use colored::Colorize;

use crate::base;
use crate::base::aggregator::Level;
use crate::base::aggregator::Row;

/// Annotation appended to one entry's row, reporting what a command did to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Added,
    Updated,
    WouldBeRemoved,
    Removed,
}

impl Mark {
    fn text(self) -> &'static str {
        match self {
            Mark::Added => " <- [ADDED]",
            Mark::Updated => " <- [UPDATED]",
            Mark::WouldBeRemoved => " <- [WOULD BE REMOVED]",
            Mark::Removed => " <- [REMOVED]",
        }
    }

    fn color(self) -> fn(&str) -> colored::ColoredString {
        match self {
            Mark::Added => |s| s.green(),
            Mark::Updated | Mark::WouldBeRemoved => |s| s.yellow(),
            Mark::Removed => |s| s.red(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub entries: base::Entrylist,
    pub projects: base::Projects,
    pub aggregation: base::aggregator::Config,
    /// When false, only subtotal rows are printed.
    pub details: bool,
    pub mark: Option<(base::EntryId, Mark)>,
    /// Terminal width used to truncate descriptions. Zero disables truncation.
    pub term_width: usize,
}

pub struct Logprinter<'a> {
    charset: &'a base::Charset,
    lines: Vec<Line>,
    alignment_charlen: usize,
    billable_charlen: usize,
    tail_charlen: Option<usize>,
}

enum Style {
    Detail {
        /// Appended after the possibly truncated tail.
        flags: String,
        ignored: bool,
        mark: Option<Mark>,
    },
    Subtotal(Level),
}

struct Line {
    left: String,
    hours: base::Hours,
    billable: Option<base::Hours>,
    tail: String,
    style: Style,
}

const IGNORED_FLAG: &str = " [ignored]";

impl Config {
    pub fn to_logprinter(&self) -> Logprinter<'_> {
        let mut lines = Vec::new();
        let mut details = 0;
        for row in self.aggregation.aggregate(self.entries.iter()) {
            match row {
                Row::Detail { entry, ignored } => {
                    details += 1;
                    if self.details {
                        lines.push(self.detail_line(entry, ignored));
                    }
                }
                Row::Subtotal(s) => lines.push(Line {
                    left: s.label,
                    hours: s.total,
                    billable: Some(s.billable),
                    tail: format!("{:.1}% productive", s.productivity),
                    style: Style::Subtotal(s.level),
                }),
            }
        }
        tracing::debug!(entries = details, rows = lines.len(), "aggregated log");

        let alignment_charlen = lines
            .iter()
            .map(|l| {
                l.left.chars().count()
                    + base::util::BOUNDING_SPACES_COUNT
                    + base::util::MIN_DASHES_COUNT
                    + l.hours.charlen()
            })
            .max()
            .unwrap_or_default();
        let billable_charlen = lines
            .iter()
            .filter_map(|l| l.billable.map(base::Hours::charlen))
            .max()
            .unwrap_or_default();
        let tail_charlen = (self.term_width > 0).then(|| {
            self.term_width
                .max(base::util::MIN_TERM_WIDTH)
                .saturating_sub(alignment_charlen + 1 + billable_charlen + 2)
        });

        Logprinter {
            charset: &self.charset,
            lines,
            alignment_charlen,
            billable_charlen,
            tail_charlen,
        }
    }

    fn detail_line(&self, entry: &base::Entry, ignored: bool) -> Line {
        let mut tail = self.projects.label(entry.project_id());
        if !entry.description().is_empty() {
            tail.push_str(": ");
            tail.extend(entry.description().chars().map(|c| match c {
                '\n' | '\r' | '\t' => ' ',
                c => c,
            }));
        }
        let mut flags = String::new();
        if let base::EntryDate::Invalid(raw) = entry.date() {
            flags.push_str(&format!(" [{}: {}]", base::EntryDate::INVALID_LABEL, raw));
        }
        if ignored {
            flags.push_str(IGNORED_FLAG);
        }
        Line {
            left: format!("#{}", entry.id()),
            hours: entry.hours(),
            billable: entry.billable().then_some(entry.hours()),
            tail,
            style: Style::Detail {
                flags,
                ignored,
                mark: self
                    .mark
                    .and_then(|(id, mark)| (id == entry.id()).then_some(mark)),
            },
        }
    }
}

impl Logprinter<'_> {
    fn write_line(&self, f: &mut std::fmt::Formatter<'_>, l: &Line) -> std::fmt::Result {
        let dash_count = self.alignment_charlen
            - l.left.chars().count()
            - base::util::BOUNDING_SPACES_COUNT
            - l.hours.charlen();
        let mut s = String::with_capacity(self.alignment_charlen + l.tail.len() + 16);
        s.push_str(&l.left);
        s.push(' ');
        s.extend(std::iter::repeat_n(self.charset.dash, dash_count));
        s.push(' ');
        s.push_str(&l.hours.to_string());
        s.push(' ');
        match l.billable {
            Some(b) => s.push_str(&format!("{:>w$}", b.to_string(), w = self.billable_charlen)),
            None => s.extend(std::iter::repeat_n(' ', self.billable_charlen)),
        }
        s.push_str("  ");

        match l.style {
            Style::Subtotal(level) => {
                s.push_str(&l.tail);
                let paint: fn(&str) -> colored::ColoredString = match level {
                    Level::Day => |s| s.cyan(),
                    Level::Week => |s| s.blue(),
                    Level::Month => |s| s.magenta(),
                    Level::Total => |s| s.bold(),
                };
                writeln!(f, "{}", self.charset.paint(&s, paint))
            }
            Style::Detail {
                ref flags,
                ignored,
                mark,
            } => {
                match self.tail_charlen {
                    Some(n) => s.push_str(&base::util::truncate(
                        &l.tail,
                        n.saturating_sub(flags.chars().count()),
                    )),
                    None => s.push_str(&l.tail),
                }
                s.push_str(flags);
                if ignored {
                    f.write_str(&self.charset.paint(&s, |s| s.dimmed()))?;
                } else {
                    f.write_str(&s)?;
                }
                if let Some(mark) = mark {
                    f.write_str(&self.charset.paint(mark.text(), mark.color()))?;
                }
                writeln!(f)
            }
        }
    }
}

impl std::fmt::Display for Logprinter<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for l in self.lines.iter() {
            self.write_line(f, l)?;
        }
        Ok(())
    }
}
