use colored::Colorize;

use crate::base;

/// Hours per calendar unit, drawn as one bar per unit with billable hours
/// first and the rest after.
pub struct Barchart {
    charset: base::Charset,
    bars: Vec<(String, base::aggregator::Accumulator)>,
    max_total: base::Hours,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub bounds: base::Interval,
    pub unit: base::Datepart,
    pub term_width: usize,
    pub entries: base::Entrylist,
    /// Projects left out of every bar.
    pub ignored: std::collections::BTreeSet<base::ProjectId>,
}

impl Config {
    pub fn to_barchart(&self) -> Barchart {
        let bounds = self.entries.spanned_interval().intersection(self.bounds);
        let bars = bounds
            .iter(self.unit)
            .map(|interval| {
                let mut acc = base::aggregator::Accumulator::default();
                for e in self.entries.slice_spanning_interval(interval) {
                    if !self.ignored.contains(&e.project_id()) {
                        acc.add(e.hours(), e.billable());
                    }
                }
                (self.label(interval.start), acc)
            })
            .collect::<Vec<_>>();

        let label_charlen = match self.unit {
            base::Datepart::Year => 4,                         // yyyy
            base::Datepart::Month => 8,                        // yyyy mmm
            base::Datepart::Week | base::Datepart::Day => 10, // yyyy-mm-dd
        };
        let max_total = bars.iter().map(|(_, a)| a.total).max().unwrap_or_default();
        let max_barlen = self.term_width.max(base::util::MIN_TERM_WIDTH)
            - label_charlen
            - base::util::BOUNDING_SPACES_COUNT
            - 1 // axis
            - max_total.charlen();

        Barchart {
            charset: self.charset.clone(),
            bars,
            max_total,
            max_barlen,
        }
    }

    fn label(&self, dt: base::Date) -> String {
        let fmt = match self.unit {
            base::Datepart::Year => time::macros::format_description!("[year]"),
            base::Datepart::Month => time::macros::format_description!("[year] [month repr:short]"),
            base::Datepart::Week | base::Datepart::Day => {
                time::macros::format_description!("[year]-[month]-[day]")
            }
        };
        dt.format(fmt).expect("formatting a calendar date should succeed")
    }
}

impl Barchart {
    fn barlen(&self, val: base::Hours) -> usize {
        let x = (val.0 as f64) / (self.max_total.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }
}

impl std::fmt::Display for Barchart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.max_total == base::Hours::ZERO {
            return Ok(());
        }
        for (label, acc) in self.bars.iter() {
            write!(f, "{} {}", label, self.charset.chart_axis)?;
            let billable_len = self.barlen(acc.billable);
            let other_len = self.barlen(acc.total).saturating_sub(billable_len);
            let billable = self.charset.chart_bar_billable.to_string().repeat(billable_len);
            let other = self.charset.chart_bar_other.to_string().repeat(other_len);
            f.write_str(&self.charset.paint(&billable, |s| s.green()))?;
            f.write_str(&self.charset.paint(&other, |s| s.blue()))?;
            if billable_len + other_len > 0 {
                f.write_str(" ")?;
            }
            writeln!(f, "{}", acc.total)?;
        }
        Ok(())
    }
}
