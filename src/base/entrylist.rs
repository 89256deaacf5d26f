use crate::base;

/// Time-log entries ordered by date. Entries sharing a date keep their
/// insertion order, and entries with invalid dates come last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entrylist(Vec<base::Entry>);

impl Entrylist {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(mut inner: Vec<base::Entry>) -> Self {
        inner.sort_by(|a, b| a.date().cmp(b.date()));
        Self(inner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Smallest id not below any existing id, starting at 1.
    pub fn next_id(&self) -> base::EntryId {
        self.0.iter().map(base::Entry::id).max().unwrap_or(0) + 1
    }

    /// Interval from the earliest to the latest valid date.
    pub fn spanned_interval(&self) -> base::Interval {
        let mut valid = self.0.iter().filter_map(|e| e.date().valid());
        let Some(start) = valid.next() else {
            return base::Interval::EMPTY;
        };
        let end = valid.last().unwrap_or(start);
        base::Interval { start, end }
    }

    /// Entries with a valid date within `interval`.
    pub fn slice_spanning_interval(&self, interval: base::Interval) -> &[base::Entry] {
        if interval.is_empty() {
            return &[];
        }
        let before = |e: &base::Entry| e.date().valid().is_some_and(|dt| dt < interval.start);
        let within = |e: &base::Entry| e.date().valid().is_some_and(|dt| dt <= interval.end);
        let i = self.0.partition_point(before);
        let j = i + self.0[i..].partition_point(within);
        &self.0[i..j]
    }

    /// Entries within `interval` for which `keep` returns true. Entries with
    /// invalid dates are never excluded by `interval`, so that they surface
    /// in every listing until corrected.
    pub fn filter<F>(&self, interval: base::Interval, keep: F) -> Entrylist
    where
        F: Fn(&base::Entry) -> bool,
    {
        self.slice_spanning_interval(interval)
            .iter()
            .chain(self.invalid())
            .filter(|e| keep(*e))
            .collect()
    }

    /// Entries whose date failed to parse.
    pub fn invalid(&self) -> &[base::Entry] {
        let i = self.0.partition_point(|e| e.date().valid().is_some());
        &self.0[i..]
    }

    /// Entries on exactly the given date. For an invalid date, matches other
    /// entries carrying the same raw text.
    pub fn on_date(&self, date: &base::EntryDate) -> Entrylist {
        self.0.iter().filter(|e| e.date() == date).collect()
    }

    pub fn insert(&mut self, e: base::Entry) {
        let i = self.0.partition_point(|x| x.date() <= e.date());
        self.0.insert(i, e);
    }

    pub fn get(&self, id: base::EntryId) -> Option<&base::Entry> {
        self.0.iter().find(|e| e.id() == id)
    }

    /// Removes and returns the entry with the given id, or returns `None` and
    /// leaves the list unmodified.
    pub fn remove(&mut self, id: base::EntryId) -> Option<base::Entry> {
        let i = self.0.iter().position(|e| e.id() == id)?;
        Some(self.0.remove(i))
    }

    /// Replaces the entry sharing `e`'s id, moving it if its date changed.
    /// Returns the replaced entry, or `None` if no entry has that id.
    pub fn update(&mut self, e: base::Entry) -> Option<base::Entry> {
        let old = self.remove(e.id())?;
        self.insert(e);
        Some(old)
    }

    /// Ascending by date. Reverse it for most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &base::Entry> {
        self.0.iter()
    }

    pub fn hours_by_project(&self) -> std::collections::BTreeMap<base::ProjectId, base::Hours> {
        let mut m = std::collections::BTreeMap::new();
        for e in self.iter() {
            *m.entry(e.project_id()).or_default() += e.hours();
        }
        m
    }
}

impl IntoIterator for Entrylist {
    type Item = base::Entry;
    type IntoIter = std::vec::IntoIter<base::Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Entry> for Entrylist {
    fn from_iter<T: IntoIterator<Item = base::Entry>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Entry> for Entrylist {
    fn from_iter<T: IntoIterator<Item = &'a base::Entry>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Entrylist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in self.iter() {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid entry at line {line}")]
    Entry {
        line: usize,
        source: serde_json::Error,
    },
    #[error("duplicate entry id {id} at line {line}")]
    DuplicateId { line: usize, id: base::EntryId },
}

impl std::str::FromStr for Entrylist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seen = std::collections::HashSet::new();
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                let line = i + 1;
                let e = x
                    .parse::<base::Entry>()
                    .map_err(|source| ParseError::Entry { line, source })?;
                if !seen.insert(e.id()) {
                    return Err(ParseError::DuplicateId { line, id: e.id() });
                }
                Ok(e)
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Entrylist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ids(entries: &[base::Entry]) -> Vec<base::EntryId> {
        entries.iter().map(base::Entry::id).collect()
    }

    #[test]
    fn test_sort_on_construction() {
        let el = r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":2,"p":1,"d":"oops","h":1}
            {"id":3,"p":1,"d":"2017-03-01","h":1}
            {"id":4,"p":1,"d":"2017-03-06","h":1}
            {"id":5,"p":1,"d":"2016-12-31","h":1}
        "#
        .parse::<Entrylist>()
        .unwrap();
        assert_eq!(ids(&el.0), [5, 3, 1, 4, 2]);
        assert_eq!(ids(el.invalid()), [2]);
        assert_eq!(el.iter().rev().map(base::Entry::id).collect::<Vec<_>>(), [2, 4, 1, 3, 5]);
    }

    #[rstest]
    #[case("[]", "invalid entry at line 1")]
    #[case(
        r#"

            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":2,"p":1,"d":"2017-03-06"}
        "#,
        "invalid entry at line 4"
    )]
    #[case(
        r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":1,"p":2,"d":"2017-03-07","h":1}
        "#,
        "duplicate entry id 1 at line 3"
    )]
    fn test_fromstr_errormsg(#[case] s: &str, #[case] want: &str) {
        assert_eq!(s.parse::<Entrylist>().unwrap_err().to_string(), want)
    }

    #[rstest]
    #[case("", base::Interval::EMPTY)]
    #[case(r#"{"id":1,"p":1,"d":"bad","h":1}"#, base::Interval::EMPTY)]
    #[case(r#"{"id":1,"p":1,"d":"2017-03-06","h":1}"#, "2017-03-06")]
    #[case(
        r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":2,"p":1,"d":"2016-01-01","h":1}
            {"id":3,"p":1,"d":"bad","h":1}
        "#,
        "2016-01-01:2017-03-06"
    )]
    fn test_spanned_interval(#[case] el: Entrylist, #[case] want: base::Interval) {
        assert_eq!(el.spanned_interval(), want)
    }

    #[rstest]
    #[case(base::Interval::EMPTY, &[])]
    #[case(base::Interval::MAX, &[1, 2, 3, 4])]
    #[case("2017-03-01:2017-03-06", &[2, 3])]
    #[case("2017-03-07:", &[4])]
    #[case("2010-01-01", &[])]
    fn test_slice_spanning_interval(#[case] interval: base::Interval, #[case] want: &[u32]) {
        let el = r#"
            {"id":1,"p":1,"d":"2017-02-28","h":1}
            {"id":2,"p":1,"d":"2017-03-01","h":1}
            {"id":3,"p":1,"d":"2017-03-06","h":1}
            {"id":4,"p":1,"d":"2017-03-07","h":1}
            {"id":5,"p":1,"d":"bad","h":1}
        "#
        .parse::<Entrylist>()
        .unwrap();
        assert_eq!(ids(el.slice_spanning_interval(interval)), want)
    }

    #[test]
    fn test_filter_keeps_invalid_dates() {
        let el = r#"
            {"id":1,"p":1,"d":"2017-02-28","h":1}
            {"id":2,"p":2,"d":"2017-03-01","h":1}
            {"id":3,"p":1,"d":"2017-03-06","h":1}
            {"id":4,"p":1,"d":"bad","h":1}
            {"id":5,"p":2,"d":"worse","h":1}
        "#
        .parse::<Entrylist>()
        .unwrap();
        let march = "2017-03-01:2017-03-31".parse().unwrap();
        assert_eq!(ids(&el.filter(march, |_| true).0), [2, 3, 4, 5]);
        assert_eq!(ids(&el.filter(march, |e| e.project_id() == 1).0), [3, 4]);
        assert_eq!(ids(&el.filter(base::Interval::EMPTY, |_| true).0), [4, 5]);
    }

    #[test]
    fn test_insert_after_same_date() {
        let mut el = r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":2,"p":1,"d":"2017-03-07","h":1}
            {"id":3,"p":1,"d":"bad","h":1}
        "#
        .parse::<Entrylist>()
        .unwrap();
        el.insert(r#"{"id":4,"p":1,"d":"2017-03-06","h":1}"#.parse().unwrap());
        el.insert(r#"{"id":5,"p":1,"d":"2017-01-01","h":1}"#.parse().unwrap());
        el.insert(r#"{"id":6,"p":1,"d":"2018-01-01","h":1}"#.parse().unwrap());
        assert_eq!(ids(&el.0), [5, 1, 4, 2, 6, 3]);
        assert_eq!(el.next_id(), 7);
    }

    #[test]
    fn test_update_moves_entry() {
        let mut el = r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":2,"p":1,"d":"2017-03-07","h":1}
            {"id":3,"p":1,"d":"bad","h":1}
        "#
        .parse::<Entrylist>()
        .unwrap();
        let mut e = el.get(3).unwrap().clone();
        e.set_date(base::Date::from_ymd(2017, 3, 1).unwrap().into());
        let old = el.update(e).unwrap();
        assert_eq!(old.date().to_string(), "bad");
        assert_eq!(ids(&el.0), [3, 1, 2]);
        assert!(el.invalid().is_empty());

        let missing = r#"{"id":9,"p":1,"d":"2017-03-06","h":1}"#.parse().unwrap();
        assert!(el.update(missing).is_none());
        assert_eq!(el.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut el = r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":2,"p":1,"d":"2017-03-07","h":1}
        "#
        .parse::<Entrylist>()
        .unwrap();
        assert!(el.remove(5).is_none());
        assert_eq!(el.remove(1).map(|e| e.id()), Some(1));
        assert_eq!(ids(&el.0), [2]);
        assert_eq!(el.next_id(), 3);
        assert_eq!(Entrylist::new().next_id(), 1);
    }

    #[test]
    fn test_on_date() {
        let el = r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1}
            {"id":2,"p":1,"d":"2017-03-07","h":1}
            {"id":3,"p":1,"d":"2017-03-06","h":1}
            {"id":4,"p":1,"d":"bad","h":1}
        "#
        .parse::<Entrylist>()
        .unwrap();
        assert_eq!(ids(&el.on_date(&"2017-03-06".into()).0), [1, 3]);
        assert_eq!(ids(&el.on_date(&"bad".into()).0), [4]);
    }

    #[test]
    fn test_hours_by_project() {
        let el = r#"
            {"id":1,"p":1,"d":"2017-03-06","h":1.5}
            {"id":2,"p":2,"d":"2017-03-07","h":2}
            {"id":3,"p":1,"d":"bad","h":0.25}
        "#
        .parse::<Entrylist>()
        .unwrap();
        let got = el.hours_by_project();
        assert_eq!(got.get(&1), Some(&base::Hours(175)));
        assert_eq!(got.get(&2), Some(&base::Hours(200)));
        assert_eq!(got.get(&3), None);
    }

    #[test]
    fn test_display_roundtrip() {
        let s = "{\"id\":2,\"p\":1,\"d\":\"2017-03-06\",\"h\":4.0,\"b\":true}\n\
                 {\"id\":1,\"p\":1,\"d\":\"bad\",\"h\":1.25,\"n\":\"fix me\"}\n";
        let el = s.parse::<Entrylist>().unwrap();
        assert_eq!(el.to_string().replace("\"b\":false,", ""), s);
    }
}
