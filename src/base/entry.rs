use crate::base;

pub type EntryId = u32;
pub type ProjectId = u32;

/// Date of a stored entry. Stored data that fails to parse as `yyyy-mm-dd` is
/// kept verbatim rather than rejected, so that a report over it can still be
/// produced and the entry can be corrected.
///
/// Valid dates order before invalid ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryDate {
    Valid(base::Date),
    Invalid(String),
}

impl EntryDate {
    pub const INVALID_LABEL: &str = "(Invalid date)";

    pub fn valid(&self) -> Option<base::Date> {
        match self {
            EntryDate::Valid(dt) => Some(*dt),
            EntryDate::Invalid(_) => None,
        }
    }

    /// True if both dates are valid and equal. An invalid date is never the
    /// same day as anything, itself included.
    pub fn same_day(&self, other: &Self) -> bool {
        matches!((self, other), (EntryDate::Valid(a), EntryDate::Valid(b)) if a == b)
    }

    /// Formats as `Mon 06/03/2017`, or `(Invalid date)`.
    pub fn label(&self) -> String {
        match self {
            EntryDate::Valid(dt) => dt.long_label(),
            EntryDate::Invalid(_) => Self::INVALID_LABEL.to_string(),
        }
    }
}

impl From<base::Date> for EntryDate {
    fn from(value: base::Date) -> Self {
        EntryDate::Valid(value)
    }
}

impl From<&str> for EntryDate {
    fn from(value: &str) -> Self {
        match base::Date::parse_iso(value) {
            Ok(dt) => EntryDate::Valid(dt),
            Err(_) => EntryDate::Invalid(value.to_string()),
        }
    }
}

impl std::fmt::Display for EntryDate {
    /// Writes the stored form: `yyyy-mm-dd`, or the raw text of an invalid
    /// date.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryDate::Valid(dt) => write!(f, "{}", dt),
            EntryDate::Invalid(s) => f.write_str(s),
        }
    }
}

impl serde::Serialize for EntryDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EntryDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(EntryDate::from(s.as_str()))
    }
}

/// One time-log record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    id: EntryId,
    #[serde(rename = "p")]
    project_id: ProjectId,
    #[serde(rename = "d")]
    date: EntryDate,
    #[serde(rename = "h")]
    hours: base::Hours,
    #[serde(rename = "b", default)]
    billable: bool,
    #[serde(rename = "n", skip_serializing_if = "String::is_empty", default)]
    description: String,
}

impl Entry {
    pub fn new(
        id: EntryId,
        project_id: ProjectId,
        date: EntryDate,
        hours: base::Hours,
        billable: bool,
        description: String,
    ) -> Self {
        Self {
            id,
            project_id,
            date,
            hours,
            billable,
            description,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn date(&self) -> &EntryDate {
        &self.date
    }

    pub fn hours(&self) -> base::Hours {
        self.hours
    }

    pub fn billable(&self) -> bool {
        self.billable
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_project_id(&mut self, project_id: ProjectId) {
        self.project_id = project_id;
    }

    pub fn set_date(&mut self, date: EntryDate) {
        self.date = date;
    }

    pub fn set_hours(&mut self, hours: base::Hours) {
        self.hours = hours;
    }

    pub fn set_billable(&mut self, billable: bool) {
        self.billable = billable;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Entry {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
