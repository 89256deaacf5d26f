use crate::base;

/// Repository config, stored in `.timelog.json`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Projects excluded from subtotals and productivity, such as leave.
    pub ignored_projects: std::collections::BTreeSet<base::ProjectId>,
    pub boundaries: base::aggregator::Boundaries,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    /// Trailing window of days covered by `report` when no interval is given.
    pub report_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignored_projects: Default::default(),
            boundaries: Default::default(),
            use_colored_output: true,
            use_unicode_symbols: true,
            report_days: 180,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let c = r#"{"ignoredProjects":[4,2],"boundaries":"calendar"}"#
            .parse::<Config>()
            .unwrap();
        assert_eq!(c.ignored_projects.iter().copied().collect::<Vec<_>>(), [2, 4]);
        assert_eq!(c.boundaries, base::aggregator::Boundaries::Calendar);
        assert!(c.use_colored_output);
        assert_eq!(c.report_days, 180);
    }

    #[rstest]
    #[case(r#"{"boundaries":"weekly"}"#)]
    #[case(r#"{"reportDays":-1}"#)]
    #[case(r#"{"ignored":[1]}"#)]
    fn test_rejects(#[case] s: &str) {
        assert!(s.parse::<Config>().is_err())
    }
}
