pub const INTERVAL_HELP: &str = "Interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest

Must be in the format 'A:B'. Each of 'A' or 'B' is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below). 'A' and 'B' are both optional, defaulting to 0000-01-01 and 9999-12-31 respectively.

A relative date is one of the following ('n' is optional and defaults to 0):
dn: n days from today
wn: Monday of the nth week from today
Wn: Sunday of the nth week from today
mn: first day of the nth month from today
Mn: last day of the nth month from today
yn: first day of the nth year from today
Yn: last day of the nth year from today

The following shorthands are also available:
dn = dn:dn
wn = wn:Wn
mn = mn:Mn
yn = yn:Yn

Entries with invalid dates are always shown so that they can be corrected.";

#[derive(clap::Args)]
pub struct ProjectsOpts {
    /// Wildcard patterns to match projects of interest
    ///
    /// Patterns are matched against project labels of the form
    /// 'client - name'. Use commas to separate multiple patterns. An entry is
    /// included if its project matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub projects: Vec<String>,

    /// Wildcard patterns to match projects to exclude
    ///
    /// Use commas to separate multiple patterns. Takes precedence over
    /// '--projects'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_projects: Vec<String>,
}

/// Billable flag for new entries. Without either flag, the project's default
/// is used.
#[derive(clap::Args)]
#[group(required = false, multiple = false)]
pub struct BillableOpts {
    /// Mark the entry billable
    #[arg(short, long)]
    pub billable: bool,

    /// Mark the entry non-billable
    #[arg(short = 'B', long)]
    pub non_billable: bool,
}

impl BillableOpts {
    pub fn resolve(&self, default: bool) -> bool {
        if self.billable {
            true
        } else if self.non_billable {
            false
        } else {
            default
        }
    }
}

/// Boundary handling for week and month subtotals.
#[derive(clap::Args)]
pub struct BoundariesOpts {
    /// Close weeks and months on calendar boundaries
    ///
    /// By default, a week closes after an entry dated Friday and a month when
    /// the next entry's month differs, so gaps in the log can fold a week or
    /// month into the next one. Overrides the 'boundaries' config key.
    #[arg(long)]
    pub calendar: bool,
}

impl BoundariesOpts {
    pub fn resolve(&self, config: &crate::base::Config) -> crate::base::aggregator::Boundaries {
        if self.calendar {
            crate::base::aggregator::Boundaries::Calendar
        } else {
            config.boundaries
        }
    }
}
