use crate::base;
use crate::cli;

/// Plot hours per period
///
/// Billable hours are drawn first in each bar. Ignored projects are left out.
#[derive(clap::Parser)]
pub struct Plot {
    #[arg(help = cli::sharedopts::INTERVAL_HELP, long_help = cli::sharedopts::INTERVAL_HELP_LONG)]
    interval: Option<base::Interval>,

    #[command(flatten)]
    units: Units,

    #[command(flatten)]
    projects_opts: cli::sharedopts::ProjectsOpts,
}

#[derive(clap::Args)]
#[group(required = false, multiple = false)]
struct Units {
    /// Aggregate data by day
    ///
    /// The default interval is the past 2 weeks
    #[arg(short)]
    d: bool,

    /// Aggregate data by week
    ///
    /// The default interval is the past 12 weeks
    #[arg(short)]
    w: bool,

    /// Aggregate data by month [default]
    ///
    /// The default interval is the past 12 months
    #[arg(short)]
    m: bool,

    /// Aggregate data by year
    ///
    /// The default interval is the past 10 years
    #[arg(short)]
    y: bool,
}

impl Units {
    fn to_datepart(&self) -> base::Datepart {
        if self.y {
            base::Datepart::Year
        } else if self.w {
            base::Datepart::Week
        } else if self.d {
            base::Datepart::Day
        } else {
            base::Datepart::Month
        }
    }
}

impl Plot {
    pub fn run(
        self,
        entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let unit = self.units.to_datepart();
        let interval = match self.interval {
            Some(interval) => interval,
            None => match unit {
                base::Datepart::Year => "y-10:Y",
                base::Datepart::Month => "m-12:M",
                base::Datepart::Week => "w-12:W",
                base::Datepart::Day => "d-14:d",
            }
            .parse()?,
        };
        let entries = cli::util::filter_entries(
            &entries,
            interval,
            &projects,
            &self.projects_opts.projects,
            &self.projects_opts.not_projects,
        );
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            bounds: interval,
            unit,
            term_width: cli::util::term_width(),
            entries,
            ignored: config.ignored_projects.clone(),
        }))
    }
}
