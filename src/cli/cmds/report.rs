use crate::base;
use crate::cli;

/// Summarize hours and productivity by period
///
/// Prints only subtotal rows. Without any of '-d', '-w' and '-m', month
/// subtotals are shown.
#[derive(clap::Parser)]
pub struct Report {
    /// Interval of interest [default: the trailing 'reportDays' days]
    #[arg(long_help = cli::sharedopts::INTERVAL_HELP_LONG)]
    interval: Option<base::Interval>,

    /// Show day subtotals
    #[arg(short)]
    d: bool,

    /// Show week subtotals
    #[arg(short)]
    w: bool,

    /// Show month subtotals
    #[arg(short)]
    m: bool,

    #[command(flatten)]
    boundaries_opts: cli::sharedopts::BoundariesOpts,

    #[command(flatten)]
    projects_opts: cli::sharedopts::ProjectsOpts,
}

impl Report {
    pub fn run(
        self,
        entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let interval = self.interval.unwrap_or_else(|| {
            let today = base::Date::today();
            let days = i32::try_from(config.report_days).unwrap_or(i32::MAX);
            base::Interval {
                start: today
                    .shift(base::Datepart::Day, -days)
                    .unwrap_or(base::Date::MIN),
                end: today,
            }
        });
        tracing::debug!(%interval, days = interval.days(), "report interval");

        let levels = if self.d || self.w || self.m {
            base::aggregator::Levels {
                day: self.d,
                week: self.w,
                month: self.m,
            }
        } else {
            base::aggregator::Levels {
                day: false,
                week: false,
                month: true,
            }
        };
        let entries = cli::util::filter_entries(
            &entries,
            interval,
            &projects,
            &self.projects_opts.projects,
            &self.projects_opts.not_projects,
        );

        Ok(cli::Output::Log(base::logprinter::Config {
            charset: cli::util::charset_from_config(config),
            entries,
            projects,
            aggregation: base::aggregator::Config {
                ignored: config.ignored_projects.clone(),
                levels,
                boundaries: self.boundaries_opts.resolve(config),
            },
            details: false,
            mark: None,
            term_width: cli::util::term_width(),
        }))
    }
}
