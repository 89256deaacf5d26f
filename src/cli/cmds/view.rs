use crate::base;
use crate::cli;

/// View entries with day, week and month subtotals
#[derive(clap::Parser)]
pub struct View {
    #[arg(
        default_value = "m",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    /// Hide day subtotals
    #[arg(long)]
    no_day: bool,

    /// Hide week subtotals
    #[arg(long)]
    no_week: bool,

    /// Hide month subtotals
    #[arg(long)]
    no_month: bool,

    /// Project ids to leave out of subtotals, in addition to the configured
    /// ones
    ///
    /// Entries of ignored projects are still listed, flagged '[ignored]'. Use
    /// commas to separate multiple ids.
    #[arg(short, long, value_name = "IDS", value_delimiter = ',')]
    ignore: Vec<base::ProjectId>,

    #[command(flatten)]
    boundaries_opts: cli::sharedopts::BoundariesOpts,

    #[command(flatten)]
    projects_opts: cli::sharedopts::ProjectsOpts,
}

impl View {
    pub fn run(
        self,
        entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        let entries = cli::util::filter_entries(
            &entries,
            self.interval,
            &projects,
            &self.projects_opts.projects,
            &self.projects_opts.not_projects,
        );
        let mut ignored = config.ignored_projects.clone();
        ignored.extend(self.ignore.iter().copied());

        Ok(cli::Output::Log(base::logprinter::Config {
            charset: cli::util::charset_from_config(config),
            entries,
            projects,
            aggregation: base::aggregator::Config {
                ignored,
                levels: base::aggregator::Levels {
                    day: !self.no_day,
                    week: !self.no_week,
                    month: !self.no_month,
                },
                boundaries: self.boundaries_opts.resolve(config),
            },
            details: true,
            mark: None,
            term_width: cli::util::term_width(),
        }))
    }
}
