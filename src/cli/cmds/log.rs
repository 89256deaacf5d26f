use crate::base;
use crate::cli;

/// Log hours worked on a project
#[derive(clap::Parser)]
pub struct Log {
    /// Project id, as listed by 'proj ls'
    project: base::ProjectId,

    /// Hours worked, up to two decimal places
    hours: base::Hours,

    /// Date worked
    #[arg(default_value = "d")]
    date: base::Date,

    /// Optional description of the work
    #[arg(short, long, default_value_t, hide_default_value = true)]
    note: String,

    #[command(flatten)]
    billable: cli::sharedopts::BillableOpts,
}

impl Log {
    pub fn run(
        &self,
        mut entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let project = cli::util::loggable_project(&projects, self.project)?;
        let billable = self.billable.resolve(project.billable);

        let id = entries.next_id();
        let date = base::EntryDate::from(self.date);
        entries.insert(base::Entry::new(
            id,
            self.project,
            date.clone(),
            self.hours,
            billable,
            self.note.clone(),
        ));
        cli::util::write_entries(fs, &entries)?;
        tracing::info!(id, project = self.project, %date, "logged entry");

        Ok(cli::util::day_listing(
            entries.on_date(&date),
            projects,
            config,
            (id, base::logprinter::Mark::Added),
        ))
    }
}
