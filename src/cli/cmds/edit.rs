use anyhow::Context;

use crate::base;
use crate::cli;

/// Edit a logged entry
///
/// Only the given fields are changed. Setting a valid date is how entries
/// with invalid dates are corrected.
#[derive(clap::Parser)]
pub struct Edit {
    /// Entry id
    id: base::EntryId,

    /// Move the entry to another project
    #[arg(short, long)]
    project: Option<base::ProjectId>,

    /// Hours worked
    #[arg(long)]
    hours: Option<base::Hours>,

    /// Date worked
    #[arg(short, long)]
    date: Option<base::Date>,

    /// Whether the entry is billable
    #[arg(short, long, value_name = "BOOL")]
    billable: Option<bool>,

    /// Description of the work, empty to clear
    #[arg(short, long)]
    note: Option<String>,
}

impl Edit {
    pub fn run(
        &self,
        mut entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let mut e = entries.get(self.id).context("nonexistent entry")?.clone();
        if self.project.is_none()
            && self.hours.is_none()
            && self.date.is_none()
            && self.billable.is_none()
            && self.note.is_none()
        {
            anyhow::bail!("nothing to change")
        }

        if let Some(project) = self.project
            && project != e.project_id()
        {
            cli::util::loggable_project(&projects, project)?;
            e.set_project_id(project);
        }
        if let Some(hours) = self.hours {
            e.set_hours(hours);
        }
        if let Some(date) = self.date {
            e.set_date(date.into());
        }
        if let Some(billable) = self.billable {
            e.set_billable(billable);
        }
        if let Some(note) = &self.note {
            e.set_description(note.clone());
        }

        let date = e.date().clone();
        entries
            .update(e)
            .expect("entry looked up above should still exist");
        cli::util::write_entries(fs, &entries)?;
        tracing::info!(id = self.id, %date, "updated entry");

        Ok(cli::util::day_listing(
            entries.on_date(&date),
            projects,
            config,
            (self.id, base::logprinter::Mark::Updated),
        ))
    }
}
