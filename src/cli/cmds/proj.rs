use anyhow::Context;
use clap::builder::TypedValueParser;

use crate::base;
use crate::base::tree::forprojects::Status;
use crate::cli;

/// Manage projects
#[derive(clap::Parser)]
pub struct Proj {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Add(Add),
    Edit(Edit),
    Ls(Ls),
}

impl Proj {
    pub fn run(
        self,
        entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        match self.command {
            Commands::Add(cmd) => cmd.run(projects, fs),
            Commands::Edit(cmd) => cmd.run(projects, fs),
            Commands::Ls(cmd) => cmd.run(entries, projects, config),
        }
    }
}

/// Add a project
#[derive(clap::Parser)]
struct Add {
    /// Client the work is done for
    client: String,

    /// Project name, unique per client
    name: String,

    /// Optional description of the project
    #[arg(short, long, default_value_t, hide_default_value = true)]
    description: String,

    /// Log entries as billable unless told otherwise
    #[arg(short, long)]
    billable: bool,

    /// Agreed fee for the whole project
    #[arg(short, long, value_name = "AMOUNT")]
    fees: Option<base::Cents>,
}

impl Add {
    fn run(self, mut projects: base::Projects, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if projects
            .iter()
            .any(|(_, p)| p.client == self.client && p.name == self.name)
        {
            anyhow::bail!("project already exists")
        }
        let project = base::Project {
            description: self.description,
            billable: self.billable,
            fees: self.fees,
            ..base::Project::new(self.client, self.name)
        };
        let label = project.label();
        let id = projects.insert(project);
        cli::util::write_projects(fs, &projects)?;
        tracing::info!(id, %label, "added project");
        Ok(cli::Output::Str(format!("Added project #{} '{}'", id, label)))
    }
}

/// Edit a project
///
/// Only the given fields are changed. Deactivated projects keep their logged
/// entries but accept no new ones.
#[derive(clap::Parser)]
struct Edit {
    /// Project id
    id: base::ProjectId,

    #[arg(long)]
    client: Option<String>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Default billable flag for new entries
    #[arg(long, value_name = "BOOL")]
    billable: Option<bool>,

    /// Whether new entries may be logged
    #[arg(long, value_name = "BOOL")]
    active: Option<bool>,

    /// Agreed fee for the whole project, 0 to clear
    #[arg(long, value_name = "AMOUNT")]
    fees: Option<base::Cents>,
}

impl Edit {
    fn run(self, mut projects: base::Projects, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let mut p = projects.get(self.id).context("nonexistent project")?.clone();
        if let Some(client) = self.client {
            p.client = client;
        }
        if let Some(name) = self.name {
            p.name = name;
        }
        if let Some(description) = self.description {
            p.description = description;
        }
        if let Some(billable) = self.billable {
            p.billable = billable;
        }
        if let Some(active) = self.active {
            p.active = active;
        }
        if let Some(fees) = self.fees {
            p.fees = (fees != base::Cents::default()).then_some(fees);
        }
        if projects
            .iter()
            .any(|(id, q)| id != self.id && q.client == p.client && q.name == p.name)
        {
            anyhow::bail!("project already exists")
        }

        let label = p.label();
        projects
            .update(self.id, p)
            .expect("project looked up above should still exist");
        cli::util::write_projects(fs, &projects)?;
        tracing::info!(id = self.id, %label, "updated project");
        Ok(cli::Output::Str(format!("Updated project #{} '{}'", self.id, label)))
    }
}

/// List projects by client, with hours logged, fee and effective rate
#[derive(clap::Parser)]
struct Ls {
    /// Which projects to list
    #[arg(
        default_value_t = Status::Active,
        value_parser(
            clap::builder::PossibleValuesParser::new(<Status as strum::VariantNames>::VARIANTS)
                .map(|s| s.parse::<Status>().expect("should be parseable"))
        ),
    )]
    status: Status,
}

impl Ls {
    fn run(
        self,
        entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
    ) -> anyhow::Result<cli::Output> {
        Ok(cli::Output::ProjectTree(base::tree::forprojects::Config {
            charset: cli::util::charset_from_config(config),
            status: self.status,
            projects,
            entries,
        }))
    }
}
