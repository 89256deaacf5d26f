use anyhow::Context;

use crate::base;
use crate::cli;

/// Time tracker with running subtotals
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Log(cli::cmds::log::Log),
    Edit(cli::cmds::edit::Edit),
    Rm(cli::cmds::rm::Rm),
    View(cli::cmds::view::View),
    Report(cli::cmds::report::Report),
    Plot(cli::cmds::plot::Plot),
    Proj(cli::cmds::proj::Proj),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let entries = fs.read::<base::Entrylist>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Entrylist>().display()
            )
        })?;
        let projects = fs.read::<base::Projects>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Projects>().display()
            )
        })?;
        tracing::debug!(
            entries = entries.len(),
            invalid = entries.invalid().len(),
            "loaded repository"
        );

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Log(cmd) => cmd.run(entries, projects, &config, fs),
            Commands::Edit(cmd) => cmd.run(entries, projects, &config, fs),
            Commands::Rm(cmd) => cmd.run(entries, projects, &config, fs),
            Commands::View(cmd) => cmd.run(entries, projects, &config),
            Commands::Report(cmd) => cmd.run(entries, projects, &config),
            Commands::Plot(cmd) => cmd.run(entries, projects, &config),
            Commands::Proj(cmd) => cmd.run(entries, projects, &config, fs),
        }
    }
}
