use anyhow::Context;

use crate::base;
use crate::cli;

/// Remove a logged entry
#[derive(clap::Parser)]
pub struct Rm {
    /// Entry id
    id: base::EntryId,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(
        self,
        mut entries: base::Entrylist,
        projects: base::Projects,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let date = entries
            .get(self.id)
            .context("nonexistent entry")?
            .date()
            .clone();
        let listed = entries.on_date(&date);

        let mark = if self.confirm {
            entries.remove(self.id);
            cli::util::write_entries(fs, &entries)?;
            tracing::info!(id = self.id, %date, "removed entry");
            base::logprinter::Mark::Removed
        } else {
            base::logprinter::Mark::WouldBeRemoved
        };
        Ok(cli::util::day_listing(listed, projects, config, (self.id, mark)))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const CONFIG: &str = r#"{"useColoredOutput":false,"useUnicodeSymbols":false}"#;
    const PROJECTS: &str = r#"{
        "1": {"client":"Acme","name":"Site","billable":true},
        "2": {"client":"Internal","name":"Admin"}
    }"#;
    const ENTRIES: &str = r#"
        {"id":1,"p":1,"d":"2015-03-27","h":8,"b":true}
        {"id":2,"p":1,"d":"2015-03-30","h":4,"b":true,"n":"coding"}
        {"id":3,"p":2,"d":"2015-03-30","h":2}
        {"id":4,"p":2,"d":"yesterday","h":1}
    "#;

    cli::testing::generate_testcases![
        (
            nonexistent_entry,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "rm", "5", "--confirm"],
                    res: cli::testing::ResultMatcher::ErrGlob("nonexistent entry"),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(CONFIG)
                    .with_projects(PROJECTS)
                    .with_entries(ENTRIES),
            }
        ),
        (
            dry_run,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "rm", "3"],
                    res: cli::testing::ResultMatcher::OkExact(indoc! {"
                        #2 ----- 4.00 4.00  Acme - Site: coding
                        #3 ----- 2.00       Internal - Admin <- [WOULD BE REMOVED]
                        Total -- 6.00 4.00  66.7% productive
                    "}),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(CONFIG)
                    .with_projects(PROJECTS)
                    .with_entries(ENTRIES),
            }
        ),
        (
            normal_execution,
            cli::testing::MutCase {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "rm", "2", "--confirm"],
                        res: cli::testing::ResultMatcher::OkExact(indoc! {"
                            #2 ----- 4.00 4.00  Acme - Site: coding <- [REMOVED]
                            #3 ----- 2.00       Internal - Admin
                            Total -- 6.00 4.00  66.7% productive
                        "}),
                    },
                    cli::testing::Invocation {
                        args: &["", "rm", "4", "--confirm"],
                        res: cli::testing::ResultMatcher::OkExact(indoc! {"
                            #4 ----- 1.00       Internal - Admin [(Invalid date): yesterday] <- [REMOVED]
                            Total -- 1.00 0.00  0.0% productive
                        "}),
                    },
                    cli::testing::Invocation {
                        args: &["", "rm", "2", "--confirm"],
                        res: cli::testing::ResultMatcher::ErrGlob("nonexistent entry"),
                    },
                ],
                initial_state: cli::testing::StrState::new()
                    .with_config(CONFIG)
                    .with_projects(PROJECTS)
                    .with_entries(ENTRIES),
                final_state: cli::testing::State::new()
                    .with_config(CONFIG)
                    .with_projects(PROJECTS)
                    .with_entries(
                        r#"
                            {"id":1,"p":1,"d":"2015-03-27","h":8,"b":true}
                            {"id":3,"p":2,"d":"2015-03-30","h":2}
                        "#
                    ),
            }
        ),
    ];
}
