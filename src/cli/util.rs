use anyhow::Context;

use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Width of the attached terminal, or zero if stdout is not a terminal.
#[cfg(not(test))]
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

#[cfg(test)]
pub fn term_width() -> usize {
    0
}

/// Lists `entries`, all expected to share one date, with `mark` on the
/// affected entry and only a grand total below them.
pub fn day_listing(
    entries: base::Entrylist,
    projects: base::Projects,
    config: &base::Config,
    mark: (base::EntryId, base::logprinter::Mark),
) -> cli::Output {
    cli::Output::Log(base::logprinter::Config {
        charset: charset_from_config(config),
        entries,
        projects,
        aggregation: base::aggregator::Config {
            ignored: config.ignored_projects.clone(),
            levels: base::aggregator::Levels::NONE,
            boundaries: config.boundaries,
        },
        details: true,
        mark: Some(mark),
        term_width: term_width(),
    })
}

/// Returns the entries in `interval` whose project label matches any pattern
/// in `projects` and none in `not_projects`. Entries with invalid dates are
/// kept regardless of `interval`.
pub fn filter_entries<T, U>(
    entries: &base::Entrylist,
    interval: base::Interval,
    projects: &base::Projects,
    patterns: &[T],
    not_patterns: &[U],
) -> base::Entrylist
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let filtered = entries.filter(interval, |e| {
        let label = projects.label(e.project_id());
        incl.iter().any(|p| p.matches(&label)) && !excl.iter().any(|p| p.matches(&label))
    });
    let invalid = filtered.invalid();
    if !invalid.is_empty() {
        tracing::warn!(
            count = invalid.len(),
            ids = ?invalid.iter().map(base::Entry::id).collect::<Vec<_>>(),
            "entries with invalid dates"
        );
    }
    filtered
}

pub fn write_entries(fs: &base::Fs, entries: &base::Entrylist) -> anyhow::Result<()> {
    fs.write(entries).with_context(|| {
        format!(
            "failed to write '{}'",
            fs.path::<base::Entrylist>().display()
        )
    })
}

pub fn write_projects(fs: &base::Fs, projects: &base::Projects) -> anyhow::Result<()> {
    fs.write(projects).with_context(|| {
        format!(
            "failed to write '{}'",
            fs.path::<base::Projects>().display()
        )
    })
}

/// Looks up a project that new time may be logged against.
pub fn loggable_project(
    projects: &base::Projects,
    id: base::ProjectId,
) -> anyhow::Result<&base::Project> {
    let p = projects.get(id).context("nonexistent project")?;
    if !p.active {
        anyhow::bail!("inactive project")
    }
    Ok(p)
}
