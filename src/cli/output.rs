use crate::base;

/// Output of a successful command invocation, to be written to stdout.
pub enum Output {
    Str(String),
    Log(base::logprinter::Config),
    ProjectTree(base::tree::forprojects::Config),
    Barchart(base::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Log(config) => write!(f, "{}", config.to_logprinter()),
            Output::ProjectTree(config) => {
                let tree = config.to_tree().to_string();
                if tree.is_empty() {
                    writeln!(f, "No projects.")
                } else {
                    f.write_str(&tree)
                }
            }
            Output::Barchart(config) => {
                let chart = config.to_barchart().to_string();
                if chart.is_empty() {
                    writeln!(f, "No entries.")
                } else {
                    f.write_str(&chart)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Output::Str("asdf".into()), "asdf\n")]
    #[case(Output::Str("asdf\n".into()), "asdf\n")]
    #[case(
        Output::ProjectTree(base::tree::forprojects::Config {
            charset: base::Charset::default(),
            status: Default::default(),
            projects: Default::default(),
            entries: Default::default(),
        }),
        "No projects.\n"
    )]
    #[case(
        Output::Barchart(base::barchart::Config {
            charset: base::Charset::default(),
            bounds: base::Interval::MAX,
            unit: base::Datepart::Month,
            term_width: 0,
            entries: Default::default(),
            ignored: Default::default(),
        }),
        "No entries.\n"
    )]
    fn test_to_string(#[case] output: Output, #[case] want: &str) {
        assert_eq!(output.to_string(), want)
    }
}
