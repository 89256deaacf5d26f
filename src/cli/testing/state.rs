use crate::base;

/// Objects deserialized from a repository directory. `None` fields
/// correspond to nonexistent files.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    entries: Option<base::Entrylist>,
    projects: Option<base::Projects>,
}

impl State {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    pub fn with_entries<T>(mut self, entries: T) -> Self
    where
        T: TryInto<base::Entrylist> + std::fmt::Debug,
        <T as TryInto<base::Entrylist>>::Error: std::fmt::Debug,
    {
        self.entries = Some(entries.try_into().unwrap());
        self
    }

    pub fn with_projects<T>(mut self, projects: T) -> Self
    where
        T: TryInto<base::Projects> + std::fmt::Debug,
        <T as TryInto<base::Projects>>::Error: std::fmt::Debug,
    {
        self.projects = Some(projects.try_into().unwrap());
        self
    }

    pub fn from_fs(fs: &base::Fs) -> Self {
        macro_rules! read {
            ($t:ty) => {{
                let p = fs.path::<$t>();
                if p.exists() {
                    Some(fs.read::<$t>().unwrap())
                } else {
                    None
                }
            }};
        }

        Self {
            config: read!(base::Config),
            entries: read!(base::Entrylist),
            projects: read!(base::Projects),
        }
    }
}

/// File contents of a repository directory. `None` fields correspond to
/// nonexistent files.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    entries: Option<&'a str>,
    projects: Option<&'a str>,
}

impl<'a> StrState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    pub fn with_entries(mut self, s: &'a str) -> Self {
        self.entries = Some(s);
        self
    }

    pub fn with_projects(mut self, s: &'a str) -> Self {
        self.projects = Some(s);
        self
    }

    /// Writes contents verbatim to `fs`. Panics if any field does not parse.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, field: Option<&str>)
        where
            T: std::fmt::Debug + base::fs::Serde,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = field {
                let obj = s.parse::<T>();
                assert!(obj.is_ok(), "{:?}", obj);
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Entrylist>(fs, self.entries);
        write::<base::Projects>(fs, self.projects);
    }

    pub fn to_state(&self) -> State {
        let mut state = State::new();
        if let Some(s) = self.config {
            state = state.with_config(s);
        }
        if let Some(s) = self.entries {
            state = state.with_entries(s);
        }
        if let Some(s) = self.projects {
            state = state.with_projects(s);
        }
        state
    }
}

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}
