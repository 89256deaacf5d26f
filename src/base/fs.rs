use crate::base;

/// Repository directory holding the config, entries and projects files.
pub struct Fs {
    dir: std::path::PathBuf,
}

/// Types persisted as a single file in the repository.
pub trait Serde: Default + ToString + std::str::FromStr {
    const FILENAME: &'static str;
}
impl Serde for base::Config {
    const FILENAME: &'static str = ".timelog.json";
}
impl Serde for base::Entrylist {
    const FILENAME: &'static str = "timelog.jsonl";
}
impl Serde for base::Projects {
    const FILENAME: &'static str = "projects.json";
}

impl Fs {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// A directory is a repository once it has a config file.
    pub fn is_repo(&self) -> bool {
        self.path::<base::Config>().is_file()
    }

    pub fn path<T>(&self) -> std::path::PathBuf
    where
        T: Serde,
    {
        self.dir.join(T::FILENAME)
    }

    /// Deserializes `T` from its file, or returns `T::default()` if the file
    /// does not exist.
    pub fn read<T>(&self) -> Result<T, ReadError>
    where
        T: Serde,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        let path = self.path::<T>();
        match std::fs::read_to_string(&path) {
            Ok(s) => {
                tracing::debug!(path = %path.display(), bytes = s.len(), "read");
                s.parse()
                    .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
                    .map_err(ReadError::Serde)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "missing, using default");
                Ok(T::default())
            }
            Err(e) => Err(ReadError::Io(e)),
        }
    }

    pub fn write<T>(&self, obj: &T) -> std::io::Result<()>
    where
        T: Serde,
    {
        let path = self.path::<T>();
        let s = obj.to_string();
        tracing::debug!(path = %path.display(), bytes = s.len(), "write");
        std::fs::write(path, s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(Box<dyn std::error::Error + Send + Sync>),
}
