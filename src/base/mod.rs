pub mod aggregator;
pub mod barchart;
mod cents;
mod charset;
mod config;
pub mod date;
mod datepart;
mod entry;
pub mod entrylist;
pub mod fs;
pub mod hours;
pub mod interval;
pub mod logprinter;
mod project;
mod projects;
pub mod tree;
pub mod util;

pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use datepart::Datepart;
pub use entry::Entry;
pub use entry::EntryDate;
pub use entry::EntryId;
pub use entry::ProjectId;
pub use entrylist::Entrylist;
pub use fs::Fs;
pub use hours::Hours;
pub use interval::Interval;
pub use project::Project;
pub use projects::Projects;
pub use tree::Tree;
