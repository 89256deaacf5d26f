pub mod edit;
pub mod init;
pub mod log;
pub mod plot;
pub mod proj;
pub mod report;
pub mod rm;
pub mod root;
pub mod view;
