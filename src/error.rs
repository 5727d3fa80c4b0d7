use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
    #[error("unknown project category: {0}")]
    UnknownCategory(String),
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown sound: {0}")]
    UnknownSound(String),
    #[error("unknown skill tab: {0}")]
    UnknownTab(String),
    #[error("slide {index} out of range for {len} items")]
    SlideOutOfRange { index: usize, len: usize },
    #[error("no project with id {0}")]
    UnknownProject(String),
}
