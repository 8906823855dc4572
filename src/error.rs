use thiserror::Error;

/// Everything that can go wrong between issuing the GET and handing rows to
/// the renderer.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport failure or a non-success status for the CSV resource.
    #[error("Failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    /// Any other failure in the fetch → parse → render chain.
    #[error(transparent)]
    Chain(#[from] anyhow::Error),
}

impl LoadError {
    pub fn fetch(path: &str, reason: impl ToString) -> Self {
        LoadError::Fetch {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
