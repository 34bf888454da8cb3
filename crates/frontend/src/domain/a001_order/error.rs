use thiserror::Error;

/// Failures of the order dashboard actions.
///
/// Each one ends the triggering action and is shown once as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Listing failed: backend unreachable, non-success status or bad payload
    #[error("Error fetching orders: {0}")]
    Fetch(String),
    /// Client-side required-field check
    #[error("{0}")]
    Validation(String),
    /// Backend rejected the update or the request failed
    #[error("Error saving order: {0}")]
    Save(String),
    /// An update for this draft is already in flight
    #[error("The order is already being saved")]
    SaveInProgress,
    /// Malformed order or item data while assembling the report
    #[error("Error generating report: {0}")]
    ReportGeneration(String),
}

impl OrderError {
    /// Message without the action prefix
    pub fn detail(&self) -> &str {
        match self {
            OrderError::Fetch(m)
            | OrderError::Validation(m)
            | OrderError::Save(m)
            | OrderError::ReportGeneration(m) => m,
            OrderError::SaveInProgress => "save in progress",
        }
    }
}
