//! Sheet controller errors.

use sheetkeeper_domain::DomainError;

/// Errors surfaced by the investigator state controller.
///
/// Every failure leaves the aggregate exactly as it was: mutations are
/// applied only after validation succeeds, or not at all.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl SheetError {
    /// The underlying domain error.
    pub fn domain(&self) -> &DomainError {
        match self {
            Self::Domain(err) => err,
        }
    }
}
