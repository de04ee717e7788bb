//! Pagination requests sent to the remote streaming query.

use crate::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};

/// A request for one page of a remote result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginationRequest {
    /// The page number (0-indexed).
    pub page: u32,
    /// The number of records per page. Always greater than zero.
    pub skip: u32,
}

impl PaginationRequest {
    /// Creates a new pagination request.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `skip` is zero.
    pub fn new(page: u32, skip: u32) -> GatewayResult<Self> {
        if skip == 0 {
            return Err(GatewayError::validation("skip must be greater than zero"));
        }
        Ok(Self { page, skip })
    }

    /// Builds `pages` consecutive requests starting at page 0, all with the same `skip`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `skip` is zero.
    pub fn sequence(pages: u32, skip: u32) -> GatewayResult<Vec<Self>> {
        (0..pages).map(|page| Self::new(page, skip)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_skip() {
        let err = PaginationRequest::new(0, 0).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_sequence_is_ordered() {
        let requests = PaginationRequest::sequence(3, 10).unwrap();
        let pages: Vec<u32> = requests.iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![0, 1, 2]);
        assert!(requests.iter().all(|r| r.skip == 10));
    }

    #[test]
    fn test_sequence_of_zero_pages_is_empty() {
        assert!(PaginationRequest::sequence(0, 25).unwrap().is_empty());
    }
}
