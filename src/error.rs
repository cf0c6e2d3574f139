use thiserror::Error;

use crate::mat::OutOfBoundsError;

/// Error generated when a [Mat22](crate::Mat22) can't be built from caller data
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Mat22Error {
    #[error("Buffer was the wrong length (actual: {actual}, expected: {expected})")]
    BadLength {
        actual: usize,
        expected: usize,
    },
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),
}
