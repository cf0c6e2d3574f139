/// Element addressing and bounds checks
mod index;
mod mat22;
/// Operator overloads
mod op;

pub use index::{MatIndex, OutOfBoundsError};
pub use mat22::Mat22;
