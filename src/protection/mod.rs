//! Protection-level computation for nested fare classes, using the two
//! classic Expected Marginal Seat Revenue heuristics.

mod quantile;
mod emsr_a;
mod emsr_b;
mod solve;

pub use quantile::reserve;
pub use emsr_a::emsr_a;
pub use emsr_b::emsr_b;
pub use solve::Solve;
