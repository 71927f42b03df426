pub mod error;
pub mod optional;
pub mod some;
pub mod none;
pub mod maybe;
pub mod equality;
pub mod iter;
pub mod construct;

#[cfg(feature = "serde")]
mod serde_impls;


pub use error::*;
pub use optional::*;
pub use some::*;
pub use none::*;
pub use maybe::*;
pub use equality::*;
pub use construct::*;
