pub mod error;
pub mod id;
pub mod marker;
pub mod weight;

pub use error::{ReplaceEdgeError, ReplaceVertexError};
pub use id::VertexId;
pub use weight::{Unweight, Weight};
