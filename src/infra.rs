//! Interoperability with the outside world: exporting graphs for
//! visualization and reading/writing them in a text format.

pub mod export;
pub mod io;

pub use export::{Dot, Export};
