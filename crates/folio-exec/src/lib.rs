pub mod contracts;
pub mod opener;

pub use contracts::*;
pub use opener::*;
