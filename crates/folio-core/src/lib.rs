pub mod actions;
pub mod config;
pub mod dispatcher;
pub mod markup;
pub mod profile;
pub mod reducer;
pub mod state;

pub use actions::*;
pub use dispatcher::*;
pub use reducer::*;
pub use state::*;
