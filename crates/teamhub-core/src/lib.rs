pub mod answers;
pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod io;
pub mod nav;
pub mod outcome;
pub mod paths;
pub mod record;
pub mod store;
pub mod wizard;

pub use error::{Result, TeamHubError};
