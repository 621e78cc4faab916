pub mod channel;
pub mod dispatcher;
pub mod error;
pub mod opener;

pub use dispatcher::{DispatchSettings, Dispatcher, DEFAULT_HANDLER};
pub use error::{LaunchError, Result};
pub use opener::{Opener, SystemOpener};
