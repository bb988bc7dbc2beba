// beanschk Core - Domain Logic & Ports
// NO infrastructure dependencies: the queue server is reached only through `port`

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{CheckError, Result, ServerError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
