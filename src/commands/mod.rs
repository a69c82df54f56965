//! Command implementations

mod fetch;
mod init;
mod policy;
mod rate;

pub use fetch::fetch;
pub use init::init;
pub use policy::policy;
pub use rate::rate;
