//! Command implementations.

pub mod ask;
pub mod health;
pub mod profile;

pub use self::ask::execute_ask;
pub use self::health::execute_health;
pub use self::profile::execute_profile;
