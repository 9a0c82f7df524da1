//! Database plumbing.
//!
//! Records live in SQLite, accessed through [`sqlx`]. The schema is embedded into the binary and
//! applied when the pool is created.

mod error;
pub use error::{DatabaseError, DatabaseResult};

mod pool;
pub use pool::{ConnectError, ConnectionPool};

pub type Driver = sqlx::Sqlite;
