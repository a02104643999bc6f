mod connection;

pub use connection::Database;
