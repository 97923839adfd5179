mod command;
mod connection;
mod mutation;
mod query;

pub use command::*;
pub use connection::*;
pub use mutation::*;
pub use query::*;

pub use sea_orm;
