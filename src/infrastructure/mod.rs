pub mod bus;
pub mod database;
pub mod http;
