mod health;
mod test_connection;
mod transcribe;

pub use health::health_handler;
pub use quick_test::quick_test_handler;
pub use test_connection::test_connection_handler;
pub use transcribe::transcribe_handler;
