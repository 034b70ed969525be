pub mod response;
pub mod test_case;
pub mod test_suite;

pub use self::response::ApiResponse;
pub use self::test_case::TestCase;
pub use self::test_suite::TestSuite;
