/// Development utilities module
///
/// This module contains an in-memory game store used by the tests and by the
/// `--mock` development mode.
pub mod mock_client;

pub use mock_client::MockClient;
