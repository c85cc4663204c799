//! End-to-end harness: spawns the `web` server and drives it over HTTP and
//! through headless Chrome.

pub mod browser;
pub mod test_server;
