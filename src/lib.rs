//! docserve - minimal HTTP/1.0 file server
//!
//! Serves files from the working directory, one task per connection.

pub mod config;
pub mod http;
pub mod server;
