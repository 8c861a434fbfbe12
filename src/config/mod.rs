//! Configuration
//!
//! Static configuration is read once at startup from an optional TOML file
//! and `GOLINKS__*` environment variables, then handed to the components
//! that need it. Nothing here is global.

mod structs;

pub use structs::*;
