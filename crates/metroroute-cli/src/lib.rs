//! metroroute CLI library.
//!
//! Command handlers and output formatting for the `metroroute` binary. The
//! route finding itself lives in `metroroute-lib`.

pub mod commands;
pub mod output;
