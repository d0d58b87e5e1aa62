//! HTTP method helpers used by the command line front-end

mod method;

pub use method::*;
