//! Authentication

pub(crate) mod middleware;
