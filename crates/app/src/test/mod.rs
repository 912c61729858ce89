//! Postgres-backed test support.


pub(crate) use context::TestContext;
