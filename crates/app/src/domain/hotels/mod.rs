//! Hotels

pub mod records;
