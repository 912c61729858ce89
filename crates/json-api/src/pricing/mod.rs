//! Price quotes

pub(crate) mod quote;
