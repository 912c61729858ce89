//! Authentication

mod claims;
mod errors;
mod jwt;
mod models;
mod policy;
mod roles;
mod service;

pub use claims::*;
pub use errors::*;
pub use jwt::{DEFAULT_AUDIENCE, JwtVerifier, TokenError};
pub use models::*;
pub use policy::*;
pub use roles::*;
pub use service::*;
