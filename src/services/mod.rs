//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
mod crypto;
mod token;

pub use auth_service::{AuthService, Authenticator, AuthenticatorBuilder};
pub use crypto::{ArgonComparator, PasswordComparator};
pub use token::{Claims, JwtTokenIssuer, TokenIssuer};
