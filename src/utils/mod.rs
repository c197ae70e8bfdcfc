//! Utility helpers shared across layers.

mod email_validator;

pub use email_validator::{EmailFormatChecker, EmailFormatValidator};
