//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct, token emission, dispatch, and the driving loop
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Number literal scanning
//! - `string` - String literal scanning
//! - `operator` - One- and two-character operators
//! - `comment` - Line comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
