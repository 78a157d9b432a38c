#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod range;
pub mod uint32;

pub use error::{Diagnostic, Error, ErrorKind};
pub use range::{RangeViolation, UINT32_DOMAIN};
pub use uint32::{checked_uint32, uint32_from_i32};
