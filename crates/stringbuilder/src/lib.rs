//! A growable byte string builder that keeps its storage NUL-terminated.
//!
//! [`StringBuilder`] tracks its content length and allocated capacity
//! separately, grows geometrically from 16 bytes, and supports appending
//! (plain, line, char, formatted), inserting and removing at byte offsets,
//! and substring replacement. Edits that would need more memory than can be
//! had are dropped rather than panicking.
//!
//! ```rust
//! use stringbuilder::StringBuilder;
//!
//! let mut sb = StringBuilder::from("banana");
//! sb.replace("a", "XY");
//! assert_eq!(sb, "bXYnXYnXY");
//! assert_eq!(sb.as_bytes_with_nul(), Some(&b"bXYnXYnXY\0"[..]));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod error;
mod format;
pub mod options;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use builder::StringBuilder;
pub use error::CapacityError;
pub use options::{FORMAT_SCRATCH_LEN, LINE_TERMINATOR, MIN_CAPACITY};

/// Appends formatted text to a [`StringBuilder`].
///
/// Takes the same arguments as [`format!`](alloc::format) after the builder
/// and forwards them to [`StringBuilder::append_fmt`].
///
/// ```rust
/// use stringbuilder::{StringBuilder, append_format};
///
/// let mut sb = StringBuilder::new();
/// for i in 1..=3 {
///     append_format!(sb, "{i}. Some item\n");
/// }
/// assert_eq!(sb, "1. Some item\n2. Some item\n3. Some item\n");
/// ```
#[macro_export]
macro_rules! append_format {
    ($sb:expr, $($arg:tt)*) => {
        ($sb).append_fmt(::core::format_args!($($arg)*))
    };
}
