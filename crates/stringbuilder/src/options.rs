//! Build-time configuration for [`StringBuilder`](crate::StringBuilder).
//!
//! None of these are adjustable at runtime. The line terminator is selected
//! with the `crlf` cargo feature; the rest are fixed.

/// Smallest non-zero capacity a builder allocates.
///
/// Every capacity handed out by
/// [`ensure_capacity`](crate::StringBuilder::ensure_capacity) is this value
/// times a power of two.
pub const MIN_CAPACITY: usize = 16;

/// Size of the stack scratch area used by the first formatting pass of
/// [`append_fmt`](crate::StringBuilder::append_fmt).
///
/// Output that renders to fewer bytes than this is copied from the scratch
/// area. Anything longer is rendered a second time directly into the
/// builder's own storage.
pub const FORMAT_SCRATCH_LEN: usize = 4096;

/// Sequence appended by [`append_line`](crate::StringBuilder::append_line).
///
/// # Default
///
/// `"\n"`, or `"\r\n"` with the `crlf` feature.
#[cfg(not(feature = "crlf"))]
pub const LINE_TERMINATOR: &str = "\n";

/// Sequence appended by [`append_line`](crate::StringBuilder::append_line).
///
/// # Default
///
/// `"\n"`, or `"\r\n"` with the `crlf` feature.
#[cfg(feature = "crlf")]
pub const LINE_TERMINATOR: &str = "\r\n";
