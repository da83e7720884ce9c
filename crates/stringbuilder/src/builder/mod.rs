//! The growable buffer itself.
//!
//! Storage is a `Vec<u8>` whose *length* is the builder's capacity: every
//! allocated byte is initialized, and the logical content is the prefix
//! `value[..length]`. Whenever anything is allocated, `value[length]` is a
//! NUL byte, so the storage is a valid C string at all times.

mod replace;
mod traits;

use alloc::{
    string::{FromUtf8Error, String},
    vec::Vec,
};
use core::{ffi::CStr, fmt, str::Utf8Error};

use bstr::{BStr, ByteSlice};

use crate::{
    error::CapacityError,
    format,
    options::{FORMAT_SCRATCH_LEN, LINE_TERMINATOR, MIN_CAPACITY},
};

/// A growable byte string that is always NUL-terminated once allocated.
///
/// Offsets taken by [`insert`](Self::insert) and [`remove`](Self::remove) are
/// raw byte positions. Nothing forces the content to be UTF-8; use
/// [`to_str`](Self::to_str) or [`into_string`](Self::into_string) to check.
///
/// Mutators never panic and never report failure. When the buffer cannot
/// grow to fit an edit, the edit is dropped and the previous content is kept
/// intact. Callers that care can compare [`len`](Self::len) before and after,
/// or call [`ensure_capacity`](Self::ensure_capacity) up front.
///
/// # Examples
///
/// ```rust
/// use stringbuilder::{LINE_TERMINATOR, StringBuilder, append_format};
///
/// let mut sb = StringBuilder::new();
/// sb.append("Some content...");
/// sb.append_line(" More content.");
/// append_format!(sb, "Some number: {} and a string: \"{}\".\n", 69, "nice");
/// sb.insert(0, "First! ");
///
/// assert_eq!(
///     sb.to_string(),
///     format!(
///         "First! Some content... More content.{LINE_TERMINATOR}Some number: 69 and a string: \"nice\".\n"
///     )
/// );
/// ```
#[derive(Clone, Default)]
pub struct StringBuilder {
    /// `value.len()` is the capacity. Bytes past `length` are scratch, except
    /// `value[length]`, which is the terminator.
    value: Vec<u8>,
    length: usize,
}

/// Smallest `16 * 2^k` that is at least `min`, or `None` on overflow.
fn grown_capacity(min: usize) -> Option<usize> {
    min.max(MIN_CAPACITY).checked_next_power_of_two()
}

impl StringBuilder {
    /// Creates an empty builder. Nothing is allocated until the first
    /// non-empty write.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: Vec::new(),
            length: 0,
        }
    }

    /// Creates an empty builder with room for at least `capacity` bytes plus
    /// the terminator.
    ///
    /// If the reservation cannot be made the builder is simply left
    /// unallocated; check [`capacity`](Self::capacity) to find out.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut sb = Self::new();
        if capacity > 0 {
            if let Some(min) = capacity.checked_add(1) {
                let _ = sb.ensure_capacity(min);
            }
        }
        sb
    }

    /// Grows the buffer so that it holds at least `min_capacity` bytes,
    /// terminator included.
    ///
    /// This is the only place storage is ever (re)allocated. Capacities are
    /// always `16 * 2^k`, which makes a run of appends cost amortized O(1)
    /// per byte. Content is preserved across the reallocation.
    ///
    /// # Errors
    ///
    /// - [`CapacityError::Overflow`] if no such capacity fits in a `usize`.
    /// - [`CapacityError::AllocationFailed`] if the allocator refuses.
    ///
    /// In both cases the builder is unchanged.
    pub fn ensure_capacity(&mut self, min_capacity: usize) -> Result<(), CapacityError> {
        if self.capacity() >= min_capacity {
            return Ok(());
        }

        let Some(capacity) = grown_capacity(min_capacity) else {
            tracing::debug!(requested = min_capacity, "capacity overflow, not growing");
            return Err(CapacityError::Overflow {
                requested: min_capacity,
            });
        };

        if let Err(source) = self.value.try_reserve_exact(capacity - self.value.len()) {
            tracing::debug!(requested = capacity, %source, "allocation failed, not growing");
            return Err(CapacityError::AllocationFailed {
                requested: capacity,
                source,
            });
        }

        tracing::trace!(from = self.value.len(), to = capacity, "growing buffer");
        // Already reserved, so this never reallocates.
        self.value.resize(capacity, 0);
        Ok(())
    }

    /// Makes room for `additional` more content bytes plus the terminator.
    fn reserve_for(&mut self, additional: usize) -> Result<(), CapacityError> {
        let min = self
            .length
            .checked_add(additional)
            .and_then(|n| n.checked_add(1))
            .ok_or(CapacityError::Overflow {
                requested: usize::MAX,
            })?;
        self.ensure_capacity(min)
    }

    /// Empties the builder while keeping its allocation.
    pub fn clear(&mut self) {
        self.length = 0;
        if let Some(first) = self.value.first_mut() {
            *first = 0;
        }
    }

    /// Frees the storage and returns the builder to the state produced by
    /// [`new`](Self::new).
    ///
    /// Dropping a builder frees its storage too; this is for reusing the same
    /// binding without holding on to a large allocation.
    pub fn release(&mut self) {
        *self = Self::new();
    }

    /// Appends `text` at the end.
    ///
    /// Empty input is a no-op and does not allocate.
    pub fn append<T: AsRef<[u8]>>(&mut self, text: T) {
        let _ = self.try_append(text.as_ref());
    }

    pub(crate) fn try_append(&mut self, bytes: &[u8]) -> Result<(), CapacityError> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.reserve_for(bytes.len())?;

        let end = self.length + bytes.len();
        self.value[self.length..end].copy_from_slice(bytes);
        self.length = end;
        self.value[end] = 0;
        Ok(())
    }

    /// Appends `text` followed by [`LINE_TERMINATOR`].
    ///
    /// The terminator is written even when `text` is empty.
    pub fn append_line<T: AsRef<[u8]>>(&mut self, text: T) {
        self.append(text);
        self.append(LINE_TERMINATOR);
    }

    /// Appends the UTF-8 encoding of `c`.
    ///
    /// `'\0'` is ignored: it would end the C string early.
    pub fn append_char(&mut self, c: char) {
        if c == '\0' {
            return;
        }
        let mut buf = [0u8; 4];
        self.append(c.encode_utf8(&mut buf));
    }

    /// Appends formatted output; see also [`append_format!`](crate::append_format).
    ///
    /// Output shorter than [`FORMAT_SCRATCH_LEN`] is rendered once on the stack
    /// and copied in. Longer output is rendered a second time straight into
    /// the tail of this builder after growing it to the exact reported
    /// length, so no intermediate heap buffer is needed.
    ///
    /// If a formatting implementation returns an error the append is
    /// abandoned and the content is unchanged. An error during the second
    /// pass comes after the buffer has grown, so the larger capacity is kept.
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) {
        let mut scratch = [0u8; FORMAT_SCRATCH_LEN];
        let Ok(probe) = format::render(&mut scratch, args) else {
            tracing::debug!("formatting failed, append abandoned");
            return;
        };

        if !probe.is_truncated() {
            self.append(&scratch[..probe.written]);
            return;
        }

        if self.reserve_for(probe.needed).is_err() {
            return;
        }
        let start = self.length;
        let tail = &mut self.value[start..=start + probe.needed];
        if let Ok(rendered) = format::render(tail, args) {
            self.length += rendered.written;
            self.value[self.length] = 0;
        } else {
            tracing::debug!("formatting failed on second pass, append abandoned");
            self.value[start] = 0;
        }
    }

    /// Inserts `text` so that it starts at byte offset `index`.
    ///
    /// An `index` at or past the end appends instead.
    pub fn insert<T: AsRef<[u8]>>(&mut self, index: usize, text: T) {
        let bytes = text.as_ref();
        if index >= self.length {
            self.append(bytes);
            return;
        }
        if bytes.is_empty() || self.reserve_for(bytes.len()).is_err() {
            return;
        }

        let end = self.length + bytes.len();
        self.value.copy_within(index..self.length, index + bytes.len());
        self.value[index..index + bytes.len()].copy_from_slice(bytes);
        self.length = end;
        self.value[end] = 0;
    }

    /// Removes up to `len` bytes starting at byte offset `index`.
    ///
    /// A range running past the end truncates at `index`. An `index` at or
    /// past the end, or a zero `len`, does nothing.
    pub fn remove(&mut self, index: usize, len: usize) {
        if index >= self.length || len == 0 {
            return;
        }

        match index.checked_add(len) {
            Some(end) if end < self.length => {
                self.value.copy_within(end..self.length, index);
                self.length -= len;
            }
            _ => self.length = index,
        }
        self.value[self.length] = 0;
    }

    /// Number of content bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether there is no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of bytes allocated, terminator included. Zero until the first
    /// allocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.value.len()
    }

    /// The content, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.value[..self.length]
    }

    /// The content including its terminator, or `None` if nothing has been
    /// allocated yet.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> Option<&[u8]> {
        self.value.get(..=self.length)
    }

    /// The content as a [`BStr`], for lossy display and byte-string helpers.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }

    /// The content as `&str`.
    ///
    /// # Errors
    ///
    /// Fails if the content is not valid UTF-8, which can happen after
    /// byte-offset edits that split a multi-byte character.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }

    /// The storage viewed as a C string.
    ///
    /// Returns `None` if nothing has been allocated. If the content itself
    /// contains a NUL byte, the C string ends there.
    #[must_use]
    pub fn as_c_str(&self) -> Option<&CStr> {
        self.as_bytes_with_nul()
            .and_then(|bytes| CStr::from_bytes_until_nul(bytes).ok())
    }

    /// Hands the content over to the caller, dropping the terminator and any
    /// spare capacity bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut value = self.value;
        value.truncate(self.length);
        value
    }

    /// Hands the content over as a `String`.
    ///
    /// # Errors
    ///
    /// Fails if the content is not valid UTF-8; the bytes can be recovered
    /// from the error.
    pub fn into_string(self) -> Result<String, FromUtf8Error> {
        String::from_utf8(self.into_bytes())
    }

    /// Asserts the structural invariants. Used by tests and the fuzzer.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn check_invariants(&self) {
        if self.value.is_empty() {
            assert_eq!(self.length, 0, "unallocated builder must be empty");
        } else {
            assert!(self.length < self.value.len(), "length must leave room for the terminator");
            assert_eq!(self.value[self.length], 0, "missing terminator");
            let cap = self.value.len();
            assert!(
                cap >= MIN_CAPACITY && cap.is_power_of_two(),
                "capacity {cap} is not 16 * 2^k"
            );
        }
    }
}
