//! Bounded formatting into caller-supplied storage.
//!
//! [`render`] behaves like C's `snprintf`: it writes as much of the output as
//! fits, never past the end of the destination, and reports the length the
//! complete output *would* have had. One byte of the destination is always
//! held back for a terminating NUL.

use core::fmt::{self, Write};

/// A `fmt::Write` sink over a fixed slice that truncates instead of failing.
struct BoundedWriter<'a> {
    dst: &'a mut [u8],
    /// Bytes actually stored in `dst`.
    written: usize,
    /// Bytes the full output requires.
    needed: usize,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        // Reserve the final slot for the terminator.
        let room = self.dst.len().saturating_sub(1).saturating_sub(self.written);
        let take = room.min(bytes.len());
        self.dst[self.written..self.written + take].copy_from_slice(&bytes[..take]);
        self.written += take;
        self.needed = self.needed.saturating_add(bytes.len());
        Ok(())
    }
}

/// Outcome of a bounded render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rendered {
    /// Length of the complete output.
    pub needed: usize,
    /// Length actually stored, excluding the terminator.
    pub written: usize,
}

impl Rendered {
    pub(crate) fn is_truncated(self) -> bool {
        self.written < self.needed
    }
}

/// Render `args` into `dst`, NUL-terminating whatever was stored.
///
/// Returns `Err` if a `Display`/`Debug` implementation involved in `args`
/// reported an error; the contents of `dst` are then unspecified.
pub(crate) fn render(dst: &mut [u8], args: fmt::Arguments<'_>) -> Result<Rendered, fmt::Error> {
    let mut w = BoundedWriter {
        dst,
        written: 0,
        needed: 0,
    };
    w.write_fmt(args)?;
    if let Some(slot) = w.dst.get_mut(w.written) {
        *slot = 0;
    }
    Ok(Rendered {
        needed: w.needed,
        written: w.written,
    })
}

#[cfg(test)]
mod tests {
    use core::fmt;

    use rstest::rstest;

    use super::render;

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[rstest]
    #[case(16, "abc", 3, 3)]
    #[case(4, "abc", 3, 3)]
    #[case(3, "abc", 3, 2)]
    #[case(1, "abc", 3, 0)]
    #[case(0, "abc", 3, 0)]
    fn reports_full_length_and_truncates(
        #[case] cap: usize,
        #[case] text: &str,
        #[case] needed: usize,
        #[case] written: usize,
    ) {
        let mut dst = [0xFFu8; 16];
        let r = render(&mut dst[..cap], format_args!("{text}")).unwrap();
        assert_eq!(r.needed, needed);
        assert_eq!(r.written, written);
        assert_eq!(&dst[..written], &text.as_bytes()[..written]);
        if cap > 0 {
            assert_eq!(dst[written], 0, "output must be NUL-terminated");
        }
    }

    #[test]
    fn counts_across_multiple_pieces() {
        let mut dst = [0u8; 8];
        let r = render(&mut dst, format_args!("{}-{}-{}", 123, "four", 5.5)).unwrap();
        assert_eq!(r.needed, "123-four-5.5".len());
        assert!(r.is_truncated());
        assert_eq!(&dst[..7], b"123-fou");
        assert_eq!(dst[7], 0);
    }

    #[test]
    fn propagates_display_errors() {
        let mut dst = [0u8; 8];
        assert!(render(&mut dst, format_args!("x{}", Failing)).is_err());
    }
}
