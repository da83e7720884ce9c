use core::fmt;

use super::StringBuilder;

impl fmt::Debug for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringBuilder")
            .field("value", &self.as_bstr())
            .field("length", &self.length)
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Lossy: invalid UTF-8 is shown as U+FFFD.
impl fmt::Display for StringBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

/// Lets `write!` target a builder. Unlike the inherent methods, a failed
/// growth surfaces here as [`fmt::Error`].
impl fmt::Write for StringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.try_append(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl AsRef<[u8]> for StringBuilder {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&str> for StringBuilder {
    fn from(text: &str) -> Self {
        let mut sb = Self::new();
        sb.append(text);
        sb
    }
}

impl From<&[u8]> for StringBuilder {
    fn from(bytes: &[u8]) -> Self {
        let mut sb = Self::new();
        sb.append(bytes);
        sb
    }
}

// Equality is on content only; capacity and spare bytes are ignored.
impl PartialEq for StringBuilder {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for StringBuilder {}

impl PartialEq<[u8]> for StringBuilder {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for StringBuilder {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for StringBuilder {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for StringBuilder {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
