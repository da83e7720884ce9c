use bstr::ByteSlice;

use super::StringBuilder;

impl StringBuilder {
    /// Replaces every occurrence of `old` with `new`.
    ///
    /// Matches are found left to right and never overlap. Scanning resumes
    /// after each match in the *original* content, so a `new` that contains
    /// `old` does not cascade: replacing `"a"` with `"aa"` doubles each `a`
    /// exactly once.
    ///
    /// When `old` and `new` have the same length the bytes are overwritten in
    /// place. Otherwise the result is assembled in fresh storage, at least as
    /// large as the current capacity, which then replaces the old storage.
    /// If that storage cannot be allocated nothing changes.
    ///
    /// An empty `old` does nothing.
    pub fn replace<O: AsRef<[u8]>, N: AsRef<[u8]>>(&mut self, old: O, new: N) {
        let (old, new) = (old.as_ref(), new.as_ref());
        if self.length == 0 || old.is_empty() {
            return;
        }

        if old.len() == new.len() {
            self.replace_in_place(old, new);
        } else {
            self.replace_rebuild(old, new);
        }
    }

    fn replace_in_place(&mut self, old: &[u8], new: &[u8]) {
        let mut pos = 0;
        while let Some(found) = self.value[pos..self.length].find(old) {
            let at = pos + found;
            self.value[at..at + new.len()].copy_from_slice(new);
            pos = at + old.len();
        }
    }

    fn replace_rebuild(&mut self, old: &[u8], new: &[u8]) {
        let content = self.as_bytes();
        let matches = content.find_iter(old).count();
        if matches == 0 {
            return;
        }

        // `matches * old.len()` cannot exceed the current length.
        let Some(min_capacity) = matches
            .checked_mul(new.len())
            .and_then(|added| (content.len() - matches * old.len()).checked_add(added))
            .and_then(|n| n.checked_add(1))
        else {
            tracing::debug!(matches, "replacement length overflows, not replacing");
            return;
        };

        let mut rebuilt = Self::new();
        if rebuilt
            .ensure_capacity(min_capacity.max(self.capacity()))
            .is_err()
        {
            return;
        }

        let mut start = 0;
        for at in content.find_iter(old) {
            rebuilt.append(&content[start..at]);
            rebuilt.append(new);
            start = at + old.len();
        }
        rebuilt.append(&content[start..]);

        tracing::trace!(
            matches,
            from = self.length,
            to = rebuilt.length,
            "rebuilt buffer for replacement"
        );
        *self = rebuilt;
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::StringBuilder;

    #[rstest]
    #[case("the cat sat", "cat", "dog", "the dog sat")]
    #[case("banana", "a", "XY", "bXYnXYnXY")]
    #[case("banana", "a", "aa", "baanaanaa")]
    #[case("banana", "an", "", "ba")]
    #[case("aaaa", "aa", "b", "bb")]
    #[case("aaa", "aa", "bb", "bba")]
    #[case("aaa", "a", "", "")]
    #[case("abc", "x", "yy", "abc")]
    #[case("abc", "abc", "abc", "abc")]
    #[case("abcabc", "abc", "z", "zz")]
    fn replace_cases(#[case] start: &str, #[case] old: &str, #[case] new: &str, #[case] expected: &str) {
        let mut sb = StringBuilder::from(start);
        sb.replace(old, new);
        assert_eq!(sb, expected);
        sb.check_invariants();
    }

    #[test]
    fn equal_length_keeps_capacity_and_length() {
        let mut sb = StringBuilder::from("the cat sat");
        let cap = sb.capacity();
        sb.replace("cat", "dog");
        assert_eq!(sb, "the dog sat");
        assert_eq!(sb.len(), 11);
        assert_eq!(sb.capacity(), cap);
    }

    #[test]
    fn shrinking_replace_keeps_capacity() {
        let mut sb = StringBuilder::with_capacity(200);
        sb.append("xxxxxxxxxx");
        sb.replace("x", "");
        assert!(sb.is_empty());
        assert_eq!(sb.capacity(), 256);
        assert_eq!(sb.as_bytes_with_nul(), Some(&b"\0"[..]));
    }

    #[test]
    fn growing_replace_reallocates() {
        let mut sb = StringBuilder::from("aaaaaaaa");
        sb.replace("a", "bbbb");
        assert_eq!(sb.len(), 32);
        assert_eq!(sb.capacity(), 64);
        sb.check_invariants();
    }

    #[test]
    fn empty_inputs_are_noops() {
        let mut empty = StringBuilder::new();
        empty.replace("a", "b");
        assert_eq!(empty.capacity(), 0);

        let mut sb = StringBuilder::from("abc");
        sb.replace("", "zzz");
        assert_eq!(sb, "abc");
    }

    #[test]
    fn matches_bytes_past_embedded_nul() {
        let mut sb = StringBuilder::from(&b"a\0a"[..]);
        sb.replace("a", "bc");
        assert_eq!(sb, &b"bc\0bc"[..]);
    }
}
