use core::fmt;

use arrayvec::ArrayVec;

/// A word assembled from borrowed fragments, such as a stem, an infix and a
/// suffix, without allocating.
#[derive(Clone)]
pub struct Concat<'a, const N: usize> {
    storage: ArrayVec<&'a str, N>,
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Join the given fragments together. Empty fragments are skipped, so an
    /// empty suffix leaves the stem standing alone.
    pub fn new<I>(iter: I) -> Concat<'a, N>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut storage = ArrayVec::new();

        for string in iter {
            if !string.is_empty() {
                storage.push(string);
            }
        }

        Concat { storage }
    }

    /// Access the underlying fragments.
    pub fn as_slice(&self) -> &[&'a str] {
        self.storage.as_slice()
    }

    /// The last fragment, which is the suffix for suffixed forms.
    pub fn last(&self) -> Option<&'a str> {
        self.storage.last().copied()
    }

    /// Iterate over characters in the word.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.storage.iter().flat_map(|s| s.chars())
    }

    /// Test if the word has no characters.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> PartialEq<str> for Concat<'_, N> {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> PartialEq<&str> for Concat<'_, N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.storage {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}
