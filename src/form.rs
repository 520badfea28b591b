use std::fmt;
use std::ops::Index;

use crate::concat::Concat;

/// A single conjugated word: stem, an optional infix and a suffix.
pub type Word<'a> = Concat<'a, 3>;

/// Number of grammatical persons in a [`VerbForm`].
pub const PERSONS: usize = 6;

/// Grammatical person, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; PERSONS] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    /// Pronoun printed in front of the form.
    pub fn pronoun(&self) -> &'static str {
        match self {
            Person::FirstSingular => "je",
            Person::SecondSingular => "tu",
            Person::ThirdSingular => "elle",
            Person::FirstPlural => "nous",
            Person::SecondPlural => "vous",
            Person::ThirdPlural => "elles",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// The six forms of a tense, ordered first singular through third plural.
#[derive(Clone, PartialEq, Eq)]
pub struct VerbForm<'a> {
    words: [Word<'a>; PERSONS],
}

impl<'a> VerbForm<'a> {
    pub(crate) fn new(words: [Word<'a>; PERSONS]) -> Self {
        Self { words }
    }

    /// Append one suffix per person to the given stem fragments.
    pub(crate) fn suffixed<const N: usize>(
        stem: [&'a str; N],
        suffixes: &[&'a str; PERSONS],
    ) -> Self {
        Self::new(suffixes.map(|suffix| Word::new(stem.into_iter().chain([suffix]))))
    }

    /// A table of literal forms.
    pub(crate) fn literal(forms: &[&'a str; PERSONS]) -> Self {
        Self::new(forms.map(|form| Word::new([form])))
    }

    /// Get the form for the given person.
    pub fn get(&self, person: Person) -> &Word<'a> {
        &self.words[person.index()]
    }

    /// Iterate over forms in person order.
    pub fn iter(&self) -> impl Iterator<Item = &Word<'a>> + '_ {
        self.words.iter()
    }

    /// Iterate over forms along with their person.
    pub fn persons(&self) -> impl Iterator<Item = (Person, &Word<'a>)> + '_ {
        Person::ALL.into_iter().zip(self.words.iter())
    }

    /// Number of forms, always [`PERSONS`].
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// A verb form is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> Index<usize> for VerbForm<'a> {
    type Output = Word<'a>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl PartialEq<[&str; PERSONS]> for VerbForm<'_> {
    fn eq(&self, other: &[&str; PERSONS]) -> bool {
        self.words.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl fmt::Debug for VerbForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.words.iter()).finish()
    }
}

/// The present and past participles.
#[derive(Clone, PartialEq, Eq)]
pub struct Participles<'a> {
    pub present: Word<'a>,
    pub past: Word<'a>,
}

impl PartialEq<[&str; 2]> for Participles<'_> {
    fn eq(&self, [present, past]: &[&str; 2]) -> bool {
        self.present == *present && self.past == *past
    }
}

impl fmt::Debug for Participles<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entry(&self.present)
            .entry(&self.past)
            .finish()
    }
}
