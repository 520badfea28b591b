//! The families of regular conjugation and the sub-patterns they share.


use std::fmt;

use crate::form::{VerbForm, Word};
use crate::stem::Stems;
use crate::suffix;
use crate::tense::Tense;

/// The infinitive ending family, which decides the present tense, the
/// present participle and the stem used by the imperfect and subjunctive
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Verbs like parler.
    Er,
    /// Verbs like finir.
    Ir,
    /// Verbs like répondre.
    Re,
}

impl Family {
    /// Infinitive ending of the family.
    pub fn ending(&self) -> &'static str {
        match self {
            Family::Er => "er",
            Family::Ir => "ir",
            Family::Re => "re",
        }
    }

    /// Infix inserted after the stem for tenses built on the extended stem,
    /// as in nous finissions.
    fn infix(&self, tense: Tense) -> &'static str {
        match (self, tense) {
            (Family::Ir, Tense::Imperfect | Tense::SubjunctivePresent) => "iss",
            _ => "",
        }
    }
}

impl fmt::Display for Family {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.ending())
    }
}

/// The vowel pattern shared by the simple past, the subjunctive imperfect and
/// the past participle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// parlai, parlasse, parlé.
    A,
    /// finis, finisse, fini.
    I,
    /// voulus, voulusse, voulu.
    U,
}

/// A family combined with a pattern, which is everything needed to produce
/// a tense from a pair of stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub family: Family,
    pub pattern: Pattern,
}

impl Rule {
    /// The regular `-er` rule, which every other rule specializes.
    pub const ER: Rule = Rule::new(Family::Er, Pattern::A);
    /// The regular `-ir` rule.
    pub const IR: Rule = Rule::new(Family::Ir, Pattern::I);
    /// The regular `-re` rule.
    pub const RE: Rule = Rule::new(Family::Re, Pattern::I);

    pub const fn new(family: Family, pattern: Pattern) -> Self {
        Self { family, pattern }
    }

    /// The regular rule for a family.
    pub const fn regular(family: Family) -> Self {
        match family {
            Family::Er => Rule::ER,
            Family::Ir => Rule::IR,
            Family::Re => Rule::RE,
        }
    }

    /// Conjugate a tense from the given stems.
    pub(crate) fn conjugate<'a>(&self, tense: Tense, stems: Stems<'a>) -> VerbForm<'a> {
        let suffixes = suffix::suffixes(self.family, self.pattern, tense);

        match tense {
            Tense::Future | Tense::Conditional => VerbForm::suffixed([stems.long_stem], suffixes),
            _ => VerbForm::suffixed([stems.stem, self.family.infix(tense)], suffixes),
        }
    }

    /// The present participle.
    pub(crate) fn present_participle<'a>(&self, stems: Stems<'a>) -> Word<'a> {
        Word::new([stems.stem, suffix::present_participle(self.family)])
    }

    /// The past participle.
    pub(crate) fn past_participle<'a>(&self, stems: Stems<'a>) -> Word<'a> {
        Word::new([stems.stem, suffix::past_participle(self.pattern)])
    }
}
