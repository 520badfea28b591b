//! Person suffixes for every tense, shared by the families.

use crate::rule::{Family, Pattern};
use crate::tense::Tense;

/// Six suffixes, one per grammatical person.
pub(crate) type Suffixes = [&'static str; 6];

/// Three suffixes, covering either the singular or the plural persons.
type Half = [&'static str; 3];

const fn join(singular: Half, plural: Half) -> Suffixes {
    [
        singular[0],
        singular[1],
        singular[2],
        plural[0],
        plural[1],
        plural[2],
    ]
}

const PRESENT_PLURAL: Half = ["ons", "ez", "ent"];

pub(crate) const PRESENT: Suffixes = join(["e", "es", "e"], PRESENT_PLURAL);
pub(crate) const PRESENT_IR: Suffixes = ["is", "is", "it", "issons", "issez", "issent"];
// Third person singular is the bare stem: il répond.
pub(crate) const PRESENT_RE: Suffixes = join(["s", "s", ""], PRESENT_PLURAL);

pub(crate) const IMPERFECT: Suffixes = ["ais", "ais", "ait", "ions", "iez", "aient"];
pub(crate) const FUTURE: Suffixes = ["ai", "as", "a", "ons", "ez", "ont"];
pub(crate) const SUBJUNCTIVE_PRESENT: Suffixes = ["e", "es", "e", "ions", "iez", "ent"];

pub(crate) const SIMPLE_PAST_A: Suffixes = ["ai", "as", "a", "âmes", "âtes", "èrent"];
pub(crate) const SIMPLE_PAST_I: Suffixes = ["is", "is", "it", "îmes", "îtes", "irent"];
pub(crate) const SIMPLE_PAST_U: Suffixes = ["us", "us", "ut", "ûmes", "ûtes", "urent"];

pub(crate) const SUBJUNCTIVE_IMPERFECT_A: Suffixes =
    ["asse", "asses", "ât", "assions", "assiez", "assent"];
pub(crate) const SUBJUNCTIVE_IMPERFECT_I: Suffixes =
    ["isse", "isses", "ît", "issions", "issiez", "issent"];
pub(crate) const SUBJUNCTIVE_IMPERFECT_U: Suffixes =
    ["usse", "usses", "ût", "ussions", "ussiez", "ussent"];

/// Look up the suffixes a family and pattern use for the given tense.
pub(crate) fn suffixes(family: Family, pattern: Pattern, tense: Tense) -> &'static Suffixes {
    match tense {
        Tense::Present => match family {
            Family::Er => &PRESENT,
            Family::Ir => &PRESENT_IR,
            Family::Re => &PRESENT_RE,
        },
        // Conditional always borrows the imperfect endings.
        Tense::Imperfect | Tense::Conditional => &IMPERFECT,
        Tense::Future => &FUTURE,
        Tense::SubjunctivePresent => &SUBJUNCTIVE_PRESENT,
        Tense::SimplePast => match pattern {
            Pattern::A => &SIMPLE_PAST_A,
            Pattern::I => &SIMPLE_PAST_I,
            Pattern::U => &SIMPLE_PAST_U,
        },
        Tense::SubjunctiveImperfect => match pattern {
            Pattern::A => &SUBJUNCTIVE_IMPERFECT_A,
            Pattern::I => &SUBJUNCTIVE_IMPERFECT_I,
            Pattern::U => &SUBJUNCTIVE_IMPERFECT_U,
        },
    }
}

/// Suffix of the present participle.
pub(crate) fn present_participle(family: Family) -> &'static str {
    match family {
        Family::Ir => "issant",
        Family::Er | Family::Re => "ant",
    }
}

/// Suffix of the past participle.
pub(crate) fn past_participle(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::A => "é",
        Pattern::I => "i",
        Pattern::U => "u",
    }
}
