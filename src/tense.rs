use std::fmt;

use fixed_map::Key;

/// A tense or mood which produces one form per grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Key)]
pub enum Tense {
    /// Indicative present.
    Present,
    /// Indicative imperfect.
    Imperfect,
    /// Indicative simple past, the passé simple.
    SimplePast,
    /// Indicative simple future.
    Future,
    /// Present conditional, built from the future stem with imperfect
    /// suffixes.
    Conditional,
    /// Subjunctive present.
    SubjunctivePresent,
    /// Subjunctive imperfect.
    SubjunctiveImperfect,
}

impl Tense {
    /// Every tense, in the order they are printed.
    pub const ALL: [Tense; 7] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::SimplePast,
        Tense::Future,
        Tense::Conditional,
        Tense::SubjunctivePresent,
        Tense::SubjunctiveImperfect,
    ];

    /// Keyword used to select the tense on the command line.
    pub fn ident(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Imperfect => "imperfect",
            Tense::SimplePast => "simple-past",
            Tense::Future => "future",
            Tense::Conditional => "conditional",
            Tense::SubjunctivePresent => "subjunctive-present",
            Tense::SubjunctiveImperfect => "subjunctive-imperfect",
        }
    }

    /// Longer title for the tense.
    pub fn title(&self) -> &'static str {
        match self {
            Tense::Present => "Présent (indicative present)",
            Tense::Imperfect => "Imparfait (indicative imperfect)",
            Tense::SimplePast => "Passé simple (simple past)",
            Tense::Future => "Futur simple (simple future)",
            Tense::Conditional => "Conditionnel présent (conditional)",
            Tense::SubjunctivePresent => "Subjonctif présent (subjunctive present)",
            Tense::SubjunctiveImperfect => "Subjonctif imparfait (subjunctive imperfect)",
        }
    }

    /// Parse a tense from its keyword.
    pub fn parse_keyword(keyword: &str) -> Option<Tense> {
        Tense::ALL.into_iter().find(|tense| tense.ident() == keyword)
    }
}

impl fmt::Display for Tense {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ident().fmt(f)
    }
}
