use std::fmt;

/// Verbs which build their compound tenses with être.
///
/// This goes by identity alone, so verbs which switch auxiliary when used
/// transitively (il a monté la valise) always report être.
pub const ETRE_VERBS: &[&str] = &[
    "être",
    "aller",
    "venir",
    "entrer",
    "sortir",
    "partir",
    "arriver",
    "monter",
    "descendre",
    "naître",
    "mourir",
    "rester",
    "passer",
    "tomber",
    "retourner",
];

/// The auxiliary verb used to build compound tenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auxiliary {
    Etre,
    Avoir,
}

impl Auxiliary {
    /// Classify a verb by its infinitive. Anything not known to take être
    /// takes avoir.
    pub fn of(infinitive: &str) -> Self {
        if ETRE_VERBS.contains(&infinitive) {
            Auxiliary::Etre
        } else {
            Auxiliary::Avoir
        }
    }

    /// Infinitive of the auxiliary itself.
    pub fn infinitive(&self) -> &'static str {
        match self {
            Auxiliary::Etre => "être",
            Auxiliary::Avoir => "avoir",
        }
    }
}

impl fmt::Display for Auxiliary {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.infinitive().fmt(f)
    }
}
