//! Registry of irregular verbs, each with its own stems and hand-written
//! tables for the tenses that follow no rule.


use crate::form::PERSONS;
use crate::rule::{Family, Pattern, Rule};
use crate::stem::Stems;
use crate::tense::Tense;

/// How an irregular verb produces one of its tenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Override {
    /// Forms written out in full.
    Literal([&'static str; PERSONS]),
    /// Forms produced by another rule from a substitute stem, as in
    /// savoir, que je sache.
    Delegate(Rule, &'static str),
}

const fn literal(forms: [&'static str; PERSONS]) -> Override {
    Override::Literal(forms)
}

const fn delegate(rule: Rule, stem: &'static str) -> Override {
    Override::Delegate(rule, stem)
}

/// An entry in the registry.
#[derive(Debug)]
pub(crate) struct Irregular {
    /// Capitalized registry key.
    pub(crate) key: &'static str,
    pub(crate) infinitive: &'static str,
    pub(crate) stems: Stems<'static>,
    /// Rule used for every tense which is not overridden.
    pub(crate) rule: Rule,
    pub(crate) tenses: &'static [(Tense, Override)],
    pub(crate) present_participle: Option<&'static str>,
    pub(crate) past_participle: Option<&'static str>,
}

macro_rules! option {
    () => {
        None
    };
    ($value:expr) => {
        Some($value)
    };
}

macro_rules! registry {
    ($(
        $key:literal ($infinitive:literal) {
            stems: ($stem:literal, $long_stem:literal),
            rule: ($family:ident, $pattern:ident),
            $(present_participle: $present:literal,)?
            $(past_participle: $past:literal,)?
            tenses: { $($tense:ident: $value:expr),* $(,)? } $(,)?
        }
    )*) => {
        static REGISTRY: &[Irregular] = &[$(
            Irregular {
                key: $key,
                infinitive: $infinitive,
                stems: Stems::new($stem, $long_stem),
                rule: Rule::new(Family::$family, Pattern::$pattern),
                tenses: &[$((Tense::$tense, $value)),*],
                present_participle: option!($($present)?),
                past_participle: option!($($past)?),
            },
        )*];
    };
}

registry! {
    "Être" ("être") {
        stems: ("f", "ser"),
        rule: (Re, U),
        present_participle: "étant",
        past_participle: "été",
        tenses: {
            Present: literal(["suis", "es", "est", "sommes", "êtes", "sont"]),
            Imperfect: delegate(Rule::ER, "ét"),
            SubjunctivePresent: literal(["sois", "sois", "soit", "soyons", "soyez", "soient"]),
        },
    }
    "Avoir" ("avoir") {
        stems: ("e", "aur"),
        rule: (Ir, U),
        present_participle: "ayant",
        tenses: {
            Present: literal(["ai", "as", "a", "avons", "avez", "ont"]),
            Imperfect: delegate(Rule::ER, "av"),
            SubjunctivePresent: literal(["aie", "aies", "ait", "ayons", "ayez", "aient"]),
        },
    }
    "Faire" ("faire") {
        stems: ("f", "fer"),
        rule: (Re, I),
        present_participle: "faisant",
        past_participle: "fait",
        tenses: {
            Present: literal(["fais", "fais", "fait", "faisons", "faites", "font"]),
            Imperfect: delegate(Rule::ER, "fais"),
            SubjunctivePresent: delegate(Rule::ER, "fass"),
        },
    }
    "Voir" ("voir") {
        stems: ("v", "verr"),
        rule: (Ir, I),
        present_participle: "voyant",
        past_participle: "vu",
        tenses: {
            Present: literal(["vois", "vois", "voit", "voyons", "voyez", "voient"]),
            Imperfect: delegate(Rule::ER, "voy"),
            SubjunctivePresent: literal(["voie", "voies", "voie", "voyions", "voyiez", "voient"]),
        },
    }
    "Pouvoir" ("pouvoir") {
        stems: ("p", "pourr"),
        rule: (Ir, U),
        present_participle: "pouvant",
        tenses: {
            Present: literal(["peux", "peux", "peut", "pouvons", "pouvez", "peuvent"]),
            Imperfect: delegate(Rule::ER, "pouv"),
            SubjunctivePresent: delegate(Rule::ER, "puiss"),
        },
    }
    "Vouloir" ("vouloir") {
        stems: ("voul", "voudr"),
        rule: (Er, U),
        tenses: {
            Present: literal(["veux", "veux", "veut", "voulons", "voulez", "veulent"]),
            SubjunctivePresent: literal(["veuille", "veuilles", "veuille", "voulions", "vouliez", "veuillent"]),
        },
    }
    "Savoir" ("savoir") {
        stems: ("s", "saur"),
        rule: (Ir, U),
        present_participle: "sachant",
        tenses: {
            Present: literal(["sais", "sais", "sait", "savons", "savez", "savent"]),
            Imperfect: delegate(Rule::ER, "sav"),
            SubjunctivePresent: delegate(Rule::ER, "sach"),
        },
    }
    "Aller" ("aller") {
        stems: ("all", "ir"),
        rule: (Er, A),
        tenses: {
            Present: literal(["vais", "vas", "va", "allons", "allez", "vont"]),
            SubjunctivePresent: literal(["aille", "ailles", "aille", "allions", "alliez", "aillent"]),
        },
    }
    "Sortir" ("sortir") {
        stems: ("sort", "sortir"),
        rule: (Er, I),
        tenses: {
            Present: literal(["sors", "sors", "sort", "sortons", "sortez", "sortent"]),
        },
    }
    "Partir" ("partir") {
        stems: ("part", "partir"),
        rule: (Er, I),
        tenses: {
            Present: literal(["pars", "pars", "part", "partons", "partez", "partent"]),
        },
    }
    "Naître" ("naître") {
        stems: ("naqu", "naîtr"),
        rule: (Re, I),
        present_participle: "naissant",
        past_participle: "né",
        tenses: {
            Present: literal(["nais", "nais", "naît", "naissons", "naissez", "naissent"]),
            Imperfect: delegate(Rule::ER, "naiss"),
            SubjunctivePresent: delegate(Rule::ER, "naiss"),
        },
    }
    "Mourir" ("mourir") {
        stems: ("mour", "mourr"),
        rule: (Er, U),
        past_participle: "mort",
        tenses: {
            Present: literal(["meurs", "meurs", "meurt", "mourons", "mourez", "meurent"]),
            SubjunctivePresent: literal(["meure", "meures", "meure", "mourions", "mouriez", "meurent"]),
        },
    }
    "Venir" ("venir") {
        stems: ("ven", "viendr"),
        rule: (Er, U),
        tenses: {
            Present: literal(["viens", "viens", "vient", "venons", "venez", "viennent"]),
            SimplePast: literal(["vins", "vins", "vint", "vînmes", "vîntes", "vinrent"]),
            SubjunctivePresent: literal(["vienne", "viennes", "vienne", "venions", "veniez", "viennent"]),
            SubjunctiveImperfect: literal(["vinsse", "vinsses", "vînt", "vinssions", "vinssiez", "vinssent"]),
        },
    }
    "Conduire" ("conduire") {
        stems: ("conduis", "conduir"),
        rule: (Er, I),
        past_participle: "conduit",
        tenses: {
            Present: literal(["conduis", "conduis", "conduit", "conduisons", "conduisez", "conduisent"]),
        },
    }
}

/// Capitalize the first letter of a verb so it can be matched against
/// registry keys.
pub(crate) fn capitalize(verb: &str) -> String {
    let mut chars = verb.chars();

    let Some(first) = chars.next() else {
        return String::new();
    };

    first.to_uppercase().chain(chars).collect()
}

/// Look up an irregular verb by its capitalized key.
pub(crate) fn lookup(key: &str) -> Option<&'static Irregular> {
    REGISTRY.iter().find(|entry| entry.key == key)
}

/// Iterate over the infinitives of every irregular verb.
pub fn infinitives() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|entry| entry.infinitive)
}
