//! Resolution of an infinitive into a conjugable verb.

#[cfg(test)]
mod tests;

use fixed_map::Map;

use crate::auxiliary::Auxiliary;
use crate::error::Error;
use crate::form::{Participles, VerbForm, Word};
use crate::irregular::{self, Irregular, Override};
use crate::rule::{Family, Rule};
use crate::stem::{self, Stems};
use crate::tense::Tense;

/// A verb bound to its stems, ready to be conjugated.
///
/// Nothing is cached, every tense is recomputed from the stems when asked
/// for.
#[derive(Debug, Clone)]
pub struct Verb<'a> {
    infinitive: &'a str,
    stems: Stems<'a>,
    rule: Rule,
    irregular: bool,
    overrides: Map<Tense, Override>,
    present_participle: Option<&'static str>,
    past_participle: Option<&'static str>,
}

impl<'a> Verb<'a> {
    fn regular(infinitive: &'a str, family: Family, stems: Stems<'a>) -> Self {
        Self {
            infinitive,
            stems,
            rule: Rule::regular(family),
            irregular: false,
            overrides: Map::new(),
            present_participle: None,
            past_participle: None,
        }
    }

    fn irregular(entry: &'static Irregular) -> Self {
        let mut overrides = Map::new();

        for &(tense, value) in entry.tenses {
            overrides.insert(tense, value);
        }

        Self {
            infinitive: entry.infinitive,
            stems: entry.stems,
            rule: entry.rule,
            irregular: true,
            overrides,
            present_participle: entry.present_participle,
            past_participle: entry.past_participle,
        }
    }

    /// The infinitive, which is also the key the auxiliary is classified by.
    pub fn infinitive(&self) -> &'a str {
        self.infinitive
    }

    /// The stems the verb is conjugated from.
    pub fn stems(&self) -> Stems<'a> {
        self.stems
    }

    /// The rule used for tenses the verb does not override.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Test if the verb came from the irregular registry.
    pub fn is_irregular(&self) -> bool {
        self.irregular
    }

    /// Conjugate the given tense.
    ///
    /// A tense defined by the verb itself always takes precedence over the
    /// rule it otherwise follows.
    pub fn conjugate(&self, tense: Tense) -> VerbForm<'a> {
        match self.overrides.get(tense) {
            Some(Override::Literal(forms)) => VerbForm::literal(forms),
            Some(&Override::Delegate(rule, stem)) => {
                rule.conjugate(tense, Stems::new(stem, self.stems.long_stem))
            }
            None => self.rule.conjugate(tense, self.stems),
        }
    }

    /// Iterate over every tense in print order.
    pub fn tenses(&self) -> impl Iterator<Item = (Tense, VerbForm<'a>)> + '_ {
        Tense::ALL
            .into_iter()
            .map(move |tense| (tense, self.conjugate(tense)))
    }

    pub fn present(&self) -> VerbForm<'a> {
        self.conjugate(Tense::Present)
    }

    pub fn imperfect(&self) -> VerbForm<'a> {
        self.conjugate(Tense::Imperfect)
    }

    pub fn simple_past(&self) -> VerbForm<'a> {
        self.conjugate(Tense::SimplePast)
    }

    pub fn future(&self) -> VerbForm<'a> {
        self.conjugate(Tense::Future)
    }

    pub fn conditional(&self) -> VerbForm<'a> {
        self.conjugate(Tense::Conditional)
    }

    pub fn subjunctive_present(&self) -> VerbForm<'a> {
        self.conjugate(Tense::SubjunctivePresent)
    }

    pub fn subjunctive_imperfect(&self) -> VerbForm<'a> {
        self.conjugate(Tense::SubjunctiveImperfect)
    }

    pub fn present_participle(&self) -> Word<'a> {
        match self.present_participle {
            Some(word) => Word::new([word]),
            None => self.rule.present_participle(self.stems),
        }
    }

    pub fn past_participle(&self) -> Word<'a> {
        match self.past_participle {
            Some(word) => Word::new([word]),
            None => self.rule.past_participle(self.stems),
        }
    }

    /// Both participles, present first.
    pub fn participles(&self) -> Participles<'a> {
        Participles {
            present: self.present_participle(),
            past: self.past_participle(),
        }
    }

    /// The auxiliary used to build compound tenses.
    pub fn auxiliary(&self) -> Auxiliary {
        Auxiliary::of(self.infinitive)
    }
}

/// Resolve an infinitive into a verb.
///
/// Irregular verbs are looked up first, otherwise the verb is classified by
/// its final two characters.
///
/// # Examples
///
/// ```
/// let verb = conjugate::resolve("finir")?;
/// assert_eq!(verb.present(), ["finis", "finis", "finit", "finissons", "finissez", "finissent"]);
/// assert_eq!(verb.participles(), ["finissant", "fini"]);
/// # Ok::<_, conjugate::Error>(())
/// ```
pub fn resolve(infinitive: &str) -> Result<Verb<'_>, Error> {
    if let Some(entry) = irregular::lookup(&irregular::capitalize(infinitive)) {
        tracing::debug!(infinitive, key = entry.key, "irregular verb");
        return Ok(Verb::irregular(entry));
    }

    let (family, stems) = stem::resolve(infinitive)?;
    tracing::debug!(infinitive, %family, ?stems, "regular verb");
    Ok(Verb::regular(infinitive, family, stems))
}

/// Resolve every verb independently, keeping the input order. A verb which
/// fails does not affect the others.
pub fn resolve_all<'a, I>(verbs: I) -> Vec<Result<Verb<'a>, Error>>
where
    I: IntoIterator<Item = &'a str>,
{
    verbs.into_iter().map(resolve).collect()
}
