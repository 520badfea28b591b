
use crate::error::{Error, ErrorKind};
use crate::rule::Family;

/// The pair of stems a verb is conjugated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stems<'a> {
    /// Short stem, used by every tense except the future and conditional.
    pub stem: &'a str,
    /// Long stem, used by the future and conditional.
    pub long_stem: &'a str,
}

impl<'a> Stems<'a> {
    pub(crate) const fn new(stem: &'a str, long_stem: &'a str) -> Self {
        Self { stem, long_stem }
    }
}

/// Split an infinitive into its short stem and its two character ending.
///
/// Words shorter than two characters have no stem, and the whole word is
/// reported as the ending.
pub(crate) fn split(infinitive: &str) -> (&str, &str) {
    match infinitive.char_indices().rev().nth(1) {
        Some((index, _)) => infinitive.split_at(index),
        None => ("", infinitive),
    }
}

/// Classify an infinitive by its ending and compute both of its stems.
pub(crate) fn resolve(infinitive: &str) -> Result<(Family, Stems<'_>), Error> {
    let (stem, ending) = split(infinitive);

    let family = match ending {
        "er" => Family::Er,
        "ir" => Family::Ir,
        "re" => Family::Re,
        _ => {
            return Err(Error::new(ErrorKind::UnrecognizedEnding {
                verb: infinitive.into(),
                ending: ending.into(),
            }));
        }
    };

    let long_stem = match family {
        // Both keep the whole infinitive: parler, finir.
        Family::Er | Family::Ir => infinitive,
        // Only the final `e` goes: répondre, répondr.
        Family::Re => &infinitive[..infinitive.len() - 1],
    };

    Ok((family, Stems::new(stem, long_stem)))
}
