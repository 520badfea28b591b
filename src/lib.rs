//! Conjugation tables for French verbs, derived from the infinitive alone.

mod auxiliary;
pub use self::auxiliary::{Auxiliary, ETRE_VERBS};

mod concat;
pub use self::concat::Concat;

mod error;
pub use self::error::{Error, ErrorKind};

mod form;
pub use self::form::{Participles, Person, VerbForm, Word, PERSONS};

pub mod irregular;

mod rule;
pub use self::rule::{Family, Pattern, Rule};

mod stem;
pub use self::stem::Stems;

mod suffix;

pub mod table;

mod tense;
pub use self::tense::Tense;

mod verb;
pub use self::verb::{resolve, resolve_all, Verb};
