//! Console rendering of conjugated verbs.


use std::fmt::{self, Write};

use crate::error::Error;
use crate::form::{Participles, Person, VerbForm, Word};
use crate::verb::{resolve, Verb};

const INDENT: &str = "  ";
const GAP: usize = 2;

/// How the six persons of a tense are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Singular persons on one row, plural persons on the next.
    #[default]
    Rows,
    /// Pronouns on one row, forms aligned beneath them.
    Columns,
}

/// A titled table of the six forms of one tense.
pub struct Table<'a> {
    title: &'a str,
    form: VerbForm<'a>,
    layout: Layout,
}

impl<'a> Table<'a> {
    pub fn new(title: &'a str, form: VerbForm<'a>, layout: Layout) -> Self {
        Self {
            title,
            form,
            layout,
        }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;

        match self.layout {
            Layout::Rows => {
                let cells = self
                    .form
                    .persons()
                    .map(|(person, word)| format!("{} {word}", person.pronoun()))
                    .collect::<Vec<_>>();

                let width = widest(&cells);

                for row in cells.chunks(3) {
                    write_row(f, row, width)?;
                }
            }
            Layout::Columns => {
                let pronouns = Person::ALL
                    .iter()
                    .map(|person| person.pronoun().to_owned())
                    .collect::<Vec<_>>();

                let words = self.form.iter().map(|word| word.to_string()).collect::<Vec<_>>();
                let width = widest(&pronouns).max(widest(&words));
                write_row(f, &pronouns, width)?;
                write_row(f, &words, width)?;
            }
        }

        Ok(())
    }
}

fn widest(cells: &[String]) -> usize {
    cells
        .iter()
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or_default()
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], width: usize) -> fmt::Result {
    f.write_str(INDENT)?;

    let mut it = cells.iter().peekable();

    while let Some(cell) = it.next() {
        f.write_str(cell)?;

        if it.peek().is_some() {
            for _ in cell.chars().count()..width + GAP {
                f.write_char(' ')?;
            }
        }
    }

    f.write_char('\n')
}

/// The one line summary of a verb: `en parlant, on a parlé`.
pub struct Summary<'a> {
    present: Word<'a>,
    auxiliary: Word<'static>,
    past: Word<'a>,
}

impl<'a> Summary<'a> {
    /// Build the summary, conjugating the auxiliary to find its third
    /// person singular.
    pub fn new(verb: &Verb<'a>) -> Result<Self, Error> {
        let auxiliary = resolve(verb.auxiliary().infinitive())?;
        let Participles { present, past } = verb.participles();

        Ok(Self {
            present,
            auxiliary: auxiliary.present().get(Person::ThirdSingular).clone(),
            past,
        })
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "en {}, on {} {}",
            self.present, self.auxiliary, self.past
        )
    }
}
