use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use conjugate::table::{Layout, Summary, Table};
use conjugate::{irregular, resolve_all, Tense, ETRE_VERBS};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Infinitives to conjugate, such as `parler` or `finir`.
    #[arg(name = "VERB", required_unless_present = "list_irregular")]
    verbs: Vec<String>,
    /// Only print the given tenses. Can be specified multiple times.
    #[arg(long = "tense", name = "tense")]
    tenses: Vec<String>,
    /// List the irregular verbs and the verbs conjugated with être, then exit.
    #[arg(long)]
    list_irregular: bool,
    /// Print each tense as pronoun columns instead of singular and plural
    /// rows.
    #[arg(long)]
    columns: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let stdout = std::io::stdout();
    let mut o = stdout.lock();

    if args.list_irregular {
        writeln!(o, "Irregular verbs:")?;

        for infinitive in irregular::infinitives() {
            writeln!(o, "  {infinitive}")?;
        }

        writeln!(o, "Conjugated with être:")?;

        for infinitive in ETRE_VERBS {
            writeln!(o, "  {infinitive}")?;
        }

        return Ok(());
    }

    let mut tenses = Vec::new();

    for tense in &args.tenses {
        let tense = Tense::parse_keyword(tense).with_context(|| {
            let expected = Tense::ALL.map(|tense| tense.ident()).join(", ");
            anyhow!("Invalid tense `{tense}`, expected one of: {expected}")
        })?;

        tenses.push(tense);
    }

    if tenses.is_empty() {
        tenses.extend(Tense::ALL);
    }

    let layout = if args.columns {
        Layout::Columns
    } else {
        Layout::Rows
    };

    let mut failed = 0usize;

    let verbs = resolve_all(args.verbs.iter().map(String::as_str));

    for (input, verb) in args.verbs.iter().zip(verbs) {
        let verb = match verb {
            Ok(verb) => verb,
            Err(error) => {
                tracing::warn!(verb = input.as_str(), "skipping: {error}");
                writeln!(o, "{input}: {error}")?;
                failed += 1;
                continue;
            }
        };

        writeln!(o, "{}", verb.infinitive())?;
        writeln!(o, "{}", Summary::new(&verb)?)?;

        for &tense in &tenses {
            write!(o, "{}", Table::new(tense.title(), verb.conjugate(tense), layout))?;
        }
    }

    o.flush()?;

    if failed > 0 {
        bail!("{failed} of {} verbs could not be conjugated", args.verbs.len());
    }

    Ok(())
}
