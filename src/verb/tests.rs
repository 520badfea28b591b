use super::{resolve, resolve_all};
use crate::auxiliary::Auxiliary;
use crate::error::ErrorKind;
use crate::form::PERSONS;
use crate::irregular;
use crate::rule::{Family, Rule};
use crate::suffix::IMPERFECT;
use crate::tense::Tense;

macro_rules! test {
    ($verb:literal, $($method:ident => [$($form:literal),* $(,)?]),* $(,)?) => {{
        let verb = resolve($verb).unwrap();
        $(assert_eq!(verb.$method(), [$($form),*], "{} / {}", $verb, stringify!($method));)*
    }};
}

#[test]
fn regular_er() {
    test! {
        "parler",
        present => ["parle", "parles", "parle", "parlons", "parlez", "parlent"],
        imperfect => ["parlais", "parlais", "parlait", "parlions", "parliez", "parlaient"],
        simple_past => ["parlai", "parlas", "parla", "parlâmes", "parlâtes", "parlèrent"],
        future => ["parlerai", "parleras", "parlera", "parlerons", "parlerez", "parleront"],
        conditional => ["parlerais", "parlerais", "parlerait", "parlerions", "parleriez", "parleraient"],
        subjunctive_present => ["parle", "parles", "parle", "parlions", "parliez", "parlent"],
        subjunctive_imperfect => ["parlasse", "parlasses", "parlât", "parlassions", "parlassiez", "parlassent"],
        participles => ["parlant", "parlé"],
    };
}

#[test]
fn regular_ir() {
    test! {
        "finir",
        present => ["finis", "finis", "finit", "finissons", "finissez", "finissent"],
        imperfect => ["finissais", "finissais", "finissait", "finissions", "finissiez", "finissaient"],
        simple_past => ["finis", "finis", "finit", "finîmes", "finîtes", "finirent"],
        future => ["finirai", "finiras", "finira", "finirons", "finirez", "finiront"],
        subjunctive_present => ["finisse", "finisses", "finisse", "finissions", "finissiez", "finissent"],
        subjunctive_imperfect => ["finisse", "finisses", "finît", "finissions", "finissiez", "finissent"],
        participles => ["finissant", "fini"],
    };
}

#[test]
fn regular_re() {
    test! {
        "répondre",
        present => ["réponds", "réponds", "répond", "répondons", "répondez", "répondent"],
        imperfect => ["répondais", "répondais", "répondait", "répondions", "répondiez", "répondaient"],
        simple_past => ["répondis", "répondis", "répondit", "répondîmes", "répondîtes", "répondirent"],
        future => ["répondrai", "répondras", "répondra", "répondrons", "répondrez", "répondront"],
        conditional => ["répondrais", "répondrais", "répondrait", "répondrions", "répondriez", "répondraient"],
        subjunctive_present => ["réponde", "répondes", "réponde", "répondions", "répondiez", "répondent"],
    };
}

#[test]
fn etre() {
    test! {
        "être",
        present => ["suis", "es", "est", "sommes", "êtes", "sont"],
        imperfect => ["étais", "étais", "était", "étions", "étiez", "étaient"],
        simple_past => ["fus", "fus", "fut", "fûmes", "fûtes", "furent"],
        future => ["serai", "seras", "sera", "serons", "serez", "seront"],
        conditional => ["serais", "serais", "serait", "serions", "seriez", "seraient"],
        subjunctive_present => ["sois", "sois", "soit", "soyons", "soyez", "soient"],
        subjunctive_imperfect => ["fusse", "fusses", "fût", "fussions", "fussiez", "fussent"],
        participles => ["étant", "été"],
    };

    let verb = resolve("être").unwrap();
    assert!(verb.is_irregular());
    assert_eq!(verb.auxiliary(), Auxiliary::Etre);
    assert_eq!(verb.auxiliary().to_string(), "être");
}

#[test]
fn avoir() {
    test! {
        "avoir",
        present => ["ai", "as", "a", "avons", "avez", "ont"],
        imperfect => ["avais", "avais", "avait", "avions", "aviez", "avaient"],
        simple_past => ["eus", "eus", "eut", "eûmes", "eûtes", "eurent"],
        future => ["aurai", "auras", "aura", "aurons", "aurez", "auront"],
        subjunctive_present => ["aie", "aies", "ait", "ayons", "ayez", "aient"],
        subjunctive_imperfect => ["eusse", "eusses", "eût", "eussions", "eussiez", "eussent"],
        participles => ["ayant", "eu"],
    };
}

#[test]
fn faire() {
    test! {
        "faire",
        present => ["fais", "fais", "fait", "faisons", "faites", "font"],
        imperfect => ["faisais", "faisais", "faisait", "faisions", "faisiez", "faisaient"],
        simple_past => ["fis", "fis", "fit", "fîmes", "fîtes", "firent"],
        future => ["ferai", "feras", "fera", "ferons", "ferez", "feront"],
        subjunctive_present => ["fasse", "fasses", "fasse", "fassions", "fassiez", "fassent"],
        participles => ["faisant", "fait"],
    };
}

#[test]
fn voir() {
    test! {
        "voir",
        present => ["vois", "vois", "voit", "voyons", "voyez", "voient"],
        imperfect => ["voyais", "voyais", "voyait", "voyions", "voyiez", "voyaient"],
        simple_past => ["vis", "vis", "vit", "vîmes", "vîtes", "virent"],
        future => ["verrai", "verras", "verra", "verrons", "verrez", "verront"],
        participles => ["voyant", "vu"],
    };
}

#[test]
fn pouvoir_and_vouloir() {
    test! {
        "pouvoir",
        present => ["peux", "peux", "peut", "pouvons", "pouvez", "peuvent"],
        simple_past => ["pus", "pus", "put", "pûmes", "pûtes", "purent"],
        future => ["pourrai", "pourras", "pourra", "pourrons", "pourrez", "pourront"],
        subjunctive_present => ["puisse", "puisses", "puisse", "puissions", "puissiez", "puissent"],
        participles => ["pouvant", "pu"],
    };

    test! {
        "vouloir",
        present => ["veux", "veux", "veut", "voulons", "voulez", "veulent"],
        imperfect => ["voulais", "voulais", "voulait", "voulions", "vouliez", "voulaient"],
        simple_past => ["voulus", "voulus", "voulut", "voulûmes", "voulûtes", "voulurent"],
        conditional => ["voudrais", "voudrais", "voudrait", "voudrions", "voudriez", "voudraient"],
        participles => ["voulant", "voulu"],
    };
}

#[test]
fn savoir() {
    test! {
        "savoir",
        present => ["sais", "sais", "sait", "savons", "savez", "savent"],
        imperfect => ["savais", "savais", "savait", "savions", "saviez", "savaient"],
        subjunctive_present => ["sache", "saches", "sache", "sachions", "sachiez", "sachent"],
        simple_past => ["sus", "sus", "sut", "sûmes", "sûtes", "surent"],
        participles => ["sachant", "su"],
    };
}

#[test]
fn motion_verbs() {
    test! {
        "aller",
        present => ["vais", "vas", "va", "allons", "allez", "vont"],
        future => ["irai", "iras", "ira", "irons", "irez", "iront"],
        simple_past => ["allai", "allas", "alla", "allâmes", "allâtes", "allèrent"],
        participles => ["allant", "allé"],
    };

    test! {
        "sortir",
        present => ["sors", "sors", "sort", "sortons", "sortez", "sortent"],
        imperfect => ["sortais", "sortais", "sortait", "sortions", "sortiez", "sortaient"],
        subjunctive_present => ["sorte", "sortes", "sorte", "sortions", "sortiez", "sortent"],
        participles => ["sortant", "sorti"],
    };

    test! {
        "partir",
        present => ["pars", "pars", "part", "partons", "partez", "partent"],
        future => ["partirai", "partiras", "partira", "partirons", "partirez", "partiront"],
        participles => ["partant", "parti"],
    };

    test! {
        "venir",
        present => ["viens", "viens", "vient", "venons", "venez", "viennent"],
        simple_past => ["vins", "vins", "vint", "vînmes", "vîntes", "vinrent"],
        future => ["viendrai", "viendras", "viendra", "viendrons", "viendrez", "viendront"],
        participles => ["venant", "venu"],
    };
}

#[test]
fn life_and_death() {
    test! {
        "naître",
        present => ["nais", "nais", "naît", "naissons", "naissez", "naissent"],
        simple_past => ["naquis", "naquis", "naquit", "naquîmes", "naquîtes", "naquirent"],
        future => ["naîtrai", "naîtras", "naîtra", "naîtrons", "naîtrez", "naîtront"],
        participles => ["naissant", "né"],
    };

    test! {
        "mourir",
        present => ["meurs", "meurs", "meurt", "mourons", "mourez", "meurent"],
        simple_past => ["mourus", "mourus", "mourut", "mourûmes", "mourûtes", "moururent"],
        future => ["mourrai", "mourras", "mourra", "mourrons", "mourrez", "mourront"],
        participles => ["mourant", "mort"],
    };
}

#[test]
fn conduire() {
    test! {
        "conduire",
        present => ["conduis", "conduis", "conduit", "conduisons", "conduisez", "conduisent"],
        imperfect => ["conduisais", "conduisais", "conduisait", "conduisions", "conduisiez", "conduisaient"],
        simple_past => ["conduisis", "conduisis", "conduisit", "conduisîmes", "conduisîtes", "conduisirent"],
        future => ["conduirai", "conduiras", "conduira", "conduirons", "conduirez", "conduiront"],
        subjunctive_present => ["conduise", "conduises", "conduise", "conduisions", "conduisiez", "conduisent"],
        participles => ["conduisant", "conduit"],
    };
}

#[test]
fn irregular_takes_precedence() {
    // Ends in `re`, but must not be conjugated as répondre is.
    let verb = resolve("être").unwrap();
    assert_ne!(verb.present()[0], "fs");
    assert_eq!(verb.present()[0], "suis");

    // Capitalized input resolves to the same entry.
    let verb = resolve("Être").unwrap();
    assert_eq!(verb.infinitive(), "être");
    assert!(verb.is_irregular());
}

#[test]
fn every_form_has_six_persons() {
    let verbs = ["parler", "finir", "répondre", "manger", "choisir", "vendre"]
        .into_iter()
        .chain(irregular::infinitives());

    for infinitive in verbs {
        let verb = resolve(infinitive).unwrap();

        for (tense, form) in verb.tenses() {
            assert_eq!(form.len(), PERSONS, "{infinitive} / {tense}");
            assert!(form.iter().all(|word| !word.is_empty()), "{infinitive} / {tense}");
        }
    }
}

#[test]
fn conditional_follows_imperfect() {
    let verbs = ["parler", "finir", "répondre"]
        .into_iter()
        .chain(irregular::infinitives());

    for infinitive in verbs {
        let verb = resolve(infinitive).unwrap();
        let conditional = verb.conditional();

        for (index, suffix) in IMPERFECT.iter().enumerate() {
            let expected = format!("{}{suffix}", verb.stems().long_stem);
            assert_eq!(conditional[index], expected.as_str(), "{infinitive}");
        }
    }
}

#[test]
fn idempotent() {
    for infinitive in ["parler", "finir", "répondre", "savoir", "être"] {
        let a = resolve(infinitive).unwrap();
        let b = resolve(infinitive).unwrap();

        for tense in Tense::ALL {
            assert_eq!(a.conjugate(tense), b.conjugate(tense));
            assert_eq!(a.conjugate(tense), a.conjugate(tense));
        }

        assert_eq!(a.participles(), b.participles());
    }
}

#[test]
fn classification_is_total() {
    for infinitive in ["xyer", "abcir", "ffre", "er", "ir", "re", "éer"] {
        assert!(resolve(infinitive).is_ok(), "{infinitive}");
    }

    assert_eq!(resolve("xyer").unwrap().rule(), Rule::regular(Family::Er));
    assert_eq!(resolve("abcir").unwrap().rule(), Rule::IR);
    assert_eq!(resolve("ffre").unwrap().rule(), Rule::RE);
    assert!(!resolve("xyer").unwrap().is_irregular());
}

#[test]
fn auxiliaries() {
    for infinitive in ["aller", "venir", "sortir", "partir", "naître", "mourir", "tomber", "descendre"] {
        assert_eq!(resolve(infinitive).unwrap().auxiliary(), Auxiliary::Etre, "{infinitive}");
    }

    for infinitive in ["avoir", "parler", "finir", "faire", "vendre"] {
        assert_eq!(resolve(infinitive).unwrap().auxiliary(), Auxiliary::Avoir, "{infinitive}");
    }
}

#[test]
fn batch_continues_past_failures() {
    let results = resolve_all(["parler", "xy", "finan", "finir"]);

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().unwrap().infinitive(), "parler");
    assert_eq!(results[3].as_ref().unwrap().infinitive(), "finir");

    for (result, ending) in results[1..3].iter().zip(["xy", "an"]) {
        let Err(error) = result else {
            panic!("expected failure");
        };

        let ErrorKind::UnrecognizedEnding { ending: actual, .. } = error.kind();
        assert_eq!(&**actual, ending);
    }
}
