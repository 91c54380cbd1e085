//! 形态特征表

// 本文件中的数据为逐字转录的语料，不得修改。

use crate::core::models::MorphRow;

pub static MORPHOLOGY: &[(&str, &[MorphRow])] = &[
    (
        "جب ہماری کلاس لگے کرے ای",
        &[
            MorphRow::new("جب", "جب", "Subordinating Conjunction (Temporal)", "—", "Introduces time clauses."),
            MorphRow::new("ہماری کلاس", "ہماری کلاس", "[ہم + اری] = Possessive Pronoun + Noun", "اری → ہماری", "Dialectal form of 'ہماری'."),
            MorphRow::new("لگے", "لگتی", "[لگ + ے + کرے] = Root Verb + Aspect + Aux", "لگے کرے → لگتی", "Compound with habitual aspect."),
            MorphRow::new("کرے ای", "تھی", "Copula/Aspect Marker (3rd fem past)", "ای → تھی", "Reduced form of 'تھی'."),
        ],
    ),
    (
        "کہ او کتنو پختو لکھاری اے",
        &[
            MorphRow::new("کہ", "کہ", "Subordinating Conjunction", "—", "Same as Urdu."),
            MorphRow::new("او", "وہ", "3rd Person Pronoun", "او → وہ", "Dialectal variation."),
            MorphRow::new("کتنو پختو", "کتنا اچھا", "Interrogative + Adjective", "→ کتنا اچھا", "Equivalent phrase."),
            MorphRow::new("لکھاری", "لکھاری", "Agent noun", "—", "Same as Urdu."),
            MorphRow::new("اے", "ہے", "Copula", "اے → ہے", "Dialectal copula."),
        ],
    ),
    (
        "اگر وے یا لباس اے پہری راکھاں",
        &[
            MorphRow::new("اگر", "اگر", "Conditional Conjunction", "—", "Identical."),
            MorphRow::new("وے", "وہ", "Pronoun", "وے → وہ", "Mewati form."),
            MorphRow::new("یا", "یہ/اس", "Demonstrative", "→ یہ/اس", "Dialectal."),
            MorphRow::new("لباس اے", "لباس کو", "[Noun + Postposition]", "اے → کو", "Case marking difference."),
            MorphRow::new("پہری راکھاں", "پہنتے ہیں", "Verb compound", "→ پہنتے ہیں", "Aspectual equivalence."),
        ],
    ),
    (
        "گیانی اور تعلیم کا ماہر لوگن کو ای ماننواے",
        &[
            MorphRow::new("گیانی", "دانشور", "Noun", "—", "Borrowed word."),
            MorphRow::new("اور", "اور", "Conjunction", "—", "Same."),
            MorphRow::new("تعلیم کا ماہر", "تعلیم کے ماہر", "NP + Genitive", "کا → کے", "Case shift."),
            MorphRow::new("لوگن کو", "لوگوں کو", "Plural Oblique + Dative", "ن → وں", "Plural form."),
            MorphRow::new("ای", "یہ", "Demonstrative", "ای → یہ", "Variant."),
            MorphRow::new("ماننواے", "ماننا ہے", "Root + Inf + Aux", "→ ماننا ہے", "Fusion."),
        ],
    ),
    (
        "میرے مارے بی اب تک ایک اچھنبو سوای اے",
        &[
            MorphRow::new("میرے مارے", "میرے لیے", "Possessive + Postposition", "مارے → لیے", "Dialectal."),
            MorphRow::new("بی", "بھی", "Particle", "→ بھی", "Colloquial."),
            MorphRow::new("اب تک", "اب تک", "Temporal", "—", "Same."),
            MorphRow::new("ایک", "ایک", "Numeral", "—", "Identical."),
            MorphRow::new("اچھنبو سوای", "حیرانگی سی", "Adj + Postposition", "→ حیرانگی سی", "Lexical difference."),
            MorphRow::new("اے", "ہے", "Copula", "→ ہے", "Variant."),
        ],
    ),
    (
        "دنیا آ جا ری ہی",
        &[
            MorphRow::new("دنیا", "دنیا", "Noun", "—", "Same."),
            MorphRow::new("آ", "آ", "Aspectual Prefix", "—", "Identical."),
            MorphRow::new("جا ری", "جا رہی", "Verb Compound", "ری → رہی", "Phonemic reduction."),
            MorphRow::new("ہی", "ہے", "Copula", "ہی → ہے", "Variant."),
        ],
    ),
    (
        "کا ہم ماضی اے زندہ رکھ سکاں",
        &[
            MorphRow::new("کا", "کیا", "Question particle", "→ کیا", "Interrogative."),
            MorphRow::new("ہم", "ہم", "1PL Pronoun", "—", "Same."),
            MorphRow::new("ماضی اے", "ماضی کو", "Noun + Dative", "اے → کو", "Postpositional variant."),
            MorphRow::new("زندہ", "زندہ", "Adjective", "—", "Same."),
            MorphRow::new("رکھ", "رکھ", "Verb Root", "—", "Same."),
            MorphRow::new("سکاں", "سکتے ہیں", "Modal Auxiliary", "→ سکتے ہیں", "Plural auxiliary."),
        ],
    ),
    (
        "کہا میو روس میں باولا ہو گا",
        &[
            MorphRow::new("کہا", "کیا", "Interrogative", "→ کیا", "Variant."),
            MorphRow::new("میو", "میو", "Ethnonym", "—", "Same."),
            MorphRow::new("روس میں", "روس میں", "Noun + Locative", "—", "Same."),
            MorphRow::new("باولا", "پاگل", "Adjective", "→ پاگل", "Equivalent meaning."),
            MorphRow::new("ہو گا", "ہو گیا", "Auxiliary", "→ ہو گیا", "Tense/aspect difference."),
        ],
    ),
    (
        "کہا پوچھو جائیگو قبر میں",
        &[
            MorphRow::new("کہا", "کیا", "Interrogative", "→ کیا", "Variant."),
            MorphRow::new("پوچھو", "پوچھا", "Verb root", "→ پوچھا", "Dialectal form."),
            MorphRow::new("جائیگو", "جائے گا", "Passive Future", "→ جائے گا", "Future passive."),
            MorphRow::new("قبر میں", "قبر میں", "Noun + Locative", "—", "Same."),
        ],
    ),
    (
        "اوکہن جا رو اے",
        &[
            MorphRow::new("او", "وہ", "Pronoun", "او → وہ", "Variant."),
            MorphRow::new("کہن", "کہاں", "Interrogative Adverb", "کہن → کہاں", "Dialectal shift."),
            MorphRow::new("جا رو", "جا رہا", "Verb compound", "رو → رہا", "Progressive."),
            MorphRow::new("اے", "ہے", "Copula", "→ ہے", "Variant."),
        ],
    ),
    (
        "تینے کہا کھایو",
        &[
            MorphRow::new("تینے", "تم نے", "2SG + ERG", "→ تم نے", "Case marking."),
            MorphRow::new("کہا", "کیا", "Interrogative", "→ کیا", "Variant."),
            MorphRow::new("کھایو", "کھایا", "Verb (perfective)", "یو → یا", "Perfective change."),
        ],
    ),
    (
        "ہم رات کب سویا ہا",
        &[
            MorphRow::new("ہم", "ہم", "Pronoun", "—", "Same."),
            MorphRow::new("رات", "رات", "Noun", "—", "Same."),
            MorphRow::new("کب", "کب", "Interrogative", "—", "Same."),
            MorphRow::new("سویا ہا", "سوئے تھے", "Verb + Aux", "ہا → تھے", "Aux difference."),
        ],
    ),
    (
        "ای جاڑان کی بات ای",
        &[
            MorphRow::new("ای", "یہ", "Demonstrative", "→ یہ", "Variant."),
            MorphRow::new("جاڑان کی", "جاڑوں کی", "Noun + Genitive", "ان → وں", "Plural suffix."),
            MorphRow::new("بات", "بات", "Noun", "—", "Same."),
            MorphRow::new("ای", "ہے", "Copula", "→ ہے", "Variant."),
        ],
    ),
    (
        "او اچھو آدمی ہو",
        &[
            MorphRow::new("او", "وہ", "Pronoun", "او → وہ", "Dialectal."),
            MorphRow::new("اچھو", "اچھا", "Adjective", "او → اا", "Phonological."),
            MorphRow::new("آدمی", "آدمی", "Noun", "—", "Same."),
            MorphRow::new("ہو", "تھا", "Copula", "→ تھا", "Tense difference."),
        ],
    ),
    (
        "بیربانی بڑی ملوک ہی",
        &[
            MorphRow::new("بیربانی", "عورت", "Noun", "→ عورت", "Different lexeme."),
            MorphRow::new("بڑی", "بہت", "Adverb", "→ بہت", "Intensifier shift."),
            MorphRow::new("ملوک", "خوبصورت", "Adjective", "→ خوبصورت", "Semantic equivalent."),
            MorphRow::new("ہی", "تھی", "Copula", "→ تھی", "Past tense copula."),
        ],
    ),
    (
        "بوڑھی اماں نے کدی کائی کی برائی نہ کری",
        &[
            MorphRow::new("بوڑھی", "بوڑھی", "Adjective", "—", "Same."),
            MorphRow::new("اماں", "ماں", "Noun", "→ ماں", "Dialectal variant."),
            MorphRow::new("نے", "نے", "Ergative", "—", "Same."),
            MorphRow::new("کدی", "کبھی", "Adverb", "→ کبھی", "Variant."),
            MorphRow::new("کائی کی", "کسی کی", "Pronoun + Poss", "→ کسی کی", "Lexical."),
            MorphRow::new("برائی", "برائی", "Noun", "—", "Same."),
            MorphRow::new("نہ کری", "نہیں کی", "Neg + Verb", "→ نہیں کی", "Negation."),
        ],
    ),
    (
        "میواتی زبان اپنی بقا کی جنگ لڑری اے",
        &[
            MorphRow::new("میواتی زبان", "میواتی زبان", "Proper noun phrase", "—", "Same."),
            MorphRow::new("اپنی", "اپنی", "Possessive pronoun", "—", "Same."),
            MorphRow::new("بقا کی جنگ", "بقا کی جنگ", "NP + Genitive", "—", "Same."),
            MorphRow::new("لڑری", "لڑ رہی", "Verb Progressive", "ری → رہی", "Phonemic."),
            MorphRow::new("اے", "ہے", "Copula", "→ ہے", "Variant."),
        ],
    ),
    (
        "بزرگن کی بہت سی سنت ٹوٹتی دکھائی دے ری ہاں",
        &[
            MorphRow::new("بزرگن کی", "بزرگوں کی", "Plural + Gen", "ن → وں", "Plural ending."),
            MorphRow::new("بہت سی", "بہت سی", "Quantifier", "—", "Same."),
            MorphRow::new("سنت", "سنت", "Noun", "—", "Same."),
            MorphRow::new("ٹوٹتی", "ٹوٹتی", "Verb progressive", "—", "Same."),
            MorphRow::new("دکھائی دے", "دکھائی دے", "Light verb", "—", "Same."),
            MorphRow::new("ری ہاں", "رہی ہیں", "Progressive + Copula", "ری ہاں → رہی ہیں", "Dialectal plural."),
        ],
    ),
    (
        "گول مٹول سلونٹن سو بھر و چہرو",
        &[
            MorphRow::new("گول مٹول", "گول مٹول", "Adjective", "—", "Same."),
            MorphRow::new("سلونٹن", "جھریاں", "Noun", "→ جھریاں", "Lexical substitution."),
            MorphRow::new("سو", "سے", "Postposition", "→ سے", "Case marker."),
            MorphRow::new("بھر و", "بھرا", "Verb participle", "→ بھرا", "Aspect."),
            MorphRow::new("چہرو", "چہرہ", "Noun", "→ چہرہ", "Dialectal."),
        ],
    ),
    (
        "کپڑا کی لوگڑی",
        &[
            MorphRow::new("کپڑا", "کپڑا", "Noun", "—", "Same."),
            MorphRow::new("کی", "کا", "Genitive", "کی → کا", "Gender shift."),
            MorphRow::new("لوگڑی", "دوپٹہ", "Noun", "→ دوپٹہ", "Lexical."),
        ],
    ),
    (
        "یا کا منہ سو",
        &[
            MorphRow::new("یا", "یہ", "Demonstrative", "→ یہ", "Dialectal."),
            MorphRow::new("کا", "کا", "Genitive", "—", "Same."),
            MorphRow::new("منہ سو", "منہ سے", "Noun + Postposition", "سو → سے", "Postposition."),
        ],
    ),
];
