//! 依存分析表

// 本文件中的数据为逐字转录的语料，不得修改。

use crate::core::models::DependencyRow;

pub static DEPENDENCY: &[(&str, &[DependencyRow])] = &[
    (
        "جب ہماری کلاس لگے کرے ای",
        &[
            DependencyRow::new("جب", "جب", "SCONJ", "mark", "Subordinating Conjunction (Temporal)", "کرے"),
            DependencyRow::new("ہماری", "ہم", "PRON", "nmod:poss", "Possessive Pronoun", "کلاس"),
            DependencyRow::new("کلاس", "کلاس", "NOUN", "nsubj", "Noun (subject of verb)", "کرے"),
            DependencyRow::new("لگے", "لگنا", "VERB", "aux", "Root Verb + Aspect + Aux", "کرے"),
            DependencyRow::new("کرے", "کرنا", "AUX", "root", "Habitual auxiliary verb", "—"),
            DependencyRow::new("ای", "ہونا", "AUX", "cop", "Reduced Copula form of تھی", "—"),
        ],
    ),
    (
        "کہ او کتنو پختو لکھاری اے",
        &[
            DependencyRow::new("کہ", "کہ", "SCONJ", "mark", "Subordinating Conjunction", "لکھاری"),
            DependencyRow::new("او", "وہ", "PRON", "nsubj", "3rd Person Pronoun", "لکھاری"),
            DependencyRow::new("کتنو", "کتنا", "ADJ", "amod", "Interrogative adjective", "پختو"),
            DependencyRow::new("پختو", "اچھا", "ADJ", "amod", "Quality adjective", "لکھاری"),
            DependencyRow::new("لکھاری", "لکھاری", "NOUN", "root", "Agent noun", "—"),
            DependencyRow::new("اے", "ہے", "AUX", "cop", "Copula (3rd person singular)", "لکھاری"),
        ],
    ),
    (
        "اگر وے یا لباس اے پہری راکھاں",
        &[
            DependencyRow::new("اگر", "اگر", "SCONJ", "mark", "Conditional conjunction", "راکھاں"),
            DependencyRow::new("وے", "وہ", "PRON", "nsubj", "3rd Person Pronoun", "راکھاں"),
            DependencyRow::new("یا", "یہ", "PRON", "det", "Demonstrative pronoun", "لباس"),
            DependencyRow::new("لباس", "لباس", "NOUN", "obj", "Noun", "راکھاں"),
            DependencyRow::new("اے", "کو", "ADP", "case", "Postposition marker", "لباس"),
            DependencyRow::new("پہری", "پہننا", "VERB", "aux", "Root verb + aspect", "راکھاں"),
            DependencyRow::new("راکھاں", "رکھنا", "AUX", "root", "Light verb + copula", "—"),
        ],
    ),
    (
        "گیانی اور تعلیم کا ماہر لوگن کو ای ماننواے",
        &[
            DependencyRow::new("گیانی", "دانشور", "NOUN", "compound", "Noun (agent)", "ماہر"),
            DependencyRow::new("اور", "اور", "CCONJ", "cc", "Coordinating conjunction", "گیانی"),
            DependencyRow::new("تعلیم", "تعلیم", "NOUN", "compound", "Part of NP", "ماہر"),
            DependencyRow::new("کا", "کا", "ADP", "case", "Genitive postposition", "تعلیم"),
            DependencyRow::new("ماہر", "ماہر", "NOUN", "nsubj", "Expert noun", "ماننواے"),
            DependencyRow::new("لوگن", "لوگ", "NOUN", "nmod", "Plural oblique", "ماننواے"),
            DependencyRow::new("کو", "کا", "ADP", "case", "Postposition", "لوگن"),
            DependencyRow::new("ای", "یہ", "PRON", "nsubj", "Demonstrative pronoun", "ماننواے"),
            DependencyRow::new("ماننواے", "ماننا ہے", "VERB", "root", "Infinitive + Aux", "—"),
            DependencyRow::new("اے", "ہے", "AUX", "cop", "Copula", "ماننواے"),
        ],
    ),
    (
        "میرے مارے بی اب تک ایک اچھنبو سوای اے",
        &[
            DependencyRow::new("میرے", "میرا", "PRON", "nmod:poss", "Possessive pronoun", "مارے"),
            DependencyRow::new("مارے", "لیے", "ADP", "case", "Postposition", "میرے"),
            DependencyRow::new("بی", "بھی", "PART", "advmod", "Focus/emphasis particle", "اے"),
            DependencyRow::new("اب تک", "اب تک", "ADV", "advmod", "Temporal phrase", "اے"),
            DependencyRow::new("ایک", "ایک", "NUM", "nummod", "Cardinal numeral", "سوای"),
            DependencyRow::new("اچھنبو", "عجیب", "ADJ", "amod", "Adjective", "سوای"),
            DependencyRow::new("سوای", "سی", "ADP", "obl", "Postposition", "اے"),
            DependencyRow::new("اے", "ہے", "AUX", "root", "Copula (present tense)", "—"),
        ],
    ),
    (
        "دنیا آ جا ری ہی",
        &[
            DependencyRow::new("دنیا", "دنیا", "NOUN", "nsubj", "Noun (subject)", "جاری"),
            DependencyRow::new("آ", "آنا", "PART", "aux", "Aspectual prefix", "جاری"),
            DependencyRow::new("جاری", "جا رہی", "VERB", "root", "Verb + progressive", "—"),
            DependencyRow::new("ہی", "ہے", "AUX", "cop", "Copula", "جاری"),
        ],
    ),
    (
        "کا ہم ماضی اے زندہ رکھ سکاں",
        &[
            DependencyRow::new("کا", "کیا", "PART", "aux", "Interrogative particle", "سکاں"),
            DependencyRow::new("ہم", "ہم", "PRON", "nsubj", "1PL pronoun", "سکاں"),
            DependencyRow::new("ماضی", "ماضی", "NOUN", "obj", "Noun (indirect object)", "رکھ"),
            DependencyRow::new("اے", "کو", "ADP", "case", "Postposition", "ماضی"),
            DependencyRow::new("زندہ", "زندہ", "ADJ", "amod", "Adjective (state)", "رکھ"),
            DependencyRow::new("زندہ رکھ", "زندہ رکھ", "VERB", "xcomp", "Compound verb", "سکاں"),
            DependencyRow::new("رکھ", "رکھتے", "VERB", "compound", "Root verb", "سکاں"),
            DependencyRow::new("سکاں", "سکتے ہیں", "AUX", "root", "Modal auxiliary", "—"),
        ],
    ),
    (
        "کہا میو روس میں باولا ہو گا",
        &[
            DependencyRow::new("کہا", "کیا", "PART", "aux", "Interrogative particle", "باولا"),
            DependencyRow::new("میو", "میو", "NOUN", "nsubj", "Ethnonym/proper noun", "باولا"),
            DependencyRow::new("روس میں", "روس میں", "PROPN", "obl", "Proper noun locative", "باولا"),
            DependencyRow::new("باولا", "پاگل", "ADJ", "amod", "Adjective", "میو"),
            DependencyRow::new("ہو گا", "ہو گیا", "AUX", "root", "Auxiliary tense/aspect", "—"),
        ],
    ),
    (
        "کہا پوچھو جائیگو قبر میں",
        &[
            DependencyRow::new("کہا", "کیا", "PART", "aux", "Interrogative particle", "پوچھو"),
            DependencyRow::new("پوچھو", "پوچھا", "VERB", "root", "Imperative verb", "—"),
            DependencyRow::new("جائیگو", "جائے گا", "VERB", "conj", "Future passive verb phrase", "پوچھو"),
            DependencyRow::new("قبر میں", "قبر میں", "NOUN", "obl", "Locative noun", "جائیگو"),
        ],
    ),
    (
        "اوکہن جا رو اے",
        &[
            DependencyRow::new("او", "وہ", "PRON", "nsubj", "3rd person pronoun", "جا رو"),
            DependencyRow::new("کہن", "کہاں", "ADV", "advmod", "Interrogative locative", "جا رو"),
            DependencyRow::new("جا رو", "جا رہا", "VERB", "root", "Verb compound: progressive", "—"),
            DependencyRow::new("اے", "ہے", "AUX", "aux", "Copula", "جا رو"),
        ],
    ),
    (
        "تینے کہا کھایو",
        &[
            DependencyRow::new("تینے", "تم نے", "PRON", "nsubj", "2SG pronoun + ergative", "کھایو"),
            DependencyRow::new("کہا", "کیا", "INTJ", "obj", "Interrogative pronoun", "کھایو"),
            DependencyRow::new("کھایو", "کھایا", "VERB", "root", "Perfective verb", "—"),
        ],
    ),
    (
        "ہم رات کب سویا ہا",
        &[
            DependencyRow::new("ہم", "ہم", "PRON", "nsubj", "1PL pronoun", "سویا ہا"),
            DependencyRow::new("رات", "رات", "NOUN", "nmod", "Temporal noun", "سویا ہا"),
            DependencyRow::new("کب", "کب", "ADV", "advmod", "Interrogative adverb", "سویا ہا"),
            DependencyRow::new("سویا ہا", "سوئے تھے", "VERB", "root", "Compound verb (past perfective)", "—"),
        ],
    ),
    (
        "ای جاڑان کی بات ای",
        &[
            DependencyRow::new("ای", "یہ", "PRON", "nsubj", "Demonstrative pronoun", "بات"),
            DependencyRow::new("جاڑان کی", "جاڑوں کی", "NOUN", "nmod", "Plural/Genitive noun", "بات"),
            DependencyRow::new("بات", "بات", "NOUN", "root", "Common noun", "—"),
            DependencyRow::new("ای", "ہے", "AUX", "cop", "Copula", "بات"),
        ],
    ),
    (
        "او اچھو آدمی ہو",
        &[
            DependencyRow::new("او", "وہ", "PRON", "nsubj", "3rd person pronoun", "آدمی"),
            DependencyRow::new("اچھو", "اچھا", "ADJ", "amod", "Adjective", "آدمی"),
            DependencyRow::new("آدمی", "آدمی", "NOUN", "root", "Common noun", "—"),
            DependencyRow::new("ہو", "تھا", "AUX", "cop", "Past copula", "آدمی"),
        ],
    ),
    (
        "بیربانی بڑی ملوک ہی",
        &[
            DependencyRow::new("بیربانی", "عورت", "NOUN", "nsubj", "Noun (feminine)", "ملوک"),
            DependencyRow::new("بڑی", "بہت", "ADV", "advmod", "Intensifier/adverb", "ملوک"),
            DependencyRow::new("ملوک", "خوبصورت", "ADJ", "amod", "Adjective", "بیربانی"),
            DependencyRow::new("ہی", "تھی", "AUX", "cop", "Past copula", "ملوک"),
        ],
    ),
    (
        "بوڑھی اماں نے کدی کائی کی برائی نہ کری",
        &[
            DependencyRow::new("بوڑھی", "بوڑھی", "ADJ", "amod", "Adjective", "اماں"),
            DependencyRow::new("اماں", "ماں", "NOUN", "nsubj", "Kinship noun", "کری"),
            DependencyRow::new("نے", "نے", "ADP", "case", "Ergative marker", "اماں"),
            DependencyRow::new("کدی", "کبھی", "ADV", "advmod", "Temporal adverb", "کری"),
            DependencyRow::new("کائی کی", "کسی کی", "PRON", "nmod:poss", "Possessive pronoun", "برائی"),
            DependencyRow::new("برائی", "برائی", "NOUN", "obj", "Abstract noun", "کری"),
            DependencyRow::new("نہ کری", "نہیں کی", "VERB", "ROOT", "Neg + Verb", "—"),
        ],
    ),
    (
        "میواتی زبان اپنی بقا کی جنگ لڑری اے",
        &[
            DependencyRow::new("میواتی زبان", "میواتی زبان", "PROPN", "compound", "Proper noun", "زبان"),
            DependencyRow::new("اپنی", "اپنی", "PRON", "poss", "Reflexive possessive", "بقا"),
            DependencyRow::new("بقا کی جنگ", "بقا کی جنگ", "NOUN", "nmod", "Abstract noun", "لڑری"),
            DependencyRow::new("لڑری", "لڑ رہی", "VERB", "root", "Verb + progressive participle", "—"),
            DependencyRow::new("اے", "ہے", "AUX", "cop", "Copula", "لڑری"),
        ],
    ),
    (
        "بزرگن کی بہت سی سنت ٹوٹتی دکھائی دے ری ہاں",
        &[
            DependencyRow::new("بزرگن کی", "بزرگوں کی", "NOUN", "nmod", "Plural + Genitive", "سنت"),
            DependencyRow::new("بہت سی", "بہت سی", "ADJ", "amod", "Quantifier", "سنت"),
            DependencyRow::new("سنت", "سنت", "NOUN", "nsubj", "Noun", "ٹوٹتی"),
            DependencyRow::new("ٹوٹتی", "ٹوٹتی", "VERB", "acl", "Verb progressive", "سنت"),
            DependencyRow::new("دکھائی دے", "دکھائی دے", "VERB", "xcomp", "Light verb", "ٹوٹتی"),
            DependencyRow::new("ری ہاں", "رہی ہیں", "AUX", "aux", "Progressive + Copula", "دکھائی دے"),
        ],
    ),
    (
        "گول مٹول سلونٹن سو بھر و چہرو",
        &[
            DependencyRow::new("گول مٹول", "گول مٹول", "ADJ", "amod", "Adjective", "چہرو"),
            DependencyRow::new("سلونٹن", "جھریاں", "NOUN", "amod", "Lexical substitution", "چہرو"),
            DependencyRow::new("سو بھر", "بھرا", "VERB", "amod", "Perfective participle", "چہرو"),
            DependencyRow::new("و", "ہوا", "AUX", "aux", "Aux/Copula", "سو بھر"),
            DependencyRow::new("چہرو", "چہرہ", "NOUN", "root", "Head noun", "—"),
        ],
    ),
    (
        "کپڑا کی لوگڑی",
        &[
            DependencyRow::new("کپڑا", "کپڑا", "NOUN", "nmod", "Noun", "لوگڑی"),
            DependencyRow::new("کی", "کا", "ADP", "case", "Genitive postposition", "کپڑا"),
            DependencyRow::new("لوگڑی", "دوپٹہ", "NOUN", "root", "Regional equivalent", "—"),
        ],
    ),
    (
        "یا کا منہ سو",
        &[
            DependencyRow::new("یا", "یہ", "PRON", "nmod", "Demonstrative pronoun", "منہ"),
            DependencyRow::new("کا", "کا", "ADP", "case", "Possessive postposition", "یا"),
            DependencyRow::new("منہ سو", "منہ سے", "NOUN", "obl", "Noun + Postposition", "سو"),
        ],
    ),
];
