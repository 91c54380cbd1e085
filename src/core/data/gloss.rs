//! Leipzig 行间注释表
//!
//! 键保留了句末标点，与形态表的键不同。

// 本文件中的数据为逐字转录的语料，不得修改。

use crate::core::models::{GlossEntry, GlossWord};

pub static GLOSS: &[GlossEntry] = &[
    GlossEntry {
        source: "جب ہماری کلاس لگے کرے ای۔",
        urdu: "جب ہماری کلاس لگتی تھی۔",
        english: "When our class used to take place.",
        words: &[
            GlossWord::new("جب", "SCONJ", "When"),
            GlossWord::new("ہماری", "1SG.POSS", "Our"),
            GlossWord::new("کلاس", "N", "Class"),
            GlossWord::new("لگے", "V-root+ASP", "Root verb + aspect suffix"),
            GlossWord::new("کرے", "V-root+HAB", "Habitual auxiliary"),
            GlossWord::new("ای", "COP.PST.FEM", "Copula (past feminine)"),
        ],
    },
    GlossEntry {
        source: "کہ او کتنو پختو لکھار ی اے۔",
        urdu: "کہ وہ کتنا اچھا لکھاری ہے۔",
        english: "That he is such a good writer.",
        words: &[
            GlossWord::new("کہ", "SCONJ", "That"),
            GlossWord::new("او", "PRON.3SG", "He/She"),
            GlossWord::new("کتنو پختو", "ADJ", "Good"),
            GlossWord::new("لکھاری", "N-AGENT-NOM", "Writer"),
            GlossWord::new("اے", "COP.PRES.3SG", "Is"),
        ],
    },
    GlossEntry {
        source: "اگر وےیا لباس اے پہری راکھاں۔",
        urdu: "اگر وہ لباس کو پہنتے ہیں۔",
        english: "If he wears those clothes.",
        words: &[
            GlossWord::new("اگر", "SCONJ", "If"),
            GlossWord::new("وے", "PRON.3SG", "He/She"),
            GlossWord::new("یا", "DEM", "That"),
            GlossWord::new("لباس اے", "N+DAT", "Clothes (dative)"),
            GlossWord::new("پہری راکھاں", "V-root+ASP+HAB", "Wear (progressive+habitual)"),
        ],
    },
    GlossEntry {
        source: "گیانی اور تعلیم کا ماہر لوگن کو ای ماننواے اے۔",
        urdu: "گیانی اور تعلیم کے ماہر لوگوں کو یہ ماننا ہے۔",
        english: "The people accept scholars and education experts.",
        words: &[
            GlossWord::new("گیانی", "N", "Scholar"),
            GlossWord::new("اور", "CONJ", "And"),
            GlossWord::new("تعلیم", "N", "Education"),
            GlossWord::new("کا", "GEN", "Of"),
            GlossWord::new("ماہر", "N", "Expert"),
            GlossWord::new("لوگن کو", "N-PL+DAT", "People (dative)"),
            GlossWord::new("ای", "DEM", "This"),
            GlossWord::new("ماننواے", "V-root+INF+AUX", "To accept"),
            GlossWord::new("اے", "COP.PRES.3SG", "Is"),
        ],
    },
    GlossEntry {
        source: "میرے مارے بی اب تک ایک اچھنبو سوای اے۔",
        urdu: "میرے لیے بھی اب تک ایک حیرانگی سی ہے۔",
        english: "Even for me until now, there is a strange feeling.",
        words: &[
            GlossWord::new("میرے مارے", "1SG.POSS+POSTP", "For me"),
            GlossWord::new("بی", "FOC-PARTICLE", "Also/even"),
            GlossWord::new("اب تک", "ADV", "Until now"),
            GlossWord::new("ایک", "NUM", "One"),
            GlossWord::new("اچھنبو سوای", "ADJ+POSTP", "Strange like"),
            GlossWord::new("اے", "COP.PRES.3SG", "Is"),
        ],
    },
    GlossEntry {
        source: "دنیا آ جا ری ہی۔",
        urdu: "دنیا آ جا رہی ہے۔",
        english: "The world is coming and going.",
        words: &[
            GlossWord::new("دنیا", "N", "World"),
            GlossWord::new("آ", "ASP-PREFIX", "Come"),
            GlossWord::new("جا", "V-ROOT", "Go"),
            GlossWord::new("ری", "PROG", "Progressive"),
            GlossWord::new("ہی", "COP.PRES.3SG", "Is"),
        ],
    },
    GlossEntry {
        source: "کا ہم ماضی اے زندہ رکھ سکاں؟",
        urdu: "کیا ہم ماضی کو زندہ رکھ سکتے ہیں؟",
        english: "Can we keep the past alive?",
        words: &[
            GlossWord::new("کا", "Q-PART", "Question"),
            GlossWord::new("ہم", "PRON.1PL", "We"),
            GlossWord::new("ماضی اے", "N+DAT", "Past (dative)"),
            GlossWord::new("زندہ", "ADJ", "Alive"),
            GlossWord::new("رکھ", "V-ROOT", "Keep"),
            GlossWord::new("سکاں", "AUX-MOD.PL", "Can"),
        ],
    },
    GlossEntry {
        source: "کہا میو روس میں باولا ہو گا؟",
        urdu: "کیا میواتی روس میں پاگل ہوگئے؟",
        english: "Have the Miwatis gone crazy in Russia?",
        words: &[
            GlossWord::new("کہا", "Q-PART", "Question"),
            GlossWord::new("میو", "N", "Mewati"),
            GlossWord::new("روس", "PROPN", "Russia"),
            GlossWord::new("میں", "LOC", "In"),
            GlossWord::new("باولا", "ADJ", "Crazy"),
            GlossWord::new("ہو گا", "AUX.FUT.PL", "Will be"),
        ],
    },
    GlossEntry {
        source: "کہا پوچھو جائیگو قبر میں؟",
        urdu: "کیا پوچھا جائے گا قبر میں؟",
        english: "Will it be asked in the grave?",
        words: &[
            GlossWord::new("کہا", "Q-PART", "What"),
            GlossWord::new("پوچھو", "V-IMP", "Ask"),
            GlossWord::new("جائیگو", "V-FUT-PASS", "Will be asked"),
            GlossWord::new("قبر", "N", "Grave"),
            GlossWord::new("میں", "LOC", "In"),
        ],
    },
    GlossEntry {
        source: "او کہن جا رو اے؟",
        urdu: "وہ کہاں جا رہا ہے؟",
        english: "Where is he going?",
        words: &[
            GlossWord::new("او", "PRON.3SG", "He"),
            GlossWord::new("کہن", "ADV-LOC", "Where"),
            GlossWord::new("جا رو", "V-ROOT+PROG", "Going"),
            GlossWord::new("اے", "COP.PRES.3SG", "Is"),
        ],
    },
    GlossEntry {
        source: "تینے کہا کھایو؟",
        urdu: "تم نے کیا کھایا؟",
        english: "What did you eat?",
        words: &[
            GlossWord::new("تینے", "PRON.2SG+ERG", "You (ergative)"),
            GlossWord::new("کہا", "Q-PART", "What"),
            GlossWord::new("کھایو", "V-PFV", "Ate"),
        ],
    },
    GlossEntry {
        source: "ہم رات کب سویا ہا؟",
        urdu: "ہم رات کب سوئے تھے؟",
        english: "When did we sleep at night?",
        words: &[
            GlossWord::new("ہم", "PRON.1PL", "We"),
            GlossWord::new("رات", "N", "Night"),
            GlossWord::new("کب", "ADV", "When"),
            GlossWord::new("سویا ہا", "V-PFV+AUX", "Slept (past)"),
        ],
    },
    GlossEntry {
        source: "ای جاڑان کی بات ای۔",
        urdu: "یہ جاڑوں کی بات ہے۔",
        english: "This is a matter of winters.",
        words: &[
            GlossWord::new("ای", "DEM", "This"),
            GlossWord::new("جاڑان کی", "N-GEN", "Of winters"),
            GlossWord::new("بات", "N", "Matter"),
            GlossWord::new("ای", "COP.PRES", "Is"),
        ],
    },
    GlossEntry {
        source: "او اچھو آدمی ہو۔",
        urdu: "وہ اچھا آدمی تھا۔",
        english: "He was a good man.",
        words: &[
            GlossWord::new("او", "PRON.3SG", "He"),
            GlossWord::new("اچھو", "ADJ", "Good"),
            GlossWord::new("آدمی", "N", "Man"),
            GlossWord::new("ہو", "COP.PST.MASC", "Was"),
        ],
    },
    GlossEntry {
        source: "بیربانی بڑی ملوک ہی۔",
        urdu: "عورت بہت خوبصورت تھی۔",
        english: "The woman was very beautiful.",
        words: &[
            GlossWord::new("بیربانی", "N", "Woman"),
            GlossWord::new("بڑی", "ADV", "Very"),
            GlossWord::new("ملوک", "ADJ", "Beautiful"),
            GlossWord::new("ہی", "COP.PST.FEM", "Was (fem.)"),
        ],
    },
    GlossEntry {
        source: "بوڑھی اماں نے کدی کائی کی برائی نہ کری۔",
        urdu: "بوڑھی اماں نے کبھی کسی کی برائی نہیں کی۔",
        english: "The old mother never did anyone any harm.",
        words: &[
            GlossWord::new("بوڑھی", "ADJ-FEM", "Old (fem.)"),
            GlossWord::new("اماں", "N", "Mother"),
            GlossWord::new("نے", "ERG", "Ergative"),
            GlossWord::new("کدی", "ADV", "Ever"),
            GlossWord::new("کائی کی", "PRON-POSS", "Someone’s"),
            GlossWord::new("برائی", "N", "Evil"),
            GlossWord::new("نہ", "NEG", "Not"),
            GlossWord::new("کری", "V-PST.FEM", "Did (fem.)"),
        ],
    },
    GlossEntry {
        source: "میواتی زبان اپنی بقا کی جنگ لڑری اے۔",
        urdu: "میواتی زبان اپنی بقا کی جنگ لڑ رہی ہے۔",
        english: "The Mewati language is fighting for its survival.",
        words: &[
            GlossWord::new("میواتی", "N-PROPN", "Mewati"),
            GlossWord::new("زبان", "N", "Language"),
            GlossWord::new("اپنی", "3SG.POSS", "Its"),
            GlossWord::new("بقا", "N", "Survival"),
            GlossWord::new("کی", "GEN", "Of"),
            GlossWord::new("جنگ", "N", "War"),
            GlossWord::new("لڑری", "V-root+PROG", "Fighting"),
            GlossWord::new("اے", "COP.PRES", "Is"),
        ],
    },
    GlossEntry {
        source: "بزرگن کی بہت سی سنت ٹوٹتی دکھائی دے ری ہاں۔",
        urdu: "بزرگوں کی بہت سی سنت بکھرتی دکھائی دے رہی ہیں۔",
        english: "Many traditions of the elders appear to be breaking.",
        words: &[
            GlossWord::new("بزرگن کی", "N-PL-GEN", "Of elders"),
            GlossWord::new("بہت سی", "ADV+CLF", "Many"),
            GlossWord::new("سنت", "N-PL", "Traditions"),
            GlossWord::new("ٹوٹتی", "V-PROG-FEM", "Breaking"),
            GlossWord::new("دکھائی دے", "V-light", "Appear"),
            GlossWord::new("ری", "AUX-PROG-FEM", "Prog. fem."),
            GlossWord::new("ہاں", "COP.PRES.PL", "Are"),
        ],
    },
    GlossEntry {
        source: "گول مٹول سلونٹن سو بھر و چہرو۔",
        urdu: "گول مٹول جھریوں سے بھرا چہرہ۔",
        english: "A round face full of wrinkles.",
        words: &[
            GlossWord::new("گول مٹول", "ADJ", "Round"),
            GlossWord::new("سلونٹن", "N-PL", "Wrinkles"),
            GlossWord::new("سو", "POSTP", "From"),
            GlossWord::new("بھر و", "V-PST", "Filled"),
            GlossWord::new("چہرو", "N", "Face"),
        ],
    },
    GlossEntry {
        source: "کپڑا کی لوگڑی۔",
        urdu: "کپڑے کا دوپٹہ۔",
        english: "Scarf made of cloth.",
        words: &[
            GlossWord::new("کپڑا", "N", "Cloth"),
            GlossWord::new("کی", "GEN", "Of"),
            GlossWord::new("لوگڑی", "N", "Scarf/Dupatta"),
        ],
    },
    GlossEntry {
        source: "یا کا منہ سو۔",
        urdu: "اس کے منہ سے۔",
        english: "From his/her mouth.",
        words: &[
            GlossWord::new("یا", "DEM", "This/That"),
            GlossWord::new("کا", "GEN", "Of"),
            GlossWord::new("منہ سو", "N+POSTP", "Mouth+from"),
        ],
    },
];
