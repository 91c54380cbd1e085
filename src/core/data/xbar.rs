//! X-Bar 句法树表
//!
//! 值为方括号表示法的展示文本，不做解析。

// 本文件中的数据为逐字转录的语料，不得修改。

pub static XBAR: &[(&str, &str)] = &[
    (
        "جب ہماری کلاس لگے کرے ای۔",
        "[CP [C جب]\n    [TP [DP [D ہماری] [NP [N کلاس]]]\n       [T' \n            [VP [V   لگے کرے ای]][T Past]]]]",
    ),
    (
        "کہ او کتنو پختو لکھاری اے۔",
        "[CP [C کہ]\n    [TP [DP [D ∅] [NP او]]\n        [T'\n            [VP [DP [D ∅] [NP [AP کتنو پختو] [N' [N لکھاری]]]] [V اے]] [T ∅]]]]",
    ),
    (
        "اگر وے یا لباس اے پہری راکھاں۔",
        "[CP [C اگر]\n    [TP [DP [D ∅] [NP وے]]\n        [T' \n            [VP [DP [D یا] [NP [N لباس]]]\n                [V پہری راکھاں ]][T Present]]]]]",
    ),
    (
        "گیانی اور تعلیم کا ماہر لوگن کو ای ماننواے۔",
        "[TP\n   [DP \n      [DP \n         [NP [NP گیانی اور تعلیم] \n             [PP [P کا] [NP ماہر]]]]\n      [DP \n         [NP [NP لوگن] \n             [PP [P کو]]]]\n   ]\n\n   [T'\n      [VP \n         [V' [Dp ای] [V ماننواے]]]\n      [T Past]\n   ]\n]",
    ),
    (
        "میرے مارے بی اب تک ایک اچھنبو سوای اے۔",
        "[TP [DP [D ∅] [N میرے مارے بی]] [T' [VP [V' [AdvP اب تک] [V' [DP [D ایک] [NP [AP اچھنبو] [N' [N سوای]]]] [V اے]]]] [T Present]]]",
    ),
    (
        "دنیا آ جا ری ہی۔",
        "[TP [DP [D ∅] [NP دنیا]]\n    [T'  [VP  [V آ][V   جا  ری  ]][T Past]]]",
    ),
    (
        "کا ہم ماضی زندہ رکھ سکاں؟",
        "[CP [C کا] [TP [DP [D ∅] [NP ہم]] [T' [VP [DP [D اے] [NP ماضی]][V' [V زندہ رکھ سکاں] ]] [T ∅]]]]",
    ),
    (
        "کہا میو روس میں باولا ہو گا؟",
        "[CP [C کہا] [TP [DP [D ∅] [NP میو]] [T' [VP [V' [V باولا ہو گا]] [PP روس میں]] [T Past]]]]",
    ),
    (
        "کہا پوچھو جائیگو قبر میں؟",
        "[CP [C کہا] [TP [DP ∅] [T' [VP [V' [V پوچھو جائیگو]] [PP قبر میں]] [T Future]]]]",
    ),
    (
        "اوکہن جا رو اے؟",
        "[CP [DP [D ∅] [N او]] [C' [C کہن] [TP [DP ∅] [T' [AuxP  [VP [V جا]] [Aux رواے ]] [T Prog]]]]]\n\n[CP [Spec [DP [D ∅] [N او]]] [C' [C کہن] [TP [Spec [DP ∅]] [T' [T Prog] [AuxP [Aux' [Aux رواے] [VP [V' [V جا]]]]]]]]]",
    ),
    (
        "تینے کہا کھایو؟",
        "[TP [DP [D ∅] [NP تینے]]\n    [T' [T ∅]\n        [VP [DP [D ∅] [NP کہا]] [V کھایو]]]]",
    ),
    (
        "ہم رات کب سویا ہا؟",
        "[CP [C کب]\n    [TP [DP [D ∅] [NP ہم]]\n        [T' [T ہا]\n            [VP [AdvP رات] [V سویا]]]]]",
    ),
    (
        "ای جاڑان کی بات ای۔",
        "[TP [Spec [DP [D ∅] [N ای]]] [T' [T ∅] [VP [V' [DP [D ∅] [NP [NP جاڑان] [PP [P کی] [NP بات]]]] [V ای]]]]]",
    ),
    (
        "او اچھو آدمی ہو۔",
        "[TP [Spec [DP [D ∅] [N او]]] [T'  [VP [V'  [DP [D ∅] [NP [AP اچھو] [N آدمی]]][V ہو]]][T ∅]]]",
    ),
    (
        "بیربانی بڑی ملوک ہی۔",
        "[TP [Spec [DP [D ∅] [NP بیربانی]]] [T'  [VP [V' [AP [A' [DegP بڑی] [A ملوک]]] [V ہی]]][T ∅]]]",
    ),
    (
        "بوڑھی اماں نے کدی کائی کی برائی نہ کری۔",
        "[TP [Spec [DP [D ∅] [NP [AP بوڑھی] [N' [N اماں] [CaseP [Case نے]]]]]] [T'  [VP [AdvP کدی] [V' [DP [D ∅] [N کائی]] [V' [NP [N'  [PP [P کی] [NP ∅]]][N برائی]] [V' [AdvP نہ] [V کری]]]]][T Perf]]]",
    ),
    (
        "میواتی زبان اپنی بقا کی جنگ لڑری اے۔",
        "[TP [DP [D ∅] [NP [AP میواتی] [N' [N زبان]]]]\n    [T' [T اے]\n        [VP [DP [D ∅] [NP [NP اپنی بقا] [PP [P کی] [NP جنگ]]]] [V لڑری]]]]",
    ),
    (
        "بزرگن کی بہت سی سنت ٹوٹتی دکھائی دے ری ہاں۔",
        "[TP [DP [D ∅] [NP [NP بزرگن] [PP [P کی] [NP [AP بہت سی] [N' [N سنت]]]]]]\n    [T' [T ہاں]\n        [VP [V' [V ٹوٹتی]\n            [V' [V دکھائی]\n                [V' [V دے]\n                    [V' [V ری] [V ∅]]]]]]]]",
    ),
    (
        "گول مٹول سلونٹن سو بھر و چہرو۔",
        "[TP [Spec [DP [D ∅] [NP [AP گول مٹول] [N' [AP سلونٹن سو بھر و] [N' [N چہرو]]]]]] [T' [T ∅] [VP ∅]]]",
    ),
    (
        "کپڑا کی لوگڑی۔",
        "[TP [DP [D ∅] [NP [N' [N کپڑا] [PP [P کی] [NP [N لوگڑی]]]]]] [T' [T ∅] [VP ∅]]]",
    ),
    (
        "یا کا منہ سو۔",
        "[TP [DP [D یا کا] [NP [N' [N منہ] [PP [P سو]]]]] [T' [T ∅] [VP ∅]]]",
    ),
];
