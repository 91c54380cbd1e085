//! 编译期固定的语料数据
//!
//! 21 个示例句子，每个句子在四张表中各有一条记录。

mod dependency;
mod gloss;
mod morphology;
mod xbar;

pub use dependency::DEPENDENCY;
pub use gloss::GLOSS;
pub use morphology::MORPHOLOGY;
pub use xbar::XBAR;
