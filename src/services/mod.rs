pub mod answer_filler;
pub mod frequency;
pub mod title_normalizer;

pub use answer_filler::fill_answers;
pub use frequency::{rank, tally, PieceFrequency};
pub use title_normalizer::normalize_title;
