pub mod answers;
pub mod key;

pub use answers::{Answers, Part};
pub use key::PuzzleKey;
