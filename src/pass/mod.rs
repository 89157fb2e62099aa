//! Password generation and scoring.

pub mod charset;
mod generate;
mod password;
mod request;
pub mod score;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{Generator, shuffle};
pub use password::Password;
pub use request::GenerationRequest;
pub use score::{Strength, StrengthScore, score};
