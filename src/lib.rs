//! Password generation with guaranteed class coverage and heuristic
//! strength scoring.
//!
//! The core is [`pass::Generator`] and [`pass::score`]. The generator owns a
//! [`rand::RandomSource`] supplied by the caller, so output is reproducible
//! under a seeded source and cryptographically strong under the OS source.
//!
//! ```
//! use passforge::pass::{ClassSet, GenerationRequest, Generator, score};
//! use passforge::rand::SeededSource;
//!
//! let mut generator = Generator::new(SeededSource::new(7));
//! let password = generator
//!     .generate(&GenerationRequest::new(12, ClassSet::all()))
//!     .unwrap();
//! assert_eq!(password.len(), 12);
//! assert!(score(password.as_str()).value() >= 85);
//! ```

pub mod clipboard;
pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{Error, InvalidRequest, Result};
