//! Generation requests.

use super::charset::{self, ClassSet};
use crate::error::{InvalidRequest, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }

    /// Reject requests that cannot be satisfied. The request is never
    /// adjusted here; choosing a fallback is up to the caller.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(InvalidRequest::NoClasses.into());
        }
        if self.length < self.classes.len() {
            return Err(InvalidRequest::TooShort {
                length: self.length,
                classes: self.classes.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Upper bound of the entropy in bits for passwords from this request.
    pub fn entropy_bits(&self) -> f64 {
        let size = charset::alphabet_size(&self.classes);
        if size == 0 {
            return 0.0;
        }
        self.length as f64 * (size as f64).log2()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 16,
            classes: ClassSet::all(),
        }
    }
}
