//! Password generation.

use zeroize::Zeroize;

use super::charset;
use super::password::Password;
use super::request::GenerationRequest;
use crate::error::Result;
use crate::rand::RandomSource;

/// Produces passwords from a single injected random source.
pub struct Generator<R> {
    source: R,
}

impl<R: RandomSource> Generator<R> {
    pub fn new(source: R) -> Self {
        Generator { source }
    }

    /// Generate one password containing at least one character from every
    /// enabled class.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Password> {
        request.validate()?;
        log::debug!(
            "generating {} chars from {} classes",
            request.length,
            request.classes.len()
        );

        let mut pool = charset::combined_alphabet(&request.classes);
        let mut chars: Vec<char> = Vec::with_capacity(request.length);

        // One guaranteed character per class, in canonical order
        for class in request.classes.iter() {
            let alphabet: Vec<char> = class.alphabet().chars().collect();
            chars.push(random_char(&alphabet, &mut self.source));
        }

        while chars.len() < request.length {
            chars.push(random_char(&pool, &mut self.source));
        }

        shuffle(&mut chars, &mut self.source);

        let password = Password::from_chars(&chars);
        chars.zeroize();
        pool.zeroize();
        Ok(password)
    }

    /// Generate `count` passwords with the same source.
    pub fn generate_batch(&mut self, request: &GenerationRequest, count: usize) -> Result<Vec<Password>> {
        request.validate()?;
        (0..count).map(|_| self.generate(request)).collect()
    }

    pub fn into_source(self) -> R {
        self.source
    }
}

#[inline]
fn random_char<R: RandomSource>(chars: &[char], source: &mut R) -> char {
    chars[source.next_uniform(chars.len())]
}

/// Fisher-Yates shuffle drawing every swap index from `source`.
#[inline]
pub fn shuffle<T, R: RandomSource>(items: &mut [T], source: &mut R) {
    for i in (1..items.len()).rev() {
        let j = source.next_uniform(i + 1);
        items.swap(i, j);
    }
}
