//! Uniform random indices from a cryptographic source.
//!
//! [`RejectionSampler::os`] draws from `OsRng` (the operating-system entropy
//! pool). Reducing a 64-bit draw with a plain `% n` favours small residues
//! whenever `n` does not divide 2^64, so draws falling in the top residue
//! zone are discarded and redrawn.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{PassphraseError, Result};

/// A source of uniformly distributed indices.
///
/// Production code uses [`RejectionSampler::os`]; tests inject scripted
/// sources through this trait.
pub trait IndexSource {
    /// Return an index in `0..n`, each value equally likely.
    ///
    /// # Errors
    ///
    /// - [`PassphraseError::EmptyList`] if `n == 0`.
    /// - [`PassphraseError::RandomSource`] if the underlying generator fails.
    fn uniform_index(&mut self, n: usize) -> Result<usize>;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn uniform_index(&mut self, n: usize) -> Result<usize> {
        (**self).uniform_index(n)
    }
}

/// Rejection sampling over 64-bit draws from any [`RngCore`].
#[derive(Debug)]
pub struct RejectionSampler<R> {
    rng: R,
}

impl RejectionSampler<OsRng> {
    /// Sampler backed by the operating-system CSPRNG.
    #[must_use]
    pub const fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for RejectionSampler<OsRng> {
    fn default() -> Self {
        Self::os()
    }
}

impl<R: RngCore> RejectionSampler<R> {
    /// Wrap an arbitrary generator. Only cryptographically secure generators
    /// are suitable for passphrases.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    fn draw(&mut self) -> Result<u64> {
        let mut bytes = [0u8; 8];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| PassphraseError::RandomSource(e.to_string()))?;
        Ok(u64::from_le_bytes(bytes))
    }
}

impl<R: RngCore> IndexSource for RejectionSampler<R> {
    fn uniform_index(&mut self, n: usize) -> Result<usize> {
        let bound = u64::try_from(n)
            .map_err(|_| PassphraseError::RandomSource(format!("bound {n} exceeds 64 bits")))?;

        // Draws at or above `zone` fall in [floor(MAX / n) * n, MAX].
        let zone = u64::MAX
            .checked_div(bound)
            .and_then(|q| q.checked_mul(bound))
            .ok_or(PassphraseError::EmptyList)?;

        loop {
            let draw = self.draw()?;
            if draw < zone {
                return draw
                    .checked_rem(bound)
                    .and_then(|r| usize::try_from(r).ok())
                    .ok_or(PassphraseError::EmptyList);
            }
            tracing::trace!(bound, "draw in residue zone rejected");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
