//! Cycle-notation permutations over an alphabet's index space.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::alphabet::Alphabet;
use crate::error::{ConfigError, Error, RangeError};

/// A bijection on the indices of an [`Alphabet`], written in cycle notation.
///
/// `(ABC)` sends `A` to `B`, `B` to `C`, and `C` back to `A`. Symbols the
/// cycles never mention map to themselves. Both directions are precomputed,
/// so [`permute`](Self::permute) and [`invert`](Self::invert) are table
/// lookups.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use walze::{Alphabet, Permutation};
///
/// let alpha = Arc::new(Alphabet::new("A-D")?);
/// let perm = Permutation::new("(BACD)", alpha)?;
/// assert_eq!(perm.permute_symbol('A')?, 'C');
/// assert_eq!(perm.invert_symbol('C')?, 'A');
/// // 'E' style omissions are fixed points; here every symbol is cycled
/// assert_eq!(perm.permute(1), 0); // B -> A
/// # Ok::<(), walze::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Permutation {
    pub(crate) alphabet: Arc<Alphabet>,
    forward: Vec<usize>,
    backward: Vec<usize>,
}

impl Permutation {
    /// Parses `cycles` against `alphabet`.
    ///
    /// Parentheses and whitespace delimit cycles; anything between them is a
    /// run of symbols. Each symbol must belong to the alphabet and may appear
    /// in at most one cycle.
    ///
    /// # Errors
    ///
    /// [`RangeError::SymbolNotInAlphabet`] for a symbol outside the alphabet,
    /// [`ConfigError::RepeatedCycleSymbol`] for a symbol cycled twice.
    pub fn new(cycles: &str, alphabet: Arc<Alphabet>) -> Result<Self, Error> {
        let n = alphabet.len();
        let mut forward: Vec<usize> = (0..n).collect();
        let mut seen = vec![false; n];

        let tokens = cycles.split(|c: char| c == '(' || c == ')' || c.is_whitespace());
        for token in tokens {
            if token.is_empty() {
                continue;
            }
            let mut indices = Vec::new();
            for symbol in token.chars() {
                let index = alphabet.index_of(symbol)?;
                if seen[index] {
                    return Err(ConfigError::RepeatedCycleSymbol { symbol }.into());
                }
                seen[index] = true;
                indices.push(index);
            }
            for (j, &from) in indices.iter().enumerate() {
                forward[from] = indices[(j + 1) % indices.len()];
            }
        }

        let mut backward = vec![0usize; n];
        for (from, &to) in forward.iter().enumerate() {
            backward[to] = from;
        }

        Ok(Self { alphabet, forward, backward })
    }

    /// The identity permutation, which fixes every symbol.
    #[must_use]
    pub fn identity(alphabet: Arc<Alphabet>) -> Self {
        let forward: Vec<usize> = (0..alphabet.len()).collect();
        let backward = forward.clone();
        Self { alphabet, forward, backward }
    }

    /// Applies the permutation to `index`, wrapping it into range first.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use walze::{Alphabet, Permutation};
    ///
    /// let perm = Permutation::new("(AB)", Arc::new(Alphabet::default()))?;
    /// assert_eq!(perm.permute(0), 1);
    /// assert_eq!(perm.permute(26), 1); // 26 wraps to 0
    /// # Ok::<(), walze::Error>(())
    /// ```
    #[must_use]
    pub fn permute(&self, index: usize) -> usize {
        self.forward[index % self.forward.len()]
    }

    /// Applies the inverse permutation to `index`, wrapping it into range
    /// first.
    #[must_use]
    pub fn invert(&self, index: usize) -> usize {
        self.backward[index % self.backward.len()]
    }

    /// Applies the permutation to a symbol.
    ///
    /// # Errors
    ///
    /// [`RangeError::SymbolNotInAlphabet`] if the symbol is absent.
    pub fn permute_symbol(&self, symbol: char) -> Result<char, RangeError> {
        let index = self.alphabet.index_of(symbol)?;
        self.alphabet.char_at(self.permute(index))
    }

    /// Applies the inverse permutation to a symbol.
    ///
    /// # Errors
    ///
    /// [`RangeError::SymbolNotInAlphabet`] if the symbol is absent.
    pub fn invert_symbol(&self, symbol: char) -> Result<char, RangeError> {
        let index = self.alphabet.index_of(symbol)?;
        self.alphabet.char_at(self.invert(index))
    }

    /// Size of the underlying alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True when the underlying alphabet is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The alphabet this permutation acts on.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// True when no symbol maps to itself. Reflectors are usually
    /// derangements; rotors with short cycles usually are not.
    #[must_use]
    pub fn is_derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &to)| i != to)
    }
}

/// Renders the canonical cycle form: disjoint cycles ordered by their
/// smallest index, fixed points included as singletons. Parsing the output
/// reproduces the permutation.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut visited = vec![false; self.forward.len()];
        let mut first = true;
        for start in 0..self.forward.len() {
            if visited[start] {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "(")?;
            let mut index = start;
            loop {
                visited[index] = true;
                let symbol = self.alphabet.char_at(index).map_err(|_| fmt::Error)?;
                write!(f, "{}", symbol)?;
                index = self.forward[index];
                if index == start {
                    break;
                }
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation({})", self)
    }
}
