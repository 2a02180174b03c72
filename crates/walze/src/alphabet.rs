//! Ordered, bijective mapping between symbols and dense indices.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{ConfigError, RangeError};

/// An ordered alphabet of distinct symbols, indexed `0..len`.
///
/// The alphabet is the single place where symbols and indices meet: every
/// other component (permutations, rotors, the machine) works on indices and
/// delegates translation here.
///
/// # Range expansion
///
/// The constructor accepts a compact specification: a run `X-Y` with both
/// endpoints alphabetic expands to the inclusive code-point run from `X` to
/// `Y`. A `-` whose neighbors are not both alphabetic stays a literal
/// symbol. Runs chain, so `"A-C-E"` is `ABCDE`.
///
/// # Example
///
/// ```
/// use walze::Alphabet;
///
/// let alpha = Alphabet::new("A-D")?;
/// assert_eq!(alpha.len(), 4);
/// assert_eq!(alpha.index_of('A')?, 0);
/// assert_eq!(alpha.index_of('D')?, 3);
/// assert_eq!(alpha.char_at(2)?, 'C');
/// # Ok::<(), walze::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    indices: BTreeMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from a range-expansion specification.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DescendingRange`] if a run's end precedes its start,
    /// [`ConfigError::DuplicateSymbol`] if the expansion repeats a symbol,
    /// [`ConfigError::EmptyAlphabet`] if nothing remains.
    ///
    /// # Example
    ///
    /// ```
    /// use walze::{Alphabet, ConfigError};
    ///
    /// // digits are not alphabetic, so this '-' is a literal symbol
    /// let alpha = Alphabet::new("0-9")?;
    /// assert_eq!(alpha.len(), 3);
    /// assert!(alpha.contains('-'));
    ///
    /// assert_eq!(
    ///     Alphabet::new("D-A").unwrap_err(),
    ///     ConfigError::DescendingRange { start: 'D', end: 'A' },
    /// );
    /// # Ok::<(), walze::ConfigError>(())
    /// ```
    pub fn new(spec: &str) -> Result<Self, ConfigError> {
        let src: Vec<char> = spec.chars().collect();
        let mut chars: Vec<char> = Vec::with_capacity(src.len());

        let mut i = 0;
        while i < src.len() {
            let c = src[i];
            if c == '-' && i + 1 < src.len() {
                if let Some(&start) = chars.last() {
                    let end = src[i + 1];
                    if start.is_alphabetic() && end.is_alphabetic() {
                        if (end as u32) < (start as u32) {
                            return Err(ConfigError::DescendingRange { start, end });
                        }
                        // the start symbol is already in place
                        chars.extend((start..=end).skip(1));
                        i += 2;
                        continue;
                    }
                }
            }
            chars.push(c);
            i += 1;
        }

        if chars.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }

        let mut indices = BTreeMap::new();
        for (index, &symbol) in chars.iter().enumerate() {
            if indices.insert(symbol, index).is_some() {
                return Err(ConfigError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { chars, indices })
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the alphabet has no symbols. Construction rejects this,
    /// so it only holds for alphabets obtained some other way.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when `symbol` is in the alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// use walze::Alphabet;
    ///
    /// let alpha = Alphabet::default();
    /// assert!(alpha.contains('Q'));
    /// assert!(!alpha.contains('q'));
    /// ```
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.indices.contains_key(&symbol)
    }

    /// Symbol at `index`.
    ///
    /// # Errors
    ///
    /// [`RangeError::IndexOutOfRange`] if `index >= len`.
    pub fn char_at(&self, index: usize) -> Result<char, RangeError> {
        self.chars.get(index).copied().ok_or(RangeError::IndexOutOfRange {
            index,
            size: self.chars.len(),
        })
    }

    /// Index of `symbol`.
    ///
    /// # Errors
    ///
    /// [`RangeError::SymbolNotInAlphabet`] if the symbol is absent.
    pub fn index_of(&self, symbol: char) -> Result<usize, RangeError> {
        self.indices
            .get(&symbol)
            .copied()
            .ok_or(RangeError::SymbolNotInAlphabet { symbol })
    }

    /// Iterates the symbols in index order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// The symbols as a `String`, in index order.
    ///
    /// # Example
    ///
    /// ```
    /// use walze::Alphabet;
    ///
    /// assert_eq!(Alphabet::new("A-F")?.symbols(), "ABCDEF");
    /// # Ok::<(), walze::ConfigError>(())
    /// ```
    #[must_use]
    pub fn symbols(&self) -> String {
        self.chars.iter().collect()
    }
}

/// The upper-case Latin alphabet `A-Z`.
impl Default for Alphabet {
    fn default() -> Self {
        let chars: Vec<char> = ('A'..='Z').collect();
        let indices = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { chars, indices }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet(\"{}\")", self.symbols())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
