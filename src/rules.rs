//! Per-symbol rewrite rules.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// A single L-System symbol.
pub type Symbol = char;

/// Immutable mapping from a symbol to its replacement sequence.
///
/// Symbols without an entry rewrite to themselves, so [`lookup`](Self::lookup) is total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: HashMap<Symbol, String>,
}

impl RuleTable {
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, S)>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    /// Returns the configured replacement for `symbol`, if any.
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Returns the replacement for `symbol`, or `symbol` itself when no rule exists.
    pub fn lookup(&self, symbol: Symbol) -> Cow<'_, str> {
        match self.get(symbol) {
            Some(replacement) => Cow::Borrowed(replacement),
            None => Cow::Owned(symbol.to_string()),
        }
    }

    /// Appends the replacement for `symbol` to `out` without an intermediate allocation.
    #[inline]
    pub fn expand_into(&self, symbol: Symbol, out: &mut String) {
        match self.get(symbol) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(symbol),
        }
    }

    /// Byte length of the replacement for `symbol`.
    #[inline]
    pub fn expansion_len(&self, symbol: Symbol) -> usize {
        self.get(symbol).map_or(symbol.len_utf8(), str::len)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(Symbol, S)> for RuleTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, S)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
