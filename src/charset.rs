use std::collections::{HashMap, HashSet};

use crate::config::TokenConfig;
use crate::normalize;

/// Ordered alphabet derived from a [`TokenConfig`].
///
/// Symbols are grapheme clusters, uppercased and sorted by byte order; a
/// symbol's position in that order is its checksum value. The alias table
/// maps excluded lookalikes to the symbol they are read back as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<String>,
    aliases: HashMap<String, String>,
    strip_skin_tones: bool,
    index_bits: usize,
}

impl Charset {
    /// Derive the alphabet from `config`.
    ///
    /// Build order: base symbols plus extensions, minus exclusions, minus
    /// every substitution alias, plus every substitution target. Targets are
    /// added back last, so an alias always has a live symbol to resolve to,
    /// even when the target was excluded earlier.
    pub fn build(config: &TokenConfig) -> Self {
        let strip = config.strip_skin_tones;

        let mut symbols: Vec<String> = config
            .base
            .iter()
            .map(|&c| normalize_symbol(&c.to_string(), strip))
            .collect();
        symbols.extend(
            config
                .extensions
                .iter()
                .map(|symbol| normalize_symbol(symbol, strip)),
        );

        let exclusions: HashSet<String> = config
            .exclusions
            .iter()
            .map(|symbol| normalize_symbol(symbol, strip))
            .collect();

        let mut aliases = HashMap::new();
        let mut removed = HashSet::new();
        for rule in &config.substitutions {
            let alias = normalize_symbol(&rule.alias, strip);
            if let Some(target) = &rule.target {
                aliases.insert(alias.clone(), normalize_symbol(target, strip));
            }
            removed.insert(alias);
        }

        symbols.retain(|symbol| !exclusions.contains(symbol) && !removed.contains(symbol));
        symbols.extend(aliases.values().cloned());
        symbols.sort_unstable();
        symbols.dedup();

        let index_bits = index_bits_for(symbols.len());

        Self {
            symbols,
            aliases,
            strip_skin_tones: strip,
            index_bits,
        }
    }

    /// Number of symbols in the alphabet; also the checksum base.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in checksum-value order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The symbol at `index`. Panics if `index` is out of range.
    pub fn symbol(&self, index: usize) -> &str {
        &self.symbols[index]
    }

    /// The checksum value of `symbol`, or `None` if it is not in the alphabet.
    pub fn index_of(&self, symbol: &str) -> Option<usize> {
        self.symbols
            .binary_search_by(|probe| probe.as_str().cmp(symbol))
            .ok()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.index_of(symbol).is_some()
    }

    /// Resolve one alias step: the symbol an alias is read back as, or
    /// `symbol` itself when no rule applies. Aliases are not chased through
    /// chains, so a rule whose target is itself an alias resolves one hop.
    pub fn resolve<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.aliases.get(symbol).map_or(symbol, String::as_str)
    }

    pub(crate) fn strips_skin_tones(&self) -> bool {
        self.strip_skin_tones
    }

    pub(crate) fn index_bits(&self) -> usize {
        self.index_bits
    }

    /// Bytes of entropy to request when `missing` more indices are needed:
    /// missing * index_bits * (2^index_bits / len) * 1.1, converted from bits
    /// to bytes and rounded up. The 2^index_bits / len factor covers the
    /// expected rejection rate and the 1.1 adds headroom against an unlucky
    /// draw.
    pub(crate) fn byte_budget(&self, missing: usize) -> usize {
        let numer = missing * self.index_bits * (1 << self.index_bits) * 11;
        numer.div_ceil(self.symbols.len() * 80)
    }
}

/// Smallest bit width that can express every index of a `len`-symbol alphabet.
fn index_bits_for(len: usize) -> usize {
    let mut bits = 1;
    while (1_usize << bits) < len {
        bits += 1;
    }
    bits
}

/// Uppercase a configured symbol, optionally dropping skin-tone modifiers,
/// so config entries and candidate input meet in the same form.
fn normalize_symbol(symbol: &str, strip: bool) -> String {
    let folded = symbol.to_uppercase();
    if strip {
        normalize::strip_skin_tones(&folded).into_owned()
    } else {
        folded
    }
}
