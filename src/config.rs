/// A substitution rule: `alias` is kept out of the alphabet, and a candidate
/// typed with it is read back as `target`. A rule without a target means the
/// alias is simply discarded from candidate input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub alias: String,
    pub target: Option<String>,
}

impl Substitution {
    pub fn map(alias: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target: Some(target.into()),
        }
    }

    pub fn discard(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub base: Vec<char>,
    pub extensions: Vec<String>,
    pub exclusions: Vec<String>,
    pub substitutions: Vec<Substitution>,
    pub default_size: usize,
    pub strip_skin_tones: bool,
}

impl TokenConfig {
    /// Default configuration: digits and uppercase letters, with the
    /// lookalikes I, L, O, and U aliased to 1, 1, 0, and V.
    pub fn new() -> Self {
        Self {
            base: ('0'..='9').chain('A'..='Z').collect(),
            extensions: Vec::new(),
            exclusions: Vec::new(),
            substitutions: vec![
                Substitution::map('I', '1'),
                Substitution::map('L', '1'),
                Substitution::map('O', '0'),
                Substitution::map('U', 'V'),
            ],
            default_size: 10,
            strip_skin_tones: false,
        }
    }

    /// Add symbols to the alphabet. Each symbol is one grapheme cluster,
    /// so multi-codepoint emoji are fine.
    pub fn extend_chars<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Remove symbols from the alphabet.
    pub fn exclude_chars<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Alias one symbol to another, e.g. `substitute('B', '8')`.
    pub fn substitute(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.substitutions.push(Substitution::map(alias, target));
        self
    }

    /// Alias several symbols to the same target at once.
    pub fn substitute_group<I, S>(mut self, aliases: I, target: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = target.into();
        self.substitutions.extend(
            aliases
                .into_iter()
                .map(|alias| Substitution::map(alias, target.clone())),
        );
        self
    }

    /// Keep symbols out of the alphabet and silently discard them from
    /// candidate input.
    pub fn discard_chars<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.substitutions
            .extend(aliases.into_iter().map(Substitution::discard));
        self
    }

    /// Drop every substitution rule, including the defaults.
    pub fn clear_substitutions(mut self) -> Self {
        self.substitutions.clear();
        self
    }

    pub fn default_size(mut self, size: usize) -> Self {
        self.default_size = size;
        self
    }

    /// Treat skin-tone variants of a symbol as the symbol itself.
    pub fn strip_skin_tones(mut self, strip: bool) -> Self {
        self.strip_skin_tones = strip;
        self
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self::new()
    }
}
