//! The ordered argument model exchanged with the host.
//!
//! Arguments are parsed once during locate and consumed verbatim at launch; the
//! representation keeps both the keyed `--key value` pairs and the trailing
//! positional tokens, in their original order, so serialization round-trips the
//! token vector.

/// An ordered sequence of command-line tokens plus a keyed lookup over named options.
///
/// A token starting with `--` that is followed by another token forms a keyed pair;
/// everything else is kept as a positional token. Pairs are stored in insertion
/// order (a repeated key overwrites its value in place), so [`Arguments::to_vec`]
/// is deterministic: keyed pairs first, positionals after.
///
/// # Example
/// ```rust
/// use cosmic_provider::host::Arguments;
///
/// let mut args = Arguments::new();
/// args.parse(&["--appDirectory".into(), "/srv/game".into(), "extra".into()]);
///
/// assert_eq!(args.get("appDirectory"), Some("/srv/game"));
/// assert_eq!(args.to_vec(), vec!["--appDirectory", "/srv/game", "extra"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    pairs: Vec<(String, String)>,
    positional: Vec<String>,
}

impl Arguments {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Arguments {
        Arguments::default()
    }

    /// Parse a token vector into this argument set.
    ///
    /// A `--key` token consumes the following token as its value; a trailing
    /// `--key` with nothing after it is kept as a positional token.
    ///
    /// ## Arguments
    /// * 'args' - The raw command-line tokens, in order
    pub fn parse(&mut self, args: &[String]) {
        let mut iter = args.iter();
        while let Some(token) = iter.next() {
            if let Some(key) = token.strip_prefix("--") {
                if let Some(value) = iter.next() {
                    self.put(key, value);
                    continue;
                }
            }
            self.positional.push(token.clone());
        }
    }

    /// The value of a named option, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The value of a named option, or `default` if absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if a named option is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a named option, overwriting an existing value in place.
    ///
    /// ## Arguments
    /// * 'key'   - The option name, without the `--` prefix
    /// * 'value' - The option value
    pub fn put(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Serialize back into a token vector: keyed pairs in insertion order, then
    /// positional tokens in their original order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.pairs.len() * 2 + self.positional.len());
        for (key, value) in &self.pairs {
            out.push(format!("--{key}"));
            out.push(value.clone());
        }
        out.extend(self.positional.iter().cloned());
        out
    }
}
