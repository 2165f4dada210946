/*!
 * Escaping pipeline for embedding block markup.
 *
 * The content ends up inside a single-quoted PHP string which itself sits in
 * a JSON string value. Three passes get it there, always in this order:
 * 1. `escape_single`: `'` becomes `\'`
 * 2. `flatten`: every `\n` is removed
 * 3. `escape_double`: `"` becomes `\"`
 *
 * Backslashes already present in the source are left as they are. Use
 * [`audit`] to find them before trusting the output.
 */

use std::fmt;

// @transforms: ' -> \'
pub fn escape_single(text: &str) -> String {
    text.replace('\'', "\\'")
}

// @transforms: removes every \n, no separator inserted
pub fn flatten(text: &str) -> String {
    text.replace('\n', "")
}

// @transforms: " -> \"
pub fn escape_double(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Run the full pipeline once.
///
/// Not idempotent: feeding the output back in escapes the inserted
/// backslash-quote pairs a second time.
pub fn transform(text: &str) -> String {
    escape_double(&flatten(&escape_single(text)))
}

/// Every intermediate value of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stages<'a> {
    /// Input text, untouched
    pub source: &'a str,
    /// After `escape_single`
    pub quote_escaped: String,
    /// After `flatten`
    pub flattened: String,
    /// After `escape_double`; the final output
    pub json_escaped: String,
}

impl<'a> Stages<'a> {
    /// Run the pipeline over `source`, keeping each stage
    pub fn run(source: &'a str) -> Self {
        let quote_escaped = escape_single(source);
        let flattened = flatten(&quote_escaped);
        let json_escaped = escape_double(&flattened);

        Self {
            source,
            quote_escaped,
            flattened,
            json_escaped,
        }
    }

    /// The final output
    pub fn output(&self) -> &str {
        &self.json_escaped
    }

    /// Stages as `(label, text)` pairs in pipeline order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("source", self.source),
            ("quote-escaped", self.quote_escaped.as_str()),
            ("flattened", self.flattened.as_str()),
            ("json-escaped", self.json_escaped.as_str()),
        ]
        .into_iter()
    }
}

/// Something in a source text the pipeline does not account for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    /// A backslash already in the source. It is never doubled, so a following
    /// quote would read as escaped and a following letter as a JSON escape.
    PreexistingBackslash {
        /// Byte offset in the source
        offset: usize,
    },
    /// A carriage return. Only `\n` is flattened, so `\r` reaches the output.
    CarriageReturn {
        /// Byte offset in the source
        offset: usize,
    },
}

impl Hazard {
    // @returns: Byte offset of the offending character
    pub fn offset(&self) -> usize {
        match self {
            Self::PreexistingBackslash { offset } | Self::CarriageReturn { offset } => *offset,
        }
    }
}

impl fmt::Display for Hazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreexistingBackslash { offset } => write!(
                f,
                "backslash at byte {} is not escaped and will be ambiguous in the output",
                offset
            ),
            Self::CarriageReturn { offset } => write!(
                f,
                "carriage return at byte {} survives flattening",
                offset
            ),
        }
    }
}

/// List hazards in `source`, ordered by offset.
///
/// Only reports. The pipeline output is the same whether or not this finds
/// anything.
pub fn audit(source: &str) -> Vec<Hazard> {
    source
        .char_indices()
        .filter_map(|(offset, c)| match c {
            '\\' => Some(Hazard::PreexistingBackslash { offset }),
            '\r' => Some(Hazard::CarriageReturn { offset }),
            _ => None,
        })
        .collect()
}
