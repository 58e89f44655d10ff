//! Option tables and the dispatch loop that drives them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::option::{
    BoolOption, Float32Option, Float64Option, Help, Int32Option, Int64Option, IntOption, Opt,
    StringOption, looks_like_option,
};
use crate::value::Values;

/// A declaration of any kind, so heterogeneous tables can be held in one
/// `Vec` or written as data (`kind` tags the JSON form).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OptionDecl {
    Bool(BoolOption),
    String(StringOption),
    Int(IntOption),
    Int32(Int32Option),
    Int64(Int64Option),
    Float32(Float32Option),
    Float64(Float64Option),
}

impl OptionDecl {
    /// The declared long name, used as the key in the result mapping.
    pub fn name(&self) -> &str {
        match self {
            Self::Bool(o) => &o.name,
            Self::String(o) => &o.name,
            Self::Int(o) => &o.name,
            Self::Int32(o) => &o.name,
            Self::Int64(o) => &o.name,
            Self::Float32(o) => &o.name,
            Self::Float64(o) => &o.name,
        }
    }

    fn as_opt(&self) -> &dyn Opt {
        match self {
            Self::Bool(o) => o,
            Self::String(o) => o,
            Self::Int(o) => o,
            Self::Int32(o) => o,
            Self::Int64(o) => o,
            Self::Float32(o) => o,
            Self::Float64(o) => o,
        }
    }
}

impl Opt for OptionDecl {
    fn set_default_value(&self, values: &mut Values) {
        self.as_opt().set_default_value(values);
    }

    fn keywords(&self) -> Vec<String> {
        self.as_opt().keywords()
    }

    fn apply(&self, values: &mut Values, args: &[String]) -> Result<usize> {
        self.as_opt().apply(values, args)
    }

    fn help(&self) -> Help {
        self.as_opt().help()
    }
}

impl From<BoolOption> for OptionDecl {
    fn from(o: BoolOption) -> Self {
        Self::Bool(o)
    }
}

impl From<StringOption> for OptionDecl {
    fn from(o: StringOption) -> Self {
        Self::String(o)
    }
}

impl From<IntOption> for OptionDecl {
    fn from(o: IntOption) -> Self {
        Self::Int(o)
    }
}

impl From<Int32Option> for OptionDecl {
    fn from(o: Int32Option) -> Self {
        Self::Int32(o)
    }
}

impl From<Int64Option> for OptionDecl {
    fn from(o: Int64Option) -> Self {
        Self::Int64(o)
    }
}

impl From<Float32Option> for OptionDecl {
    fn from(o: Float32Option) -> Self {
        Self::Float32(o)
    }
}

impl From<Float64Option> for OptionDecl {
    fn from(o: Float64Option) -> Self {
        Self::Float64(o)
    }
}

/// Everything a parse produces: the typed values plus any tokens that
/// matched no keyword and did not look like options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parsed {
    pub values: Values,
    pub rest: Vec<String>,
}

/// An ordered table of option declarations.
///
/// Declarations are read-only after construction; a set can be shared across
/// threads, with each parse owning its own [`Values`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    options: Vec<OptionDecl>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn with(mut self, option: impl Into<OptionDecl>) -> Self {
        self.push(option);
        self
    }

    pub fn push(&mut self, option: impl Into<OptionDecl>) {
        self.options.push(option.into());
    }

    pub fn options(&self) -> &[OptionDecl] {
        &self.options
    }

    /// A fresh mapping seeded with every declared non-zero default.
    pub fn defaults(&self) -> Values {
        let mut values = Values::new();
        for option in &self.options {
            option.set_default_value(&mut values);
        }
        values
    }

    /// Parse a raw argument list.
    ///
    /// Seeds defaults, then scans: a token exactly matching a keyword
    /// invokes that option's `apply` with the remaining arguments and the
    /// cursor advances by the consumed count plus one for the keyword
    /// itself. An option-shaped token matching no keyword is an error; any
    /// other token lands in [`Parsed::rest`].
    pub fn parse(&self, argv: &[String]) -> Result<Parsed> {
        let mut values = self.defaults();
        let mut rest = Vec::new();

        let mut i = 0;
        'tokens: while i < argv.len() {
            let token = &argv[i];

            for option in &self.options {
                if option.keywords().iter().any(|k| k == token) {
                    let consumed = option.apply(&mut values, &argv[i + 1..])?;
                    tracing::debug!(
                        "matched '{token}' as '{}', consumed {consumed} value(s)",
                        option.name()
                    );
                    i += consumed + 1;
                    continue 'tokens;
                }
            }

            if looks_like_option(token) {
                return Err(Error::UnknownOption(token.clone()));
            }
            rest.push(token.clone());
            i += 1;
        }

        Ok(Parsed { values, rest })
    }

    /// Render a two-column help block, usage strings left-aligned to the
    /// widest row. No header and no trailing screen assembly; that is the
    /// caller's job.
    pub fn help(&self) -> String {
        let rows: Vec<Help> = self.options.iter().map(|o| o.help()).collect();
        let width = rows.iter().map(|h| h.usage.len()).max().unwrap_or(0);

        let mut out = String::new();
        for row in rows {
            if row.description.is_empty() {
                out.push_str(&format!("  {}\n", row.usage));
            } else {
                out.push_str(&format!(
                    "  {:width$}  {}\n",
                    row.usage, row.description
                ));
            }
        }
        out
    }
}
