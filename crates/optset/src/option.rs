//! Option declarations and the per-kind parsing contract.
//!
//! Each kind implements the same four operations: seed its default, list its
//! keywords, apply itself against the remaining arguments, and render its
//! help fragment. The dispatch loop in [`crate::set`] drives them; nothing
//! here looks at more of the argument list than the value it may consume.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value::{Value, Values};

/// The `(usage, description)` fragment an option contributes to a help
/// screen. Derived on demand; column alignment is the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Help {
    pub usage: String,
    pub description: String,
}

/// The contract every option kind implements.
///
/// Declarations are immutable once constructed; all four operations are pure
/// functions of the declaration apart from their writes into [`Values`].
pub trait Opt {
    /// Write the declared default into `values`, iff one was declared
    /// (non-empty string, non-zero number). Boolean options never write a
    /// default: absent means `false`.
    fn set_default_value(&self, values: &mut Values);

    /// Recognized invocation tokens: `-{short}` if a short form is set,
    /// then `--{name}` if a name is set. Exact-token matching only.
    fn keywords(&self) -> Vec<String>;

    /// Consume this option's value (if any) from the arguments following
    /// the matched keyword, storing it under the option's name. Returns the
    /// number of extra tokens consumed. On failure the mapping is left
    /// untouched.
    fn apply(&self, values: &mut Values, args: &[String]) -> Result<usize>;

    /// Render the help fragment for this option.
    fn help(&self) -> Help;
}

/// Whether a token reads as an option rather than a value: length at least
/// two with a leading `-`. A lone `-` is a value.
///
/// This also swallows negative numbers (`-5` cannot be passed as a value);
/// see the crate docs.
pub(crate) fn looks_like_option(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('-')
}

fn value_token<'a>(args: &'a [String], usage: impl FnOnce() -> String) -> Result<&'a str> {
    match args.first() {
        Some(token) if !looks_like_option(token) => Ok(token.as_str()),
        _ => Err(Error::MissingValue { usage: usage() }),
    }
}

fn keyword_list(short: &str, name: &str) -> Vec<String> {
    let mut keywords = Vec::new();
    if !short.is_empty() {
        keywords.push(format!("-{short}"));
    }
    if !name.is_empty() {
        keywords.push(format!("--{name}"));
    }
    keywords
}

/// Synthesize a usage string unless an explicit override is given.
///
/// `placeholder` is the value placeholder appended to the long form
/// (`--port=number`); `None` for boolean options.
fn synthesized_usage(
    short: &str,
    name: &str,
    explicit: &str,
    placeholder: Option<&str>,
) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }

    let mut usage = String::new();
    if !short.is_empty() {
        usage.push('-');
        usage.push_str(short);
    }
    if !name.is_empty() {
        if !usage.is_empty() {
            usage.push(',');
        }
        usage.push_str("--");
        usage.push_str(name);
        if let Some(placeholder) = placeholder {
            usage.push('=');
            usage.push_str(placeholder);
        }
    }
    usage
}

/// A flag: `true` when present, absent otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoolOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usage: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub arg_usage: String,
}

impl Opt for BoolOption {
    fn set_default_value(&self, _values: &mut Values) {}

    fn keywords(&self) -> Vec<String> {
        keyword_list(&self.short, &self.name)
    }

    fn apply(&self, values: &mut Values, _args: &[String]) -> Result<usize> {
        values.set(self.name.clone(), Value::Bool(true));
        Ok(0)
    }

    fn help(&self) -> Help {
        Help {
            usage: synthesized_usage(&self.short, &self.name, &self.usage, None),
            description: self.description.clone(),
        }
    }
}

/// A string-valued option; stores the following token verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StringOption {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usage: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub arg_usage: String,
}

impl StringOption {
    fn usage_text(&self) -> String {
        let placeholder = if self.arg_usage.is_empty() {
            "string"
        } else {
            self.arg_usage.as_str()
        };
        synthesized_usage(&self.short, &self.name, &self.usage, Some(placeholder))
    }
}

impl Opt for StringOption {
    fn set_default_value(&self, values: &mut Values) {
        if self.default_value.is_empty() {
            return;
        }
        values.set(self.name.clone(), Value::Str(self.default_value.clone()));
    }

    fn keywords(&self) -> Vec<String> {
        keyword_list(&self.short, &self.name)
    }

    fn apply(&self, values: &mut Values, args: &[String]) -> Result<usize> {
        let token = value_token(args, || self.usage_text())?;
        values.set(self.name.clone(), Value::Str(token.to_string()));
        Ok(1)
    }

    fn help(&self) -> Help {
        let mut description = self.description.clone();
        if !self.default_value.is_empty() {
            description.push_str(&format!(" (default: {})", self.default_value));
        }
        Help {
            usage: self.usage_text(),
            description,
        }
    }
}

// The numeric kinds differ only in native type, stored variant, and zero
// sentinel; one macro covers all five.
macro_rules! numeric_option {
    ($(#[$meta:meta])* $opt:ident, $native:ty, $variant:ident, $zero:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub struct $opt {
            pub name: String,
            #[serde(default, skip_serializing_if = "String::is_empty")]
            pub short: String,
            #[serde(default)]
            pub default_value: $native,
            #[serde(default, skip_serializing_if = "String::is_empty")]
            pub description: String,
            #[serde(default, skip_serializing_if = "String::is_empty")]
            pub usage: String,
            #[serde(default, skip_serializing_if = "String::is_empty")]
            pub arg_usage: String,
        }

        impl $opt {
            fn usage_text(&self) -> String {
                let placeholder = if self.arg_usage.is_empty() {
                    "number"
                } else {
                    self.arg_usage.as_str()
                };
                synthesized_usage(&self.short, &self.name, &self.usage, Some(placeholder))
            }
        }

        impl Opt for $opt {
            fn set_default_value(&self, values: &mut Values) {
                if self.default_value == $zero {
                    return;
                }
                values.set(self.name.clone(), Value::$variant(self.default_value));
            }

            fn keywords(&self) -> Vec<String> {
                keyword_list(&self.short, &self.name)
            }

            fn apply(&self, values: &mut Values, args: &[String]) -> Result<usize> {
                let token = value_token(args, || self.usage_text())?;
                let parsed = token.parse::<$native>()?;
                values.set(self.name.clone(), Value::$variant(parsed));
                Ok(1)
            }

            fn help(&self) -> Help {
                let mut description = self.description.clone();
                if self.default_value != $zero {
                    description.push_str(&format!(" (default: {})", self.default_value));
                }
                Help {
                    usage: self.usage_text(),
                    description,
                }
            }
        }
    };
}

numeric_option!(
    /// An integer-valued option. Parses at 64-bit width, like the 32/64-bit
    /// kinds but without committing the declaration to a width in its name.
    IntOption,
    i64,
    Int64,
    0
);
numeric_option!(
    /// A 32-bit integer option; out-of-range literals are parse errors.
    Int32Option,
    i32,
    Int32,
    0
);
numeric_option!(
    /// A 64-bit integer option.
    Int64Option,
    i64,
    Int64,
    0
);
numeric_option!(
    /// A 32-bit float option.
    Float32Option,
    f32,
    Float32,
    0.0
);
numeric_option!(
    /// A 64-bit float option.
    Float64Option,
    f64,
    Float64,
    0.0
);
