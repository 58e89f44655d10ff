//! Declarative command-line option parsing and help rendering.
//!
//! Declare a table of typed options (boolean flags, strings, integers in
//! several widths, floats in two), then parse a raw argument list into a
//! mapping of option name to typed value, defaults applied where unset.
//! Help text is derived from the same declarations, so it cannot drift from
//! parsing behavior.
//!
//! ```
//! use optset::{BoolOption, IntOption, OptionSet};
//!
//! let options = OptionSet::new()
//!     .with(BoolOption {
//!         name: "verbose".to_string(),
//!         short: "v".to_string(),
//!         description: "chatty output".to_string(),
//!         ..Default::default()
//!     })
//!     .with(IntOption {
//!         name: "port".to_string(),
//!         short: "p".to_string(),
//!         description: "listen port".to_string(),
//!         default_value: 8080,
//!         ..Default::default()
//!     });
//!
//! let argv = vec!["-v".to_string(), "--port".to_string(), "9000".to_string()];
//! let parsed = options.parse(&argv)?;
//! assert!(parsed.values.flag("verbose"));
//! assert_eq!(parsed.values.get_i64("port"), Some(9000));
//! # Ok::<(), optset::Error>(())
//! ```
//!
//! Matching is exact-token only: no combined short flags, no `--name=value`
//! syntax, no prefix matching, and no positional-argument declarations
//! (unmatched plain tokens are handed back in [`Parsed::rest`]).
//!
//! A value for an option must not itself look like an option: any token of
//! length two or more starting with `-` is rejected, so a negative number
//! cannot be supplied as a value (a lone `-` is fine). This is existing
//! behavior, kept deliberately.

mod error;
mod option;
mod set;
mod value;

pub use error::{Error, Result};
pub use option::{
    BoolOption, Float32Option, Float64Option, Help, Int32Option, Int64Option, IntOption, Opt,
    StringOption,
};
pub use set::{OptionDecl, OptionSet, Parsed};
pub use value::{Value, Values};
