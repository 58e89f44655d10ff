//! Demonstration binary: a static option table parsed against real argv.
//!
//! Prints the resolved `name = value` mapping plus any leftover tokens, or
//! the derived help block for `--help`.

use anyhow::Result;
use optset::{BoolOption, Float64Option, Int32Option, IntOption, OptionSet, StringOption};
use tracing_subscriber::{EnvFilter, fmt};

fn demo_options() -> OptionSet {
    OptionSet::new()
        .with(BoolOption {
            name: "help".to_string(),
            short: "h".to_string(),
            description: "show this help".to_string(),
            ..Default::default()
        })
        .with(BoolOption {
            name: "verbose".to_string(),
            short: "v".to_string(),
            description: "chatty output".to_string(),
            ..Default::default()
        })
        .with(StringOption {
            name: "host".to_string(),
            default_value: "127.0.0.1".to_string(),
            arg_usage: "HOST".to_string(),
            description: "bind host".to_string(),
            ..Default::default()
        })
        .with(IntOption {
            name: "port".to_string(),
            short: "p".to_string(),
            default_value: 8080,
            description: "listen port".to_string(),
            ..Default::default()
        })
        .with(Int32Option {
            name: "workers".to_string(),
            description: "worker threads (0 = one per core)".to_string(),
            ..Default::default()
        })
        .with(Float64Option {
            name: "rate".to_string(),
            default_value: 0.5,
            description: "sample rate".to_string(),
            ..Default::default()
        })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let options = demo_options();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let parsed = options.parse(&argv)?;

    if parsed.values.flag("help") {
        print!(
            "optdemo - exercise the optset option table\n\nUsage: optdemo [OPTIONS] [ARGS]\n\nOptions:\n{}",
            options.help()
        );
        return Ok(());
    }

    tracing::debug!("parsed {} value(s)", parsed.values.len());
    for (name, value) in parsed.values.iter() {
        println!("{name} = {value}");
    }
    for token in &parsed.rest {
        println!("arg: {token}");
    }

    Ok(())
}
