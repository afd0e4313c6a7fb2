mod cli;
mod commands;

use cli::{ConstantsParams, EnumsParams, GenerateParams, StubsParams, build_cli};

/// Route `tracing` events to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("constants", m)) => {
            let params = ConstantsParams::from_matches(m);
            commands::constants::run(params.into());
        }
        Some(("stubs", m)) => {
            let params = StubsParams::from_matches(m);
            commands::stubs::run(params.into());
        }
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("enums", m)) => {
            let params = EnumsParams::from_matches(m);
            commands::enums::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
