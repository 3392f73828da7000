use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "readiness=error";
    }
    match verbose {
        0 => "readiness=warn",
        1 => "readiness=info",
        _ => "readiness=debug",
    }
}

pub fn init_cli_logger(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
