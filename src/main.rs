use tracing_subscriber::{EnvFilter, prelude::*};

fn main() -> anyhow::Result<()> {
    init_tracing();
    gmx_rooms::run()
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
