//! Terminal client entry point.
mod shell;

use anyhow::Result;
use game_core::GameConfig;
use shell::Shell;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::new();
    let world = game_content::maze::build(&config)?;

    Shell::new(world, config).run()
}
