use clap::Parser;
use common::utility::init_tracing;
use game::{config::Config, entrypoint};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_level);
    entrypoint::run(config)
}
