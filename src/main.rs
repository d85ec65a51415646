//! CLI entry point for the photomosaic builder

use clap::Parser;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tilemosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    let _ = TermLogger::init(
        cli.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut processor = MosaicProcessor::new(cli);
    processor.process()?;
    Ok(())
}
