mod cmd;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use eyre::Result;
use human_panic::setup_panic;
#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about=None)]
/// Store sequencing reads as images.
struct Args {
    #[clap(flatten)]
    verbose: Verbosity,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a FASTQ file as a PNG image
    ///
    /// Output file will be named {input}.png
    Encode(cmd::encode::EncodeCmd),

    /// Restore a FASTQ file from a PNG image
    ///
    /// Output file will be named {input}.restored.fastq
    Decode(cmd::decode::DecodeCmd),
}

fn main() -> Result<()> {
    setup_panic!();
    jane_eyre::install()?;

    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Commands::Encode(cmd) => cmd.run()?,
        Commands::Decode(cmd) => cmd.run()?,
    }
    Ok(())
}
