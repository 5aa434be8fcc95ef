use std::path::PathBuf;

use clap::Parser;
use libpixeldna::DecodeOptions;

#[derive(Parser, Debug)]
pub struct DecodeCmd {
    /// Path to PNG image from pixeldna encode
    pub input: Option<PathBuf>,

    /// Path to output FASTQ, defaults to {input}.restored.fastq
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Write a single record even if a .hdr sidecar is found
    #[clap(long)]
    pub ignore_headers: bool,

    /// Show a progress bar
    #[clap(long)]
    pub progress: bool,
}

impl DecodeCmd {
    pub fn run(self) -> eyre::Result<()> {
        let input = super::required_input(self.input)?;
        let mut decode = DecodeOptions::new(input);
        decode.headers(!self.ignore_headers).progress(self.progress);
        if let Some(output) = self.output {
            decode.output(output);
        }
        let output = decode.run()?;
        log::info!("SUCCESS: Restored to [{}]", output.display());
        Ok(())
    }
}
