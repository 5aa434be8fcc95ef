use std::path::PathBuf;

use clap::Parser;
use libpixeldna::EncodeOptions;

#[derive(Parser, Debug)]
pub struct EncodeCmd {
    /// Path to FASTQ file, all records are concatenated into one image
    pub input: Option<PathBuf>,

    /// Path to output PNG, defaults to {input}.png
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Save read headers to a .hdr sidecar next to the image so decode can
    /// split the bases back into reads
    #[clap(long)]
    pub preserve_headers: bool,

    /// Validate each FASTQ record instead of only taking every 2nd and 4th
    /// line
    #[clap(long)]
    pub strict: bool,

    /// Show a progress bar
    #[clap(long)]
    pub progress: bool,
}

impl EncodeCmd {
    pub fn run(self) -> eyre::Result<()> {
        let input = super::required_input(self.input)?;
        let mut encode = EncodeOptions::new(input);
        encode
            .preserve_headers(self.preserve_headers)
            .strict(self.strict)
            .progress(self.progress);
        if let Some(output) = self.output {
            encode.output(output);
        }
        let output = encode.run()?;
        log::info!("SUCCESS: Image saved to [{}]", output.display());
        Ok(())
    }
}
