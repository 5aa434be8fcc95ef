use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    codec::encode_record,
    error::{PixelDnaError, Result},
    fastq, image_io,
    layout::Grid,
    utils,
};

/// Encode a FASTQ file into a PNG, written next to the input by default.
pub struct EncodeOptions {
    input: PathBuf,
    output: Option<PathBuf>,
    preserve_headers: bool,
    strict: bool,
    progress: bool,
}

impl EncodeOptions {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: None,
            preserve_headers: false,
            strict: false,
            progress: false,
        }
    }

    pub fn output<P: Into<PathBuf>>(&mut self, output: P) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    /// Write read headers to a `.hdr` sidecar next to the image
    pub fn preserve_headers(&mut self, preserve_headers: bool) -> &mut Self {
        self.preserve_headers = preserve_headers;
        self
    }

    /// Validate every FASTQ record instead of plain line framing
    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    pub fn progress(&mut self, progress: bool) -> &mut Self {
        self.progress = progress;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| utils::append_suffix(&self.input, ".png"))
    }

    /// Returns the path of the written image.
    pub fn run(&self) -> Result<PathBuf> {
        log::info!("Loading: [{}]", self.input.display());
        let reads = fastq::load(&self.input, self.strict)?;
        let record = &reads.record;
        let grid = Grid::for_len(record.len()).ok_or_else(|| PixelDnaError::EmptyInput {
            path: self.input.clone(),
        })?;
        log::info!(
            "Grid: {}x{} ({} bases)",
            grid.width(),
            grid.height(),
            record.len()
        );

        let pb = utils::progress_bar(grid.capacity() as u64, "Encoding bases", self.progress);
        let raster = encode_record(&record.seq, &record.qual, &pb).ok_or_else(|| {
            PixelDnaError::EmptyInput {
                path: self.input.clone(),
            }
        })?;
        pb.finish();

        let output = self.output_path();
        log::info!("Writing PNG to [{}]", output.display());
        image_io::save(&output, &raster)?;

        if self.preserve_headers {
            let sidecar = utils::header_sidecar(&output);
            write_sidecar(&sidecar, &reads.headers)?;
            log::info!(
                "Saved {} headers to [{}]",
                reads.headers.len(),
                sidecar.display()
            );
        }
        Ok(output)
    }
}

fn write_sidecar(path: &Path, headers: &[String]) -> Result<()> {
    let file = File::create(path).map_err(|e| PixelDnaError::write_failure(path, e))?;
    let mut writer = BufWriter::new(file);
    fastq::write_headers(&mut writer, headers)
        .and_then(|()| writer.flush())
        .map_err(|e| PixelDnaError::write_failure(path, e))
}
