use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use crate::{
    codec::decode_raster,
    error::{PixelDnaError, Result},
    fastq, image_io, utils,
};

/// Restore a FASTQ file from a PNG written by [`crate::encode::EncodeOptions`].
pub struct DecodeOptions {
    input: PathBuf,
    output: Option<PathBuf>,
    headers: bool,
    progress: bool,
}

impl DecodeOptions {
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: None,
            headers: true,
            progress: false,
        }
    }

    pub fn output<P: Into<PathBuf>>(&mut self, output: P) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    /// Split the bases into one record per header when a sidecar is present
    pub fn headers(&mut self, headers: bool) -> &mut Self {
        self.headers = headers;
        self
    }

    pub fn progress(&mut self, progress: bool) -> &mut Self {
        self.progress = progress;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| utils::append_suffix(&self.input, ".restored.fastq"))
    }

    fn load_headers(&self) -> Result<Vec<String>> {
        let sidecar = utils::header_sidecar(&self.input);
        if !self.headers || !sidecar.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&sidecar).map_err(|e| PixelDnaError::unreadable(&sidecar, e))?;
        let headers = fastq::read_headers(BufReader::new(file))
            .map_err(|e| PixelDnaError::unreadable(&sidecar, e))?;
        log::info!(
            "Using {} headers from [{}]",
            headers.len(),
            sidecar.display()
        );
        Ok(headers)
    }

    /// Returns the path of the written FASTQ file.
    pub fn run(&self) -> Result<PathBuf> {
        log::info!("Loading: [{}]", self.input.display());
        let raster = image_io::load(&self.input)?;
        let grid = raster.grid();

        let pb = utils::progress_bar(grid.capacity() as u64, "Decoding pixels", self.progress);
        let record = decode_raster(&raster, &pb);
        pb.finish();
        if record.is_empty() {
            return Err(PixelDnaError::EmptyInput {
                path: self.input.clone(),
            });
        }
        log::info!(
            "Grid: {}x{} ({} bases)",
            grid.width(),
            grid.height(),
            record.len()
        );

        let headers = self.load_headers()?;
        let output = self.output_path();
        let file = File::create(&output).map_err(|e| PixelDnaError::write_failure(&output, e))?;
        let mut writer = BufWriter::new(file);
        fastq::write_with_headers(&mut writer, &record, &headers)
            .and_then(|()| writer.flush())
            .map_err(|e| PixelDnaError::write_failure(&output, e))?;
        log::info!("Restored to [{}]", output.display());
        Ok(output)
    }
}
