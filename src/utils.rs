use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};

/// Progress bar over `len` items, hidden unless `show` is set.
pub fn progress_bar(len: u64, msg: &'static str, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {percent}% {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("##-");
    ProgressBar::new(len)
        .with_style(style)
        .with_message(msg)
        .with_finish(ProgressFinish::AndLeave)
}

/// `path` with `suffix` appended to its final component, `reads.fastq`
/// becomes `reads.fastq.png` rather than `reads.png`.
pub fn append_suffix<P: AsRef<Path>>(path: P, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_ref().as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Sidecar holding read headers for an image, `reads.fastq.png` looks for
/// `reads.fastq.hdr`.
pub fn header_sidecar<P: AsRef<Path>>(image: P) -> PathBuf {
    let image = image.as_ref();
    match image.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("png") => image.with_extension("hdr"),
        _ => append_suffix(image, ".hdr"),
    }
}
