pub mod decode;
pub mod encode;

use std::path::PathBuf;

use libpixeldna::PixelDnaError;

/// Input paths are optional to clap so a missing one is reported as our own
/// error with exit code 1.
pub(crate) fn required_input(input: Option<PathBuf>) -> Result<PathBuf, PixelDnaError> {
    input.ok_or(PixelDnaError::MissingArgument)
}
