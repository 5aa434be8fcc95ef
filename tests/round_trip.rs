use std::{error::Error, fs};

use assert_fs::{prelude::*, TempDir};
use libpixeldna::{codec::Raster, image_io, DecodeOptions, EncodeOptions};
use log::LevelFilter;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

#[test]
fn acgt_round_trip() -> Result<(), Box<dyn Error>> {
    init_logging();
    let temp_dir = TempDir::new()?.into_persistent_if(std::env::var("TEST_PERSIST").is_ok());
    let input = temp_dir.child("acgt.fastq");
    input.write_str("@read\nACGT\n+\n!!!!\n")?;

    let image = EncodeOptions::new(input.path()).run()?;
    let raster: Raster = image_io::load(&image)?;
    assert_eq!((raster.width(), raster.height()), (2, 2));

    let restored = DecodeOptions::new(&image).run()?;
    assert_eq!(restored, temp_dir.child("acgt.fastq.png.restored.fastq").path());
    assert_eq!(
        fs::read_to_string(restored)?,
        "@Restored_Pixel_DNA\nACGT\n+\n!!!!\n"
    );
    Ok(())
}

#[test]
fn multiple_records_are_concatenated() -> Result<(), Box<dyn Error>> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let input = temp_dir.child("reads.fastq");
    input.write_str("@r1\nacgtA\n+\nIIII5\n@r2\nTTGCA\n+\n+5I!#\n")?;

    let image = EncodeOptions::new(input.path()).run()?;
    let raster = image_io::load(&image)?;
    assert_eq!((raster.width(), raster.height()), (4, 3));

    let restored = DecodeOptions::new(&image).run()?;
    assert_eq!(
        fs::read_to_string(restored)?,
        "@Restored_Pixel_DNA\nACGTATTGCA\n+\nIIII5+5I!#\n"
    );
    Ok(())
}

#[test]
fn n_bases_are_lost() -> Result<(), Box<dyn Error>> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let input = temp_dir.child("n.fastq");
    input.write_str("@r1\nANNNC\n+\nIIIII\n")?;

    let image = EncodeOptions::new(input.path()).run()?;
    let restored = DecodeOptions::new(&image).run()?;
    assert_eq!(
        fs::read_to_string(restored)?,
        "@Restored_Pixel_DNA\nAC\n+\nII\n"
    );
    Ok(())
}

#[test]
fn headers_split_reads() -> Result<(), Box<dyn Error>> {
    init_logging();
    let temp_dir = TempDir::new()?;
    let input = temp_dir.child("reads.fastq");
    input.write_str("@r1 lane=1\nACGT\n+\nIIII\n@r2 lane=1\nTGCA\n+\n!!!!\n")?;

    let image = EncodeOptions::new(input.path())
        .preserve_headers(true)
        .strict(true)
        .run()?;
    temp_dir
        .child("reads.fastq.hdr")
        .assert("r1 lane=1\nr2 lane=1");

    let restored = DecodeOptions::new(&image).run()?;
    assert_eq!(
        fs::read_to_string(restored)?,
        "@r1 lane=1\nACGT\n+\nIIII\n@r2 lane=1\nTGCA\n+\n!!!!\n"
    );
    Ok(())
}
