//! Reading and writing FASTQ text.
//!
//! All records of an input file are concatenated into a single sequence and
//! quality string, headers are kept aside for the optional sidecar file.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read, Write},
    path::Path,
};

use bio::io::fastq;

use crate::{
    codec::Record,
    error::{PixelDnaError, Result},
};

pub const RESTORED_HEADER: &str = "Restored_Pixel_DNA";

/// Every record of a FASTQ file joined end to end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadSet {
    pub headers: Vec<String>,
    pub record: Record,
}

/// Line based framing: line 1 of every four is sequence, line 3 is quality
/// and line 0 the header. Nothing else is validated.
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<ReadSet> {
    let mut reads = ReadSet::default();
    for (line_idx, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        match line_idx % 4 {
            0 => {
                let header = line.strip_prefix(b"@").unwrap_or(&line);
                reads
                    .headers
                    .push(String::from_utf8_lossy(header).into_owned());
            }
            1 => reads.record.seq.append(&mut line),
            3 => reads.record.qual.append(&mut line),
            _ => (),
        }
    }
    Ok(reads)
}

/// Validating framing backed by `bio`, each record must be well formed.
pub fn read_strict<R: Read>(reader: R) -> std::result::Result<ReadSet, String> {
    let mut reads = ReadSet::default();
    for (idx, rec) in fastq::Reader::new(reader).records().enumerate() {
        let rec = rec.map_err(|e| format!("record {}: {e}", idx + 1))?;
        rec.check()
            .map_err(|e| format!("record {} ({}): {e}", idx + 1, rec.id()))?;
        let header = match rec.desc() {
            Some(desc) => format!("{} {desc}", rec.id()),
            None => rec.id().to_owned(),
        };
        reads.headers.push(header);
        reads.record.seq.extend_from_slice(rec.seq());
        reads.record.qual.extend_from_slice(rec.qual());
    }
    Ok(reads)
}

pub fn load<P: AsRef<Path>>(path: P, strict: bool) -> Result<ReadSet> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PixelDnaError::unreadable(path, e))?;
    let reader = BufReader::new(file);
    let reads = if strict {
        read_strict(reader).map_err(|e| PixelDnaError::unreadable(path, e))?
    } else {
        read_lines(reader).map_err(|e| PixelDnaError::unreadable(path, e))?
    };
    log::debug!(
        "Read {} records, {} bases from {path:?}",
        reads.headers.len(),
        reads.record.len()
    );
    Ok(reads)
}

pub fn write_record<W: Write>(
    writer: &mut W,
    header: &str,
    seq: &[u8],
    qual: &[u8],
) -> std::io::Result<()> {
    writeln!(writer, "@{header}")?;
    writer.write_all(seq)?;
    writer.write_all(b"\n+\n")?;
    writer.write_all(qual)?;
    writer.write_all(b"\n")
}

/// Single synthetic record holding every decoded base.
pub fn write_restored<W: Write>(writer: &mut W, record: &Record) -> std::io::Result<()> {
    write_record(writer, RESTORED_HEADER, &record.seq, &record.qual)
}

/// One record per header. Read lengths are not stored, every read gets an
/// equal share of the bases and the last one takes what is left.
pub fn write_with_headers<W: Write>(
    writer: &mut W,
    record: &Record,
    headers: &[String],
) -> std::io::Result<()> {
    if headers.is_empty() {
        return write_restored(writer, record);
    }
    let share = record.len() / headers.len();
    let mut start = 0;
    for (idx, header) in headers.iter().enumerate() {
        let end = if idx == headers.len() - 1 {
            record.len()
        } else {
            start + share
        };
        write_record(
            writer,
            header,
            &record.seq[start..end],
            &record.qual[start..end],
        )?;
        start = end;
    }
    Ok(())
}

pub fn write_headers<W: Write>(writer: &mut W, headers: &[String]) -> std::io::Result<()> {
    writer.write_all(headers.join("\n").as_bytes())
}

pub fn read_headers<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}
