use indicatif::ProgressBar;

use crate::{
    color::{decode_color, encode_color, Base, Pixel},
    layout::Grid,
};

const CHANNELS: usize = 3;

/// RGB8 pixel buffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// All black raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Returns None if `data` is not `width * height` RGB triples.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height * CHANNELS {
            None
        } else {
            Some(Self {
                width,
                height,
                data,
            })
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn grid(&self) -> Grid {
        Grid::from_dims(self.width, self.height)
    }

    pub fn pixel(&self, offset: usize) -> Pixel {
        let idx = offset * CHANNELS;
        Pixel::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    pub fn set_pixel(&mut self, offset: usize, pixel: Pixel) {
        let idx = offset * CHANNELS;
        self.data[idx] = pixel.r;
        self.data[idx + 1] = pixel.g;
        self.data[idx + 2] = pixel.b;
    }
}

/// Sequence and quality string of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seq: Vec::with_capacity(capacity),
            qual: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    fn push(&mut self, base: Base, quality: u8) {
        self.seq.push(base.as_ascii());
        self.qual.push(quality);
    }
}

/// Render `seq` onto the smallest grid that holds it. Missing quality
/// characters are encoded as score 0. Returns None for an empty sequence.
pub fn encode_record(seq: &[u8], qual: &[u8], progress: &ProgressBar) -> Option<Raster> {
    let grid = Grid::for_len(seq.len())?;
    log::debug!(
        "Encoding {} bases onto {}x{} grid",
        seq.len(),
        grid.width(),
        grid.height()
    );
    if qual.len() < seq.len() {
        log::warn!(
            "Quality string is {} characters short, using score 0 for the remainder",
            seq.len() - qual.len()
        );
    }

    let mut raster = Raster::new(grid.width(), grid.height());
    for ((row, col), (idx, &b)) in grid.coords().zip(seq.iter().enumerate()) {
        let quality = qual.get(idx).copied().unwrap_or(0);
        let pixel = encode_color(Base::from_ascii(b), quality);
        raster.set_pixel(grid.raster_offset(row, col), pixel);
        if idx % grid.width() == 0 {
            progress.inc(grid.width() as u64);
        }
    }
    Some(raster)
}

/// Walk the raster in snake order, skipping black padding pixels.
pub fn decode_raster(raster: &Raster, progress: &ProgressBar) -> Record {
    let grid = raster.grid();
    let mut record = Record::with_capacity(grid.capacity());
    for (idx, (row, col)) in grid.coords().enumerate() {
        let pixel = raster.pixel(grid.raster_offset(row, col));
        if idx % grid.width() == 0 {
            progress.inc(grid.width() as u64);
        }
        if pixel.is_padding() {
            continue;
        }
        let (base, quality) = decode_color(pixel);
        record.push(base, quality);
    }
    log::debug!(
        "Decoded {} bases from {} pixels",
        record.len(),
        grid.capacity()
    );
    record
}
