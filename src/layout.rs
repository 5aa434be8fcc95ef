//! Placement of a linear sequence onto a square-ish pixel grid.
//!
//! Bases are laid out in snake order: even rows run left to right, odd rows
//! right to left. Storage stays row-major, only the index to coordinate
//! assignment snakes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Smallest grid for `n` bases with `width = ceil(sqrt(n))`, None if `n`
    /// is zero.
    pub fn for_len(n: usize) -> Option<Self> {
        if n == 0 {
            return None;
        }
        let width = ceil_sqrt(n);
        let height = n.div_ceil(width);
        Some(Grid { width, height })
    }

    pub fn from_dims(width: usize, height: usize) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    /// Pixel index in row-major storage
    pub fn raster_offset(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Snake coordinates for every cell of the grid, in sequence order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.capacity()).map(move |i| linear_to_coord(i, width))
    }
}

/// Coordinate `(row, col)` of the `i`th base, odd rows are mirrored.
pub fn linear_to_coord(i: usize, width: usize) -> (usize, usize) {
    let row = i / width;
    let col = i % width;
    if row % 2 == 1 {
        (row, (width - 1) - col)
    } else {
        (row, col)
    }
}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root < n {
        root += 1;
    }
    while root > 1 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}
