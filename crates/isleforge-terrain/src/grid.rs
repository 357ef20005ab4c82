//! Height grids.

use crate::error::{GridError, GridResult};

/// A caller-owned grid of 16-bit elevation samples.
///
/// Synthesis only reads and writes cells through these accessors. The
/// world-space scalars are bookkeeping for whatever consumes the grid; the
/// synthesizer never reads them.
pub trait HeightGrid {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Elevation at `(x, y)`.
    fn get_height(&self, x: u32, y: u32) -> GridResult<u16>;

    /// Stores an elevation at `(x, y)`.
    fn set_height(&mut self, x: u32, y: u32, value: u16) -> GridResult<()>;

    /// Horizontal world-space extent.
    fn world_size(&self) -> f32 {
        0.0
    }

    /// Vertical world-space extent.
    fn world_height(&self) -> f32 {
        0.0
    }
}

/// Dense in-memory height grid, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightmap {
    width: u32,
    height: u32,
    world_size: f32,
    world_height: f32,
    samples: Vec<u16>,
}

impl Heightmap {
    /// Creates a zero-filled grid.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            world_size: 0.0,
            world_height: 0.0,
            samples: vec![0; width as usize * height as usize],
        })
    }

    /// Creates a square zero-filled grid.
    pub fn square(size: u32) -> GridResult<Self> {
        Self::new(size, size)
    }

    /// Wraps existing row-major samples.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u16>) -> GridResult<Self> {
        if width == 0 || height == 0 || samples.len() != width as usize * height as usize {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            world_size: 0.0,
            world_height: 0.0,
            samples,
        })
    }

    /// Sets the world-space extents carried alongside the samples.
    pub fn with_world_scale(mut self, world_size: f32, world_height: f32) -> Self {
        self.world_size = world_size;
        self.world_height = world_height;
        self
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Consumes the grid, returning its row-major samples.
    pub fn into_samples(self) -> Vec<u16> {
        self.samples
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.samples.chunks_exact(self.width as usize)
    }

    fn index(&self, x: u32, y: u32) -> GridResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl HeightGrid for Heightmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn get_height(&self, x: u32, y: u32) -> GridResult<u16> {
        let idx = self.index(x, y)?;
        Ok(self.samples[idx])
    }

    #[inline]
    fn set_height(&mut self, x: u32, y: u32, value: u16) -> GridResult<()> {
        let idx = self.index(x, y)?;
        self.samples[idx] = value;
        Ok(())
    }

    fn world_size(&self) -> f32 {
        self.world_size
    }

    fn world_height(&self) -> f32 {
        self.world_height
    }
}

/// Copies every sample of `grid` into a row-major buffer.
pub(crate) fn snapshot<G: HeightGrid + ?Sized>(grid: &G) -> GridResult<Vec<u16>> {
    let (width, height) = (grid.width(), grid.height());
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            out.push(grid.get_height(x, y)?);
        }
    }
    Ok(out)
}
