//! Character frame buffer.
//!
//! A fixed-size grid of [`Glyph`] cells, rebuilt from scratch every frame and
//! turned into one block of text for the console.

/// Cell value of the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    /// Sample point lies inside the triangle.
    Filled,
    #[default]
    Empty,
}

impl Glyph {
    pub const fn as_char(self) -> char {
        match self {
            Glyph::Filled => '@',
            Glyph::Empty => '-',
        }
    }
}

/// Owning `width * height` grid of glyphs in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: Vec<Glyph>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    /// Create a buffer with every cell set to [`Glyph::Empty`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Glyph::Empty; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set the cell at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, glyph: Glyph) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = glyph;
        }
    }

    /// Get the cell at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Glyph> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Glyph]> {
        // chunks() panics on zero; an empty grid has no rows either way
        self.cells.chunks(self.width.max(1))
    }

    pub fn count(&self, glyph: Glyph) -> usize {
        self.cells.iter().filter(|&&cell| cell == glyph).count()
    }

    /// Text form of the frame: a leading newline, then every row followed by
    /// its own newline.
    pub fn render_text(&self) -> String {
        let mut text = String::with_capacity(1 + self.height * (self.width + 1));
        text.push('\n');
        for row in self.rows() {
            text.extend(row.iter().map(|glyph| glyph.as_char()));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.count(Glyph::Empty), 12);
        assert_eq!(fb.count(Glyph::Filled), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set(3, 2, Glyph::Filled);
        assert_eq!(fb.get(3, 2), Some(Glyph::Filled));
        assert_eq!(fb.get(2, 3), None);
        // out of bounds writes are dropped
        fb.set(4, 0, Glyph::Filled);
        assert_eq!(fb.count(Glyph::Filled), 1);
    }

    #[test]
    fn test_render_text_layout() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(0, 0, Glyph::Filled);
        fb.set(2, 1, Glyph::Filled);
        assert_eq!(fb.render_text(), "\n@--\n--@\n");
    }

    #[test]
    fn test_zero_sized_buffer() {
        let fb = FrameBuffer::new(0, 0);
        assert_eq!(fb.rows().count(), 0);
        assert_eq!(fb.render_text(), "\n");
    }
}
