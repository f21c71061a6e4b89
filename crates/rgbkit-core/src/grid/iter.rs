//! Row-major pixel iteration
//!
//! Both iterators visit every coordinate exactly once, `y` outer and `x`
//! inner, both ascending. Each call to [`Grid::pixels`] starts a fresh
//! pass.

use super::Grid;
use crate::Rgb;
use std::iter::FusedIterator;

/// Iterator over `(x, y, pixel)` triples of a grid.
#[derive(Debug, Clone)]
pub struct Pixels<'a> {
    data: std::slice::Iter<'a, Rgb>,
    width: u32,
    x: u32,
    y: u32,
}

impl Iterator for Pixels<'_> {
    type Item = (u32, u32, Rgb);

    fn next(&mut self) -> Option<Self::Item> {
        let px = *self.data.next()?;
        let item = (self.x, self.y, px);
        self.x += 1;
        if self.x == self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.data.size_hint()
    }
}

impl ExactSizeIterator for Pixels<'_> {}
impl FusedIterator for Pixels<'_> {}

/// Iterator over `(x, y, &mut pixel)` triples of a grid.
#[derive(Debug)]
pub struct PixelsMut<'a> {
    data: std::slice::IterMut<'a, Rgb>,
    width: u32,
    x: u32,
    y: u32,
}

impl<'a> Iterator for PixelsMut<'a> {
    type Item = (u32, u32, &'a mut Rgb);

    fn next(&mut self) -> Option<Self::Item> {
        let px = self.data.next()?;
        let item = (self.x, self.y, px);
        self.x += 1;
        if self.x == self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.data.size_hint()
    }
}

impl ExactSizeIterator for PixelsMut<'_> {}
impl FusedIterator for PixelsMut<'_> {}

impl Grid {
    /// Iterate over all pixels as `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> Pixels<'_> {
        Pixels {
            data: self.data.iter(),
            width: self.width,
            x: 0,
            y: 0,
        }
    }

    /// Iterate over all pixels mutably as `(x, y, &mut pixel)` in row-major order.
    pub fn pixels_mut(&mut self) -> PixelsMut<'_> {
        PixelsMut {
            data: self.data.iter_mut(),
            width: self.width,
            x: 0,
            y: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (u32, u32, Rgb);
    type IntoIter = Pixels<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        let grid = Grid::new(3, 2).unwrap();
        let coords: Vec<(u32, u32)> = grid.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_pixels_yield_stored_values() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 0, Rgb::WHITE).unwrap();
        grid.set(0, 1, Rgb::MID_GRAY).unwrap();
        for (x, y, px) in &grid {
            assert_eq!(px, grid.get(x, y).unwrap());
        }
    }

    #[test]
    fn test_iteration_is_restartable() {
        let grid = Grid::new(4, 3).unwrap();
        let it = grid.pixels();
        assert_eq!(it.len(), 12);
        let first: Vec<_> = it.clone().collect();
        let second: Vec<_> = it.collect();
        assert_eq!(first, second);
        assert_eq!(grid.pixels().count(), 12);
    }

    #[test]
    fn test_pixels_mut_writes_through() {
        let mut grid = Grid::new(3, 3).unwrap();
        for (x, y, px) in grid.pixels_mut() {
            *px = Rgb::new(x as u8, y as u8, 0);
        }
        assert_eq!(grid.get(2, 1).unwrap(), Rgb::new(2, 1, 0));
    }

    #[test]
    fn test_zero_width_iterates_nothing() {
        let grid = Grid::new(0, 7).unwrap();
        assert_eq!(grid.pixels().next(), None);
    }
}
