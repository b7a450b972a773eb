use std::ops::{Index, IndexMut};

/// Row-major 2-D buffer addressed by `(x, y)`. Row `y = 0` is the first row
/// in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(width: u32, height: u32, value: T) -> Self {
        Self { width, height, data: vec![value; width as usize * height as usize] }
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height { return None }
        Some(self.data[self.offset(x, y)])
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn row(&self, y: u32) -> &[T] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width as usize]
    }

    pub fn row_mut(&mut self, y: u32) -> &mut [T] {
        let start = self.offset(0, y);
        let width = self.width as usize;
        &mut self.data[start..start + width]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Swap rows top to bottom in place.
    pub fn flip_vertically(&mut self) {
        let width = self.width as usize;
        let height = self.height as usize;
        for y in 0..height / 2 {
            let (top, bottom) = self.data.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }
}

impl<T: Copy> Index<(u32, u32)> for Grid<T> {
    type Output = T;
    fn index(&self, (x, y): (u32, u32)) -> &T {
        &self.data[self.offset(x, y)]
    }
}

impl<T: Copy> IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let i = self.offset(x, y);
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_row_major() {
        let grid = Grid::from_fn(3, 2, |x, y| x + 10 * y);
        assert_eq!(grid[(2, 1)], 12);
        assert_eq!(grid.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.row(1), &[10, 11, 12]);
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = Grid::new(2, 2, 0u8);
        assert_eq!(grid.get(1, 1), Some(0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn writes_through_index_mut() {
        let mut grid = Grid::new(4, 4, 0.0f32);
        grid[(3, 2)] = 1.5;
        assert_eq!(grid.get(3, 2), Some(1.5));
        grid.row_mut(0).fill(2.0);
        assert_eq!(grid.row(0), &[2.0; 4]);
        grid.fill(-1.0);
        assert!(grid.as_slice().iter().all(|&v| v == -1.0));
    }

    #[test]
    fn flips_even_and_odd_heights() {
        let mut even = Grid::from_fn(2, 4, |_, y| y);
        even.flip_vertically();
        assert_eq!(even.as_slice(), &[3, 3, 2, 2, 1, 1, 0, 0]);

        let mut odd = Grid::from_fn(1, 3, |_, y| y);
        odd.flip_vertically();
        assert_eq!(odd.as_slice(), &[2, 1, 0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_index_panics_in_debug() {
        let grid = Grid::new(2, 2, 0u8);
        let _ = grid[(2, 0)];
    }
}
