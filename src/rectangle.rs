/// Half-open pixel region: `min` inclusive, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

// helper methods
impl Rect {
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { min_x: 0, min_y: 0, max_x: width, max_y: height }
    }
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        if r.is_empty() { None } else { Some(r) }
    }
}

// Compute minimum depth to get at least n rectangles for # of CPU cores
pub fn compute_subdivisions(n: usize) -> u32 {
    let mut depth = 0;
    let mut count = 1;
    while count < n {
        depth += 1;
        count *= 2;
    }
    depth
}

/// Split `width` x `height` into 2^depth disjoint tiles covering every pixel.
/// Tiles that would be empty (more splits than pixels) are dropped.
pub fn subdivide(width: u32, height: u32, depth: u32) -> Vec<Rect> {
    let mut rects = Vec::new();

    // Alternate splitting the screen vertically and horizontally
    fn recurse(r: Rect, vertical: bool, depth: u32, rects: &mut Vec<Rect>) {
        if r.is_empty() {
            return;
        }
        if depth == 0 {
            rects.push(r);
            return;
        }

        if vertical {
            let mid = r.min_x + r.width() / 2;
            let left = Rect { max_x: mid, ..r };
            let right = Rect { min_x: mid, ..r };
            recurse(left, !vertical, depth - 1, rects);
            recurse(right, !vertical, depth - 1, rects);
        } else {
            let mid = r.min_y + r.height() / 2;
            let top = Rect { max_y: mid, ..r };
            let bottom = Rect { min_y: mid, ..r };
            recurse(top, !vertical, depth - 1, rects);
            recurse(bottom, !vertical, depth - 1, rects);
        }
    }

    recurse(Rect::from_size(width, height), true, depth, &mut rects);
    rects
}
