//! Maze generation and grid queries.
use log::debug;

use crate::core::rng::GameRng;
use crate::error::MazeError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Passage,
}

/// Up, right, down, left.
const DIRS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

pub const MIN_SIDE: usize = 5;

/// Row-major wall/passage grid. Coordinates are `(x, y)`, x = column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

pub fn check_dimensions(width: usize, height: usize) -> Result<(), MazeError> {
    if width < MIN_SIDE || height < MIN_SIDE || width % 2 == 0 || height % 2 == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl Maze {
    /// Perfect maze plus loop injection.
    pub fn generate(width: usize, height: usize, rng: &mut GameRng) -> Result<Self, MazeError> {
        let mut maze = Self::carve(width, height, rng)?;
        let opened = maze.inject_loops(rng);
        debug!("maze {width}x{height} generated, {opened} extra openings");
        Ok(maze)
    }

    /// Randomized depth-first carving over the odd lattice, explicit stack.
    /// The result is a spanning tree: exactly one path between any two passages.
    pub fn carve(width: usize, height: usize, rng: &mut GameRng) -> Result<Self, MazeError> {
        check_dimensions(width, height)?;
        let mut maze = Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        };
        let mut visited = vec![false; width * height];
        let mut stack: Vec<(usize, usize)> = vec![(1, 1)];
        let mut options: Vec<(usize, usize, usize, usize)> = Vec::with_capacity(4);

        while let Some(&(x, y)) = stack.last() {
            visited[y * width + x] = true;
            maze.set(x, y, Cell::Passage);

            options.clear();
            for (dx, dy) in DIRS {
                let nx = x as isize + dx * 2;
                let ny = y as isize + dy * 2;
                if nx <= 0 || ny <= 0 || nx >= width as isize - 1 || ny >= height as isize - 1 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if visited[ny * width + nx] {
                    continue;
                }
                let wx = (x as isize + dx) as usize;
                let wy = (y as isize + dy) as usize;
                options.push((nx, ny, wx, wy));
            }

            match rng.pick(&options).copied() {
                Some((nx, ny, wx, wy)) => {
                    maze.set(wx, wy, Cell::Passage);
                    stack.push((nx, ny));
                }
                None => {
                    stack.pop();
                }
            }
        }

        let (sx, sy) = maze.start();
        let (gx, gy) = maze.goal();
        maze.set(sx, sy, Cell::Passage);
        maze.set(gx, gy, Cell::Passage);
        Ok(maze)
    }

    /// Opens one extra wall next to passage cells flanked by exactly two walls,
    /// each with probability 0.5. Only ever turns walls into passages and never
    /// touches the border. Returns how many walls were opened.
    pub fn inject_loops(&mut self, rng: &mut GameRng) -> usize {
        let mut opened = 0;
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                if self.is_wall(x, y) {
                    continue;
                }
                let walls = DIRS
                    .iter()
                    .filter(|(dx, dy)| {
                        self.is_wall((x as isize + dx) as usize, (y as isize + dy) as usize)
                    })
                    .count();
                if walls != 2 || !rng.chance(0.5) {
                    continue;
                }
                let mut dirs = DIRS;
                rng.shuffle(&mut dirs);
                for (dx, dy) in dirs {
                    let nx = (x as isize + dx) as usize;
                    let ny = (y as isize + dy) as usize;
                    if self.is_interior(nx, ny) && self.is_wall(nx, ny) {
                        self.set(nx, ny, Cell::Passage);
                        opened += 1;
                        break;
                    }
                }
            }
        }
        opened
    }

    /// Builds a grid from text rows: `#` is a wall, `.` or a space is a passage.
    pub fn from_ascii(rows: &[&str]) -> Result<Self, MazeError> {
        let expected = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if expected == 0 {
            return Err(MazeError::EmptyLayout);
        }
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(MazeError::RaggedLayout { row: y, expected, found });
            }
            for (x, ch) in row.chars().enumerate() {
                cells.push(match ch {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Passage,
                    _ => return Err(MazeError::UnknownCell { ch, x, y }),
                });
            }
        }
        Ok(Self {
            width: expected,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> (usize, usize) {
        (1, 1)
    }

    /// Bottom-right interior corner. Clamped to the grid for layouts too
    /// thin to have an interior.
    pub fn goal(&self) -> (usize, usize) {
        (self.width.saturating_sub(2), self.height.saturating_sub(2))
    }

    /// Out-of-range coordinates are a caller bug and panic.
    #[inline]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) outside maze");
        self.cells[y * self.width + x] == Cell::Wall
    }

    /// Checked lookup; `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, x: i64, y: i64) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    /// Interior passage cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 1..self.height.saturating_sub(1) {
            for x in 1..self.width.saturating_sub(1) {
                if !self.is_wall(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y * self.width + x] = cell;
    }

    fn is_interior(&self, x: usize, y: usize) -> bool {
        x > 0 && y > 0 && x < self.width - 1 && y < self.height - 1
    }
}
