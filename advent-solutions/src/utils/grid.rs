//! Rectangular character grids with 4- and 8-neighbour navigation

use advent_solver::ParseError;
use itertools::Itertools;
use nalgebra::{DMatrix, Scalar};
use std::ops::{Index, IndexMut};

use super::parsing::lines_nonempty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance.
    pub fn distance(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

const DELTAS8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rectangular grid of cells, stored as a matrix indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T: Scalar> {
    cells: DMatrix<T>,
}

impl<T: Scalar> Grid<T> {
    /// Parse one cell per character, rejecting ragged rows.
    pub fn parse_with(
        input: &str,
        mut cell: impl FnMut(char) -> Result<T, ParseError>,
    ) -> Result<Self, ParseError> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::with_capacity(input.len());

        for (row, line) in lines_nonempty(input).enumerate() {
            let before = cells.len();
            for c in line.chars() {
                cells.push(cell(c)?);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(ParseError::invalid(format!(
                        "row {} has width {}, expected {}",
                        row + 1,
                        row_width,
                        w
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                cells: DMatrix::from_row_iterator(height, width, cells),
            }),
            _ => Err(ParseError::MissingData("empty grid".into())),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height() && pos.col < self.width()
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.cells.get((pos.row, pos.col))
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        self.cells.get_mut((pos.row, pos.col))
    }

    /// Offset `pos` by `(dr, dc)`, or `None` when that leaves the grid.
    pub fn offset(&self, pos: Pos, (dr, dc): (isize, isize)) -> Option<Pos> {
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Pos::new(row, col);
        self.contains(next).then_some(next)
    }

    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        self.offset(pos, dir.delta())
    }

    /// In-bounds orthogonal neighbours with the direction taken to reach them.
    pub fn neighbours4(&self, pos: Pos) -> impl Iterator<Item = (Direction, Pos)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir).map(|next| (dir, next)))
    }

    /// In-bounds orthogonal and diagonal neighbours.
    pub fn neighbours8(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        DELTAS8
            .into_iter()
            .filter_map(move |delta| self.offset(pos, delta))
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let width = self.width();
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| Pos::new(row, col)))
    }

    /// First position, in row-major order, whose cell satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Pos> {
        self.positions().find(|&pos| pred(&self[pos]))
    }
}

impl Grid<u8> {
    /// Parse a grid of ASCII bytes.
    pub fn parse_bytes(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, |c| {
            u8::try_from(c).map_err(|_| ParseError::invalid(format!("non-ASCII cell {c:?}")))
        })
    }

    /// Render rows joined by newlines, as read.
    pub fn render(&self) -> String {
        self.cells
            .row_iter()
            .map(|row| row.iter().map(|&b| char::from(b)).collect::<String>())
            .join("\n")
    }
}

impl<T: Scalar> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        &self.cells[(pos.row, pos.col)]
    }
}

impl<T: Scalar> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        &mut self.cells[(pos.row, pos.col)]
    }
}
