use serde::{Deserialize, Serialize};

use crate::games::{Cell, ConfigurationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    PathWithDot,
    PathEmpty,
}

impl CellKind {
    pub fn from_char(value: char) -> Option<CellKind> {
        match value {
            '#' => Some(CellKind::Wall),
            '.' => Some(CellKind::PathWithDot),
            '_' => Some(CellKind::PathEmpty),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::PathWithDot => '.',
            CellKind::PathEmpty => '_',
        }
    }

    pub fn is_open(self) -> bool {
        self != CellKind::Wall
    }
}

/// Fixed-size maze. Row-major, `(0, 0)` is the top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Grid, ConfigurationError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 || height == 0 {
            return Err(ConfigurationError::InvalidGrid("grid is empty".to_string()));
        }

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ConfigurationError::InvalidGrid(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                width
            )));
        }

        let cells: Vec<CellKind> = rows.into_iter().flatten().collect();
        if !cells.iter().any(|kind| kind.is_open()) {
            return Err(ConfigurationError::InvalidGrid(
                "grid has no open cells".to_string(),
            ));
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Grid, ConfigurationError> {
        let mut rows = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let row = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(x, value)| {
                    CellKind::from_char(value).ok_or_else(|| {
                        ConfigurationError::InvalidGrid(format!(
                            "unknown cell '{}' at ({}, {})",
                            value, x, y
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Grid::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    pub fn get(&self, cell: Cell) -> Option<CellKind> {
        self.index(cell).map(|index| self.cells[index])
    }

    /// In bounds and not a wall.
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(CellKind::is_open)
    }

    /// Clears the dot at `cell`; returns whether there was one.
    pub fn take_dot(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(index) if self.cells[index] == CellKind::PathWithDot => {
                self.cells[index] = CellKind::PathEmpty;
                true
            }
            _ => false,
        }
    }

    pub fn dot_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|kind| **kind == CellKind::PathWithDot)
            .count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width)
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|kind| kind.to_char()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_CHASE_MAZE;

    #[test]
    fn test_parse_default_maze() {
        let grid = Grid::parse(&DEFAULT_CHASE_MAZE).unwrap();
        assert_eq!(grid.width(), 19);
        assert_eq!(grid.height(), 21);
        assert_eq!(grid.dot_count(), 150);
        assert_eq!(grid.get(Cell::new(0, 0)), Some(CellKind::Wall));
        assert_eq!(grid.get(Cell::new(1, 1)), Some(CellKind::PathWithDot));
        assert_eq!(grid.get(Cell::new(9, 15)), Some(CellKind::PathEmpty));
        assert_eq!(grid.to_lines(), DEFAULT_CHASE_MAZE.to_vec());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Grid::parse(&["#.#", "#."]);
        assert!(matches!(result, Err(ConfigurationError::InvalidGrid(_))));
    }

    #[test]
    fn test_all_walls_rejected() {
        let result = Grid::parse(&["###", "###"]);
        assert!(matches!(result, Err(ConfigurationError::InvalidGrid(_))));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let lines: [&str; 0] = [];
        assert!(matches!(
            Grid::parse(&lines),
            Err(ConfigurationError::InvalidGrid(_))
        ));
        assert!(Grid::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_unknown_character_rejected() {
        assert!(Grid::parse(&["#x#"]).is_err());
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::parse(&["._", "#."]).unwrap();
        assert!(grid.contains(Cell::new(1, 1)));
        assert!(!grid.contains(Cell::new(2, 0)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.is_walkable(Cell::new(0, 1)));
        assert!(grid.is_walkable(Cell::new(1, 0)));
    }

    #[test]
    fn test_take_dot_only_once() {
        let mut grid = Grid::parse(&["._"]).unwrap();
        assert!(grid.take_dot(Cell::new(0, 0)));
        assert!(!grid.take_dot(Cell::new(0, 0)));
        assert!(!grid.take_dot(Cell::new(1, 0)));
        assert_eq!(grid.get(Cell::new(0, 0)), Some(CellKind::PathEmpty));
        assert_eq!(grid.dot_count(), 0);
    }
}
