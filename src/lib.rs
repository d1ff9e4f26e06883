use std::{
    cmp::{max, min},
    collections::HashSet,
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidWireCount(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidWireCount(wire_n) => {
                write!(f, "Given {} wire(s), expect exactly two.", wire_n)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn mht_dist(&self) -> i32 {
        self.x.abs() + self.y.abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    dx: i32,
    dy: i32,
}

impl Move {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    // Invalid tokens aren't errors, just absent moves, so the caller can
    // filter them out of a wire's path.
    pub fn parse(token: &str) -> Option<Self> {
        static MOVE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([LRUD])(\d+)$").unwrap());

        let caps = MOVE_PATTERN.captures(token)?;
        debug_assert!(caps.len() == 3);
        let step_count = caps[2].parse::<i32>().ok()?;
        Some(match &caps[1] {
            "L" => Move::new(-step_count, 0),
            "R" => Move::new(step_count, 0),
            "U" => Move::new(0, step_count),
            _ => Move::new(0, -step_count),
        })
    }
}

// Every integer from start to start + step_count, inclusive of both ends,
// in ascending order whatever the sign of step_count.
pub fn movement_range(start: i32, step_count: i32) -> RangeInclusive<i32> {
    min(start, start + step_count)..=max(start, start + step_count)
}

#[derive(Debug)]
pub struct Wire {
    moves: Vec<Move>,
}

impl Wire {
    pub fn parse(path: &str) -> Self {
        Self {
            moves: path
                .split(',')
                .map(|token| token.trim())
                .filter(|token| !token.is_empty())
                .filter_map(Move::parse)
                .collect(),
        }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn trace(&self) -> HashSet<Point> {
        let mut visited = HashSet::from([Point::new(0, 0)]);
        let mut cur_point = Point::new(0, 0);
        for m in &self.moves {
            // One of the two ranges spans the whole segment, the other
            // collapses to the current coordinate.
            for x in movement_range(cur_point.x, m.dx) {
                visited.insert(Point::new(x, cur_point.y));
            }
            for y in movement_range(cur_point.y, m.dy) {
                visited.insert(Point::new(cur_point.x, y));
            }
            cur_point.x += m.dx;
            cur_point.y += m.dy;
        }

        visited
    }

    pub fn cross(&self, other: &Wire) -> HashSet<Point> {
        let mut cross_points = self
            .trace()
            .intersection(&other.trace())
            .copied()
            .collect::<HashSet<_>>();
        // Both wires start at the origin, so it never counts as a crossing.
        cross_points.remove(&Point::new(0, 0));

        cross_points
    }

    pub fn closest_cross_dist(&self, other: &Wire) -> i32 {
        self.cross(other)
            .iter()
            .map(|p| p.mht_dist())
            .min()
            .unwrap_or(0)
    }
}

pub fn read_wires<P: AsRef<Path>>(path: P) -> Result<Vec<Wire>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .enumerate()
        .map(|(ind, l)| {
            l.with_context(|| {
                format!(
                    "Failed to read line {} of given file({}).",
                    ind + 1,
                    path.as_ref().display()
                )
            })
            .map(|s| Wire::parse(&s))
        })
        .collect()
}
