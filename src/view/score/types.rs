use crate::model::Trend;

#[derive(Debug, Clone)]
pub struct Bar {
    pub average: f64,
    pub direction: Direction,
    pub start_position: f64,
    pub width: f64,
    pub label: &'static str,
}

/// Front nine bars grow left of the centre line, back nine bars grow right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct PlayerBars {
    pub short_name: String,
    pub trend: Trend,
    pub bars: [Bar; 2],
    pub is_even: bool,
}
