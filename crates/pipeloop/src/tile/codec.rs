use super::types::{Pipe, Tile};

impl Pipe {
    /// Canonical drawing symbol.
    pub fn symbol(self) -> char {
        match self {
            Pipe::VERTICAL => '|',
            Pipe::HORIZONTAL => '-',
            Pipe::UP_RIGHT => 'L',
            Pipe::UP_LEFT => 'J',
            Pipe::DOWN_LEFT => '7',
            Pipe::DOWN_RIGHT => 'F',
            _ => unreachable!("pipes are built from two distinct directions"),
        }
    }

    pub fn from_symbol(c: char) -> Option<Pipe> {
        match c {
            '|' => Some(Pipe::VERTICAL),
            '-' => Some(Pipe::HORIZONTAL),
            'L' => Some(Pipe::UP_RIGHT),
            'J' => Some(Pipe::UP_LEFT),
            '7' => Some(Pipe::DOWN_LEFT),
            'F' => Some(Pipe::DOWN_RIGHT),
            _ => None,
        }
    }
}

impl Tile {
    /// Decode one input symbol. Unknown symbols (including `.`) are ground.
    pub fn from_symbol(c: char) -> Tile {
        match c {
            'S' => Tile::Start,
            c => Pipe::from_symbol(c).map_or(Tile::Ground, Tile::Pipe),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Ground => '.',
            Tile::Start => 'S',
            Tile::Pipe(p) | Tile::LoopPipe(p) => p.symbol(),
            Tile::Interior => 'I',
        }
    }
}
