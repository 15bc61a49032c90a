//! Direction sets and tile states.

/// Cardinal direction on the grid. `Up` decreases `y`, `Left` decreases `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Coordinate offset `(dx, dy)` of one step in this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Dir::Up => 0b0001,
            Dir::Down => 0b0010,
            Dir::Left => 0b0100,
            Dir::Right => 0b1000,
        }
    }
}

/// Set of directions (0..=4 members).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirSet(u8);

impl DirSet {
    #[inline]
    pub const fn empty() -> Self {
        DirSet(0)
    }
    #[inline]
    pub fn insert(&mut self, d: Dir) {
        self.0 |= d.bit();
    }
    #[inline]
    pub fn contains(self, d: Dir) -> bool {
        self.0 & d.bit() != 0
    }
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
    /// Members in `Dir::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Dir> {
        Dir::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Dir> for DirSet {
    fn from_iter<I: IntoIterator<Item = Dir>>(iter: I) -> Self {
        let mut set = DirSet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// A pipe segment connecting exactly two distinct directions.
///
/// The directions are stored in `Dir::ALL` order, so `dirs()[0]` is the
/// vertical end for every corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pipe {
    a: Dir,
    b: Dir,
}

impl Pipe {
    /// `|`
    pub const VERTICAL: Pipe = Pipe {
        a: Dir::Up,
        b: Dir::Down,
    };
    /// `-`
    pub const HORIZONTAL: Pipe = Pipe {
        a: Dir::Left,
        b: Dir::Right,
    };
    /// `L`
    pub const UP_RIGHT: Pipe = Pipe {
        a: Dir::Up,
        b: Dir::Right,
    };
    /// `J`
    pub const UP_LEFT: Pipe = Pipe {
        a: Dir::Up,
        b: Dir::Left,
    };
    /// `7`
    pub const DOWN_LEFT: Pipe = Pipe {
        a: Dir::Down,
        b: Dir::Left,
    };
    /// `F`
    pub const DOWN_RIGHT: Pipe = Pipe {
        a: Dir::Down,
        b: Dir::Right,
    };

    pub const ALL: [Pipe; 6] = [
        Pipe::VERTICAL,
        Pipe::HORIZONTAL,
        Pipe::UP_RIGHT,
        Pipe::UP_LEFT,
        Pipe::DOWN_LEFT,
        Pipe::DOWN_RIGHT,
    ];

    /// Pipe through `a` and `b`; `None` when they coincide.
    pub fn new(a: Dir, b: Dir) -> Option<Pipe> {
        Pipe::from_set([a, b].into_iter().collect())
    }

    /// Pipe from a set of exactly two directions.
    pub fn from_set(set: DirSet) -> Option<Pipe> {
        if set.len() != 2 {
            return None;
        }
        let mut it = set.iter();
        let a = it.next()?;
        let b = it.next()?;
        Some(Pipe { a, b })
    }

    #[inline]
    pub fn dirs(self) -> [Dir; 2] {
        [self.a, self.b]
    }

    pub fn to_set(self) -> DirSet {
        self.dirs().into_iter().collect()
    }

    #[inline]
    pub fn contains(self, d: Dir) -> bool {
        self.a == d || self.b == d
    }

    /// Direction to leave through after entering while heading `heading`.
    /// `None` when the tile has no connector on the entry side.
    #[inline]
    pub fn exit(self, heading: Dir) -> Option<Dir> {
        let entry = heading.opposite();
        if self.a == entry {
            Some(self.b)
        } else if self.b == entry {
            Some(self.a)
        } else {
            None
        }
    }

    /// The Up/Down end of a corner or the vertical pipe; `None` for `-`.
    #[inline]
    pub fn vertical(self) -> Option<Dir> {
        match self.a {
            Dir::Up | Dir::Down => Some(self.a),
            _ => None,
        }
    }
}

/// State of one grid cell across the analysis phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Ground,
    /// Start marker whose shape is not yet known.
    Start,
    /// Pipe not (yet) known to lie on the loop.
    Pipe(Pipe),
    /// Pipe confirmed on the loop.
    LoopPipe(Pipe),
    /// Non-loop tile enclosed by the loop.
    Interior,
}

impl Tile {
    /// Connector shape, loop or not.
    #[inline]
    pub fn pipe(self) -> Option<Pipe> {
        match self {
            Tile::Pipe(p) | Tile::LoopPipe(p) => Some(p),
            Tile::Ground | Tile::Start | Tile::Interior => None,
        }
    }

    #[inline]
    pub fn connections(self) -> DirSet {
        self.pipe().map(Pipe::to_set).unwrap_or_default()
    }

    #[inline]
    pub fn is_loop(self) -> bool {
        matches!(self, Tile::LoopPipe(_))
    }
}
