#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Offset,
    pub end: Offset,
}

/// 0-based byte offset within a file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LineColumn {
    /// 1-based line number
    pub line: u32,

    /// 1-based column number
    pub column: u32,
}

impl Span {
    #[track_caller]
    pub fn from(start: impl Into<Offset>, end: impl Into<Offset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn start() -> Self {
        Self {
            start: Offset(0),
            end: Offset(0),
        }
    }

    pub fn len(self) -> u32 {
        self.end - self.start
    }
}

impl LineColumn {
    pub fn new0(line0: u32, column0: u32) -> Self {
        Self {
            line: line0 + 1,
            column: column0 + 1,
        }
    }

    pub fn line0(self) -> u32 {
        self.line - 1
    }

    pub fn line0_usize(self) -> usize {
        self.line0() as usize
    }

    pub fn column0(self) -> u32 {
        self.column - 1
    }
}

impl std::ops::Add<u32> for Offset {
    type Output = Offset;

    fn add(self, other: u32) -> Offset {
        Offset(self.0 + other)
    }
}

impl std::ops::Add<usize> for Offset {
    type Output = Offset;

    fn add(self, other: usize) -> Offset {
        assert!(other < u32::MAX as usize);
        self + (other as u32)
    }
}

impl std::ops::Sub<Offset> for Offset {
    type Output = u32;

    fn sub(self, other: Offset) -> u32 {
        self.0 - other.0
    }
}

impl From<usize> for Offset {
    fn from(value: usize) -> Offset {
        assert!(value < u32::MAX as usize);
        Offset(value as u32)
    }
}

impl From<u32> for Offset {
    fn from(value: u32) -> Offset {
        Offset(value)
    }
}

impl From<Offset> for u32 {
    fn from(value: Offset) -> u32 {
        value.0
    }
}

impl From<Offset> for usize {
    fn from(value: Offset) -> usize {
        value.0 as usize
    }
}
