#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Passable,
    Blocked,
}

impl Cell {
    /// 0 = passable, 1 = impassable
    pub fn as_bit(self) -> u8 {
        match self {
            Self::Passable => 0,
            Self::Blocked => 1,
        }
    }

    pub fn is_passable(self) -> bool {
        matches!(self, Self::Passable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_match_the_passability_convention() {
        assert_eq!(Cell::default(), Cell::Passable);
        assert_eq!(Cell::Passable.as_bit(), 0);
        assert_eq!(Cell::Blocked.as_bit(), 1);
        assert!(!Cell::Blocked.is_passable());
    }
}
