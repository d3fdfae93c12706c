use crate::error::{Result, RouteError};

/// rectangular extent stamped onto a grid; the position is supplied at
/// stamping time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    height: usize,
    width: usize,
}

impl Obstacle {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(RouteError::InvalidObstacle { height, width });
        }

        Ok(Self { height, width })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_extents() {
        assert_eq!(
            Obstacle::new(0, 3),
            Err(RouteError::InvalidObstacle {
                height: 0,
                width: 3
            })
        );
        assert!(Obstacle::new(2, 0).is_err());
        let block = Obstacle::new(5, 2).unwrap();
        assert_eq!((block.height(), block.width()), (5, 2));
    }
}
