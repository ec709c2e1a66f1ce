//! Face render mask: which cube faces are shown and rebuilt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use terra_cubesphere::{Direction, ParseDirectionError};

/// Selects the faces that are visible.
///
/// Either every face, or exactly one. Hidden faces keep their buffers but are
/// neither rebuilt nor shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceRenderMask {
    /// All six faces.
    #[default]
    All,
    /// Only the face pointing in this direction.
    Only(Direction),
}

impl FaceRenderMask {
    /// Whether the face in `direction` is visible under this mask.
    pub fn shows(self, direction: Direction) -> bool {
        match self {
            FaceRenderMask::All => true,
            FaceRenderMask::Only(only) => only == direction,
        }
    }

    /// Number of visible faces.
    pub fn visible_count(self) -> usize {
        match self {
            FaceRenderMask::All => 6,
            FaceRenderMask::Only(_) => 1,
        }
    }
}

impl fmt::Display for FaceRenderMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceRenderMask::All => f.write_str("all"),
            FaceRenderMask::Only(direction) => write!(f, "{direction}"),
        }
    }
}

impl FromStr for FaceRenderMask {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(FaceRenderMask::All)
        } else {
            s.parse().map(FaceRenderMask::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_every_face() {
        assert!(Direction::ALL.iter().all(|&d| FaceRenderMask::All.shows(d)));
        assert_eq!(FaceRenderMask::All.visible_count(), 6);
    }

    #[test]
    fn test_single_direction_shows_exactly_one_face() {
        for only in Direction::ALL {
            let mask = FaceRenderMask::Only(only);
            let shown: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&d| mask.shows(d))
                .collect();
            assert_eq!(shown, vec![only]);
            assert_eq!(mask.visible_count(), 1);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("all".parse::<FaceRenderMask>(), Ok(FaceRenderMask::All));
        assert_eq!(
            "top".parse::<FaceRenderMask>(),
            Ok(FaceRenderMask::Only(Direction::PosY))
        );
        assert_eq!(
            "-z".parse::<FaceRenderMask>(),
            Ok(FaceRenderMask::Only(Direction::NegZ))
        );
        assert!("both".parse::<FaceRenderMask>().is_err());
        assert_eq!(FaceRenderMask::Only(Direction::NegX).to_string(), "left");
        assert_eq!(FaceRenderMask::All.to_string(), "all");
    }

    #[test]
    fn test_display_parses_back() {
        let masks = std::iter::once(FaceRenderMask::All)
            .chain(Direction::ALL.into_iter().map(FaceRenderMask::Only));
        for mask in masks {
            assert_eq!(mask.to_string().parse::<FaceRenderMask>(), Ok(mask));
        }
    }
}
