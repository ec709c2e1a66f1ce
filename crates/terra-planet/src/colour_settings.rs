//! Colour configuration applied uniformly to the planet's face materials.

use serde::{Deserialize, Serialize};
use terra_mesh::Colour;

/// The planet's material colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColourSettings {
    /// Colour set on all six faces.
    pub planet_colour: Colour,
}

impl ColourSettings {
    /// Settings with the given planet colour.
    pub fn new(planet_colour: Colour) -> Self {
        Self { planet_colour }
    }
}
