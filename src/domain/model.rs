use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects one variant of the implementor hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mechanism {
    Land,
    Water,
    Leaf,
}

impl Mechanism {
    pub const ALL: [Mechanism; 3] = [Mechanism::Land, Mechanism::Water, Mechanism::Leaf];
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mechanism::Land => "land",
            Mechanism::Water => "water",
            Mechanism::Leaf => "leaf",
        };
        f.write_str(name)
    }
}

/// Selects one variant of the abstraction hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Fish,
    Tree,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Dog => "dog",
            Species::Fish => "fish",
            Species::Tree => "tree",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub species: Species,
    pub mechanism: Mechanism,
}

impl Pairing {
    pub fn new(species: Species, mechanism: Mechanism) -> Self {
        Self { species, mechanism }
    }

    /// Dog+Land, Fish+Water, Tree+Land.
    ///
    /// The tree is bound to land breathing on purpose; the leaf mechanism stays
    /// available but unused here.
    pub fn defaults() -> Vec<Pairing> {
        vec![
            Pairing::new(Species::Dog, Mechanism::Land),
            Pairing::new(Species::Fish, Mechanism::Water),
            Pairing::new(Species::Tree, Mechanism::Land),
        ]
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.species, self.mechanism)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairings_keep_tree_on_land() {
        let pairings = Pairing::defaults();

        assert_eq!(pairings.len(), 3);
        assert_eq!(pairings[2], Pairing::new(Species::Tree, Mechanism::Land));
        assert!(pairings.iter().all(|p| p.mechanism != Mechanism::Leaf));
    }

    #[test]
    fn test_mechanism_names_deserialize() {
        let pairing: Pairing =
            toml::from_str("species = \"dog\"\nmechanism = \"leaf\"").unwrap();

        assert_eq!(pairing, Pairing::new(Species::Dog, Mechanism::Leaf));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Pairing::new(Species::Tree, Mechanism::Leaf).to_string(), "tree + leaf");
    }
}
