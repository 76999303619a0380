use crate::adapters::breathing::implementor_for;
use crate::core::living_things::bind;
use crate::core::{BreatheImplementor, Console, LivingThing, Mechanism, Pairing};
use std::collections::HashMap;
use std::sync::Arc;

/// Composition root: binds each species to its mechanism and drives it once.
pub struct BridgeDemo<C: Console> {
    console: C,
    pairings: Vec<Pairing>,
}

impl<C: Console> BridgeDemo<C> {
    pub fn new(console: C) -> Self {
        Self::with_pairings(console, Pairing::defaults())
    }

    pub fn with_pairings(console: C, pairings: Vec<Pairing>) -> Self {
        Self { console, pairings }
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Constructs the living things in pairing order. One implementor is built
    /// per mechanism and shared by every living thing bound to it.
    pub fn build(&self) -> Vec<Box<dyn LivingThing>> {
        let mut implementors: HashMap<Mechanism, Arc<dyn BreatheImplementor>> = HashMap::new();

        self.pairings
            .iter()
            .map(|pairing| {
                let implementor = implementors
                    .entry(pairing.mechanism)
                    .or_insert_with(|| implementor_for(pairing.mechanism))
                    .clone();
                tracing::debug!("Binding {} to {} breathing", pairing.species, pairing.mechanism);
                bind(pairing.species, implementor)
            })
            .collect()
    }

    /// Returns how many living things were driven.
    pub fn run(&self) -> usize {
        tracing::info!("Starting bridge demonstration with {} pairings", self.pairings.len());

        let living_things = self.build();
        for living_thing in &living_things {
            living_thing.breathe_process(&self.console);
        }

        tracing::info!("Bridge demonstration finished");
        living_things.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::breathing::{LAND_BREATH, LEAF_BREATH, WATER_BREATH};
    use crate::adapters::MemoryConsole;
    use crate::core::Species;

    #[test]
    fn test_default_run_prints_three_lines_in_order() {
        let demo = BridgeDemo::new(MemoryConsole::new());

        assert_eq!(demo.run(), 3);
        assert_eq!(
            demo.console().lines(),
            vec![LAND_BREATH, WATER_BREATH, LAND_BREATH]
        );
    }

    #[test]
    fn test_build_shares_one_implementor_per_mechanism() {
        let demo = BridgeDemo::new(MemoryConsole::new());
        let things = demo.build();

        let species: Vec<Species> = things.iter().map(|t| t.species()).collect();
        assert_eq!(species, vec![Species::Dog, Species::Fish, Species::Tree]);
        assert!(Arc::ptr_eq(things[0].implementor(), things[2].implementor()));
        assert!(!Arc::ptr_eq(things[0].implementor(), things[1].implementor()));
        assert!(demo.console().lines().is_empty());
    }

    #[test]
    fn test_custom_pairings() {
        let pairings = vec![
            Pairing::new(Species::Tree, Mechanism::Leaf),
            Pairing::new(Species::Dog, Mechanism::Water),
        ];
        let demo = BridgeDemo::with_pairings(MemoryConsole::new(), pairings);

        assert_eq!(demo.run(), 2);
        assert_eq!(demo.console().lines(), vec![LEAF_BREATH, WATER_BREATH]);
    }

    #[test]
    fn test_running_twice_repeats_output() {
        let demo = BridgeDemo::new(MemoryConsole::new());
        demo.run();
        demo.run();

        let lines = demo.console().lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[..3], lines[3..]);
    }
}
