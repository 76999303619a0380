use crate::domain::model::Mechanism;
use crate::domain::ports::BreatheImplementor;
use std::sync::Arc;

pub const LAND_BREATH: &str = "Breathe from nose, inhale oxygen from air, exhale carbondioxide";
pub const WATER_BREATH: &str = "Breathe from gills, absorb oxygen from water, release carbondioxide";
pub const LEAF_BREATH: &str =
    "Breathe through leaves, inhale carbondioxide, exhale oxygen by photosynthesis";

#[derive(Debug, Clone, Copy, Default)]
pub struct LandBreatheImplementation;

impl BreatheImplementor for LandBreatheImplementation {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Land
    }

    fn description(&self) -> &'static str {
        LAND_BREATH
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WaterBreatheImplementation;

impl BreatheImplementor for WaterBreatheImplementation {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Water
    }

    fn description(&self) -> &'static str {
        WATER_BREATH
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBreatheImplementation;

impl BreatheImplementor for TreeBreatheImplementation {
    fn mechanism(&self) -> Mechanism {
        Mechanism::Leaf
    }

    fn description(&self) -> &'static str {
        LEAF_BREATH
    }
}

/// Builds a fresh implementor for `mechanism`.
pub fn implementor_for(mechanism: Mechanism) -> Arc<dyn BreatheImplementor> {
    match mechanism {
        Mechanism::Land => Arc::new(LandBreatheImplementation),
        Mechanism::Water => Arc::new(WaterBreatheImplementation),
        Mechanism::Leaf => Arc::new(TreeBreatheImplementation),
    }
}
