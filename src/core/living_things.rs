use crate::core::{BreatheImplementor, Console, LivingThing, Species};
use std::sync::Arc;

pub struct Dog {
    breathe_implementor: Arc<dyn BreatheImplementor>,
}

impl Dog {
    pub fn new(breathe_implementor: Arc<dyn BreatheImplementor>) -> Self {
        Self { breathe_implementor }
    }
}

impl LivingThing for Dog {
    fn species(&self) -> Species {
        Species::Dog
    }

    fn implementor(&self) -> &Arc<dyn BreatheImplementor> {
        &self.breathe_implementor
    }

    fn breathe_process(&self, console: &dyn Console) {
        self.breathe_implementor.breathe(console);
    }
}

pub struct Fish {
    breathe_implementor: Arc<dyn BreatheImplementor>,
}

impl Fish {
    pub fn new(breathe_implementor: Arc<dyn BreatheImplementor>) -> Self {
        Self { breathe_implementor }
    }
}

impl LivingThing for Fish {
    fn species(&self) -> Species {
        Species::Fish
    }

    fn implementor(&self) -> &Arc<dyn BreatheImplementor> {
        &self.breathe_implementor
    }

    fn breathe_process(&self, console: &dyn Console) {
        self.breathe_implementor.breathe(console);
    }
}

/// Breathes however its implementor does; a tree bound to land breathing
/// breathes through a nose.
pub struct Tree {
    breathe_implementor: Arc<dyn BreatheImplementor>,
}

impl Tree {
    pub fn new(breathe_implementor: Arc<dyn BreatheImplementor>) -> Self {
        Self { breathe_implementor }
    }
}

impl LivingThing for Tree {
    fn species(&self) -> Species {
        Species::Tree
    }

    fn implementor(&self) -> &Arc<dyn BreatheImplementor> {
        &self.breathe_implementor
    }

    fn breathe_process(&self, console: &dyn Console) {
        self.breathe_implementor.breathe(console);
    }
}

/// Binds a living thing of `species` to `breathe_implementor`.
pub fn bind(
    species: Species,
    breathe_implementor: Arc<dyn BreatheImplementor>,
) -> Box<dyn LivingThing> {
    match species {
        Species::Dog => Box::new(Dog::new(breathe_implementor)),
        Species::Fish => Box::new(Fish::new(breathe_implementor)),
        Species::Tree => Box::new(Tree::new(breathe_implementor)),
    }
}
