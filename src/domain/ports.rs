use crate::domain::model::{Mechanism, Species};
use std::sync::Arc;

/// Where the observable side effect of breathing goes.
pub trait Console: Send + Sync {
    fn emit(&self, line: &str);
}

/// Implementor side of the bridge: how a breath is actually taken.
pub trait BreatheImplementor: Send + Sync {
    fn mechanism(&self) -> Mechanism;

    fn description(&self) -> &'static str;

    /// Emits the fixed description, once.
    fn breathe(&self, console: &dyn Console) {
        console.emit(self.description());
    }
}

/// Abstraction side of the bridge. Every living thing holds exactly one
/// implementor for its whole lifetime.
pub trait LivingThing: Send + Sync {
    fn species(&self) -> Species;

    fn implementor(&self) -> &Arc<dyn BreatheImplementor>;

    fn breathe_process(&self, console: &dyn Console);
}
