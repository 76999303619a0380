pub mod bridge;
pub mod living_things;

pub use crate::domain::model::{Mechanism, Pairing, Species};
pub use crate::domain::ports::{BreatheImplementor, Console, LivingThing};
