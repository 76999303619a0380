// Adapters layer: concrete breathing mechanisms and console sinks.

pub mod breathing;
pub mod console;

pub use breathing::{
    implementor_for, LandBreatheImplementation, TreeBreatheImplementation,
    WaterBreatheImplementation,
};
pub use console::{MemoryConsole, StdoutConsole};
