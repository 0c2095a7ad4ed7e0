pub mod error;
pub mod kernel;
pub mod model;
pub mod trace;

pub use error::PartisimError;
pub use kernel::{KernelCall, Placement, RecordingKernel, SimulationKernel};
pub use model::reaction::{Reaction, ReversibleReaction, Site, SiteList};
pub use model::species::Species;
