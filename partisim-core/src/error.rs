use crate::model::reaction::SiteList;
use partisim_schemas::{placement::PlacementMethod, result::ResultCode, state::MolecState};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartisimError {
    // Invalid input, caught before any kernel call.
    #[error(
        "'{0}' is not a valid molecular state (expected one of: soln, front, back, up, down, bsoln, all, none, some)"
    )]
    UnknownState(String),

    #[error("'{0}' is not a valid product placement method")]
    UnknownPlacementMethod(String),

    #[error("A reaction takes one or two reactants, got {0}")]
    ReactantArity(usize),

    #[error("Placement method '{0}' requires a position vector")]
    MissingPosition(PlacementMethod),

    // Precondition violations, also caught locally.
    #[error("Cannot add solution molecules for species '{species}' with state '{state}'")]
    NotSolutionState { species: String, state: MolecState },

    // Kernel rejections. Never retried: the same call against unchanged
    // kernel state cannot succeed.
    #[error("Kernel rejected species '{name}': {code}")]
    SpeciesRejected { name: String, code: ResultCode },

    #[error("Kernel rejected mobility update for '{name}' ({state}): {code}")]
    MobilityRejected {
        name: String,
        state: MolecState,
        code: ResultCode,
    },

    #[error("Kernel rejected style update for '{name}': {code}")]
    StyleRejected { name: String, code: ResultCode },

    #[error("Kernel rejected molecule list '{tag}' for '{name}': {code}")]
    MolListRejected {
        name: String,
        tag: String,
        code: ResultCode,
    },

    #[error("Kernel rejected adding {count} solution molecules of '{name}': {code}")]
    SolutionFillRejected {
        name: String,
        count: u64,
        code: ResultCode,
    },

    #[error(
        "Kernel rejected reaction '{name}': {code} (reactants: {reactants}; products: {products})"
    )]
    ReactionRejected {
        name: String,
        code: ResultCode,
        reactants: SiteList,
        products: SiteList,
    },

    #[error("Kernel rejected placement '{method}' for reaction '{reaction}': {code}")]
    PlacementRejected {
        reaction: String,
        method: PlacementMethod,
        code: ResultCode,
    },
}
