use partisim_schemas::{
    color::Color, placement::PlacementMethod, result::ResultCode, state::MolecState,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// The boundary to the external stochastic simulation kernel.
///
/// The kernel owns the authoritative species/reaction state; this layer
/// only relays validated mutations across the boundary. Every call is a
/// synchronous round-trip that either succeeds (`ResultCode::Ok`) or is a
/// terminal failure for the operation that issued it.
pub trait SimulationKernel {
    fn add_species(&mut self, name: &str) -> ResultCode;

    fn set_species_mobility(&mut self, name: &str, state: MolecState, difc: f64) -> ResultCode;

    /// Size and color are pushed together; the kernel has no independent
    /// color or size call.
    fn set_molecule_style(
        &mut self,
        name: &str,
        state: MolecState,
        size: f64,
        color: &Color,
    ) -> ResultCode;

    fn add_mol_list(&mut self, tag: &str) -> ResultCode;

    fn set_mol_list(&mut self, name: &str, state: MolecState, tag: &str) -> ResultCode;

    /// Empty bounds mean anywhere in the defined space.
    fn add_solution_molecules(
        &mut self,
        name: &str,
        count: u64,
        low_bound: &[f64],
        high_bound: &[f64],
    ) -> ResultCode;

    #[allow(clippy::too_many_arguments)]
    fn add_reaction(
        &mut self,
        name: &str,
        reactant1_name: &str,
        reactant1_state: MolecState,
        reactant2_name: &str,
        reactant2_state: MolecState,
        product_names: &[String],
        product_states: &[MolecState],
        rate: f64,
    ) -> ResultCode;

    fn set_reaction_products(
        &mut self,
        reaction_name: &str,
        method: PlacementMethod,
        parameter: f64,
        target_product_name: &str,
        position: &[f64],
    ) -> ResultCode;
}

/// One recorded kernel boundary call, with owned arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum KernelCall {
    AddSpecies {
        name: String,
    },
    SetSpeciesMobility {
        name: String,
        state: MolecState,
        difc: f64,
    },
    SetMoleculeStyle {
        name: String,
        state: MolecState,
        size: f64,
        color: Color,
    },
    AddMolList {
        tag: String,
    },
    SetMolList {
        name: String,
        state: MolecState,
        tag: String,
    },
    AddSolutionMolecules {
        name: String,
        count: u64,
        low_bound: Vec<f64>,
        high_bound: Vec<f64>,
    },
    AddReaction {
        name: String,
        reactant1_name: String,
        reactant1_state: MolecState,
        reactant2_name: String,
        reactant2_state: MolecState,
        product_names: Vec<String>,
        product_states: Vec<MolecState>,
        rate: f64,
    },
    SetReactionProducts {
        reaction_name: String,
        method: PlacementMethod,
        method_code: u32,
        parameter: f64,
        target_product_name: String,
        position: Vec<f64>,
    },
}

impl KernelCall {
    pub fn op(&self) -> &'static str {
        match self {
            KernelCall::AddSpecies { .. } => "add_species",
            KernelCall::SetSpeciesMobility { .. } => "set_species_mobility",
            KernelCall::SetMoleculeStyle { .. } => "set_molecule_style",
            KernelCall::AddMolList { .. } => "add_mol_list",
            KernelCall::SetMolList { .. } => "set_mol_list",
            KernelCall::AddSolutionMolecules { .. } => "add_solution_molecules",
            KernelCall::AddReaction { .. } => "add_reaction",
            KernelCall::SetReactionProducts { .. } => "set_reaction_products",
        }
    }
}

/// An in-memory kernel double that records every boundary call.
///
/// Enforces the bookkeeping the real kernel would: species names must be
/// unique, mobility/style updates require a registered species, molecule
/// lists must exist before binding, and placements require a registered
/// reaction. Placements are last-write-wins per reaction. The app's model
/// linter runs entirely against this kernel; tests use it as the mock.
#[derive(Default)]
pub struct RecordingKernel {
    calls: Vec<KernelCall>,
    species: HashSet<String>,
    mol_lists: HashSet<String>,
    reactions: HashSet<String>,
    placements: HashMap<String, Placement>,
    fail_next: Option<ResultCode>,
}

/// Last placement the kernel accepted for a reaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub method: PlacementMethod,
    pub parameter: f64,
    pub target_product_name: String,
    pub position: Vec<f64>,
}

impl RecordingKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call made so far, in order. Rejected calls are recorded too.
    pub fn calls(&self) -> &[KernelCall] {
        &self.calls
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    pub fn placement(&self, reaction_name: &str) -> Option<&Placement> {
        self.placements.get(reaction_name)
    }

    /// Force the next call to return `code` regardless of its arguments,
    /// for exercising rejection paths.
    pub fn fail_next(&mut self, code: ResultCode) {
        self.fail_next = Some(code);
    }

    fn forced_failure(&mut self) -> Option<ResultCode> {
        self.fail_next.take()
    }
}

impl SimulationKernel for RecordingKernel {
    fn add_species(&mut self, name: &str) -> ResultCode {
        self.calls.push(KernelCall::AddSpecies {
            name: name.to_string(),
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if name.is_empty() {
            return ResultCode::Error;
        }
        if !self.species.insert(name.to_string()) {
            return ResultCode::Error;
        }
        ResultCode::Ok
    }

    fn set_species_mobility(&mut self, name: &str, state: MolecState, difc: f64) -> ResultCode {
        self.calls.push(KernelCall::SetSpeciesMobility {
            name: name.to_string(),
            state,
            difc,
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if !self.species.contains(name) {
            return ResultCode::Undefined;
        }
        if difc < 0.0 {
            return ResultCode::Bounds;
        }
        ResultCode::Ok
    }

    fn set_molecule_style(
        &mut self,
        name: &str,
        state: MolecState,
        size: f64,
        color: &Color,
    ) -> ResultCode {
        self.calls.push(KernelCall::SetMoleculeStyle {
            name: name.to_string(),
            state,
            size,
            color: color.clone(),
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if !self.species.contains(name) {
            return ResultCode::Undefined;
        }
        ResultCode::Ok
    }

    fn add_mol_list(&mut self, tag: &str) -> ResultCode {
        self.calls.push(KernelCall::AddMolList {
            tag: tag.to_string(),
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if tag.is_empty() {
            return ResultCode::Error;
        }
        // Creating an existing list is a no-op, not an error.
        self.mol_lists.insert(tag.to_string());
        ResultCode::Ok
    }

    fn set_mol_list(&mut self, name: &str, state: MolecState, tag: &str) -> ResultCode {
        self.calls.push(KernelCall::SetMolList {
            name: name.to_string(),
            state,
            tag: tag.to_string(),
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if !self.species.contains(name) || !self.mol_lists.contains(tag) {
            return ResultCode::Undefined;
        }
        ResultCode::Ok
    }

    fn add_solution_molecules(
        &mut self,
        name: &str,
        count: u64,
        low_bound: &[f64],
        high_bound: &[f64],
    ) -> ResultCode {
        self.calls.push(KernelCall::AddSolutionMolecules {
            name: name.to_string(),
            count,
            low_bound: low_bound.to_vec(),
            high_bound: high_bound.to_vec(),
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if !self.species.contains(name) {
            return ResultCode::Undefined;
        }
        if low_bound.len() != high_bound.len() {
            return ResultCode::Bounds;
        }
        ResultCode::Ok
    }

    fn add_reaction(
        &mut self,
        name: &str,
        reactant1_name: &str,
        reactant1_state: MolecState,
        reactant2_name: &str,
        reactant2_state: MolecState,
        product_names: &[String],
        product_states: &[MolecState],
        rate: f64,
    ) -> ResultCode {
        self.calls.push(KernelCall::AddReaction {
            name: name.to_string(),
            reactant1_name: reactant1_name.to_string(),
            reactant1_state,
            reactant2_name: reactant2_name.to_string(),
            reactant2_state,
            product_names: product_names.to_vec(),
            product_states: product_states.to_vec(),
            rate,
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if rate < 0.0 {
            return ResultCode::Bounds;
        }
        // The empty name is the "no second reactant" padding; everything
        // else must already be registered.
        for reactant in [reactant1_name, reactant2_name] {
            if !reactant.is_empty() && !self.species.contains(reactant) {
                return ResultCode::Undefined;
            }
        }
        for product in product_names {
            if !self.species.contains(product) {
                return ResultCode::Undefined;
            }
        }
        if !self.reactions.insert(name.to_string()) {
            return ResultCode::Error;
        }
        ResultCode::Ok
    }

    fn set_reaction_products(
        &mut self,
        reaction_name: &str,
        method: PlacementMethod,
        parameter: f64,
        target_product_name: &str,
        position: &[f64],
    ) -> ResultCode {
        self.calls.push(KernelCall::SetReactionProducts {
            reaction_name: reaction_name.to_string(),
            method,
            method_code: method.code(),
            parameter,
            target_product_name: target_product_name.to_string(),
            position: position.to_vec(),
        });
        if let Some(code) = self.forced_failure() {
            return code;
        }
        if !self.reactions.contains(reaction_name) {
            return ResultCode::Undefined;
        }
        self.placements.insert(
            reaction_name.to_string(),
            Placement {
                method,
                parameter,
                target_product_name: target_product_name.to_string(),
                position: position.to_vec(),
            },
        );
        ResultCode::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_species_names_are_rejected() {
        let mut kernel = RecordingKernel::new();
        assert!(kernel.add_species("A").is_ok());
        assert_eq!(kernel.add_species("A"), ResultCode::Error);
        assert_eq!(kernel.species_count(), 1);
        assert_eq!(kernel.calls().len(), 2);
    }

    #[test]
    fn mobility_requires_a_registered_species() {
        let mut kernel = RecordingKernel::new();
        assert_eq!(
            kernel.set_species_mobility("ghost", MolecState::Soln, 1.0),
            ResultCode::Undefined
        );
    }

    #[test]
    fn mol_list_creation_is_idempotent() {
        let mut kernel = RecordingKernel::new();
        assert!(kernel.add_mol_list("fast").is_ok());
        assert!(kernel.add_mol_list("fast").is_ok());
    }

    #[test]
    fn placement_is_last_write_wins() {
        let mut kernel = RecordingKernel::new();
        kernel.add_species("A");
        kernel.add_reaction(
            "decay",
            "A",
            MolecState::Soln,
            "",
            MolecState::All,
            &[],
            &[],
            0.1,
        );
        kernel.set_reaction_products("decay", PlacementMethod::Pgem, 0.2, "", &[]);
        kernel.set_reaction_products("decay", PlacementMethod::Irrev, 0.0, "", &[]);
        let placement = kernel.placement("decay").unwrap();
        assert_eq!(placement.method, PlacementMethod::Irrev);
    }

    #[test]
    fn forced_failure_applies_to_exactly_one_call() {
        let mut kernel = RecordingKernel::new();
        kernel.fail_next(ResultCode::Memory);
        assert_eq!(kernel.add_species("A"), ResultCode::Memory);
        assert!(kernel.add_species("A").is_ok());
    }
}
