use crate::error::PartisimError;
use crate::kernel::SimulationKernel;
use partisim_schemas::{color::Color, model_spec::SpeciesSpec, state::MolecState};
use std::fmt;

/// A declared chemical species.
///
/// Holds a local mirror of every property pushed to the kernel; reads come
/// from the mirror, the kernel stays authoritative for simulation. Every
/// mutation is one synchronous round-trip across the boundary, never
/// deferred or batched. Note that size and color share a single combined
/// style call, so setting one then the other performs two round-trips and
/// an observer of the kernel between them can see an intermediate style.
#[derive(Debug, Clone)]
pub struct Species {
    name: String,
    state: MolecState,
    difc: f64,
    color: Color,
    display_size: f64,
    mol_list: Option<String>,
}

impl Species {
    /// Registers a species with the kernel and pushes its initial mobility,
    /// style, and optional molecule list.
    ///
    /// # Errors
    ///
    /// `UnknownState` if `spec.state` is outside the molecular state
    /// vocabulary (checked before any kernel call); `SpeciesRejected` if
    /// the kernel refuses the name (e.g. a duplicate); the corresponding
    /// rejection error if any initial property push fails. On error no
    /// species value is returned, so a partially registered entity is
    /// never observable from the caller's side.
    pub fn new(
        kernel: &mut dyn SimulationKernel,
        spec: SpeciesSpec,
    ) -> Result<Self, PartisimError> {
        let state = MolecState::from_name(&spec.state)
            .ok_or_else(|| PartisimError::UnknownState(spec.state.clone()))?;

        let code = kernel.add_species(&spec.name);
        if !code.is_ok() {
            return Err(PartisimError::SpeciesRejected {
                name: spec.name,
                code,
            });
        }

        let mut species = Species {
            name: spec.name,
            state,
            difc: 0.0,
            color: Color::default(),
            display_size: spec.display_size,
            mol_list: None,
        };
        species.set_difc(kernel, spec.difc)?;
        species.set_display_size(kernel, spec.display_size)?;
        species.set_color(kernel, spec.color)?;
        if let Some(tag) = spec.mol_list {
            species.set_mol_list(kernel, &tag)?;
        }
        Ok(species)
    }

    /// Updates the diffusion coefficient, re-pushing the kernel's mobility
    /// table entry for this (name, state).
    pub fn set_difc(
        &mut self,
        kernel: &mut dyn SimulationKernel,
        difc: f64,
    ) -> Result<(), PartisimError> {
        let code = kernel.set_species_mobility(&self.name, self.state, difc);
        if !code.is_ok() {
            return Err(PartisimError::MobilityRejected {
                name: self.name.clone(),
                state: self.state,
                code,
            });
        }
        self.difc = difc;
        Ok(())
    }

    /// Updates the display color. The kernel style call always carries both
    /// color and size, so the current size is resent alongside.
    pub fn set_color(
        &mut self,
        kernel: &mut dyn SimulationKernel,
        color: Color,
    ) -> Result<(), PartisimError> {
        let code = kernel.set_molecule_style(&self.name, self.state, self.display_size, &color);
        if !code.is_ok() {
            return Err(PartisimError::StyleRejected {
                name: self.name.clone(),
                code,
            });
        }
        self.color = color;
        Ok(())
    }

    /// Updates the display size, resending the current color alongside.
    pub fn set_display_size(
        &mut self,
        kernel: &mut dyn SimulationKernel,
        size: f64,
    ) -> Result<(), PartisimError> {
        let code = kernel.set_molecule_style(&self.name, self.state, size, &self.color);
        if !code.is_ok() {
            return Err(PartisimError::StyleRejected {
                name: self.name.clone(),
                code,
            });
        }
        self.display_size = size;
        Ok(())
    }

    /// Binds this species to a named molecule list, creating the list in
    /// the kernel if it does not exist yet.
    pub fn set_mol_list(
        &mut self,
        kernel: &mut dyn SimulationKernel,
        tag: &str,
    ) -> Result<(), PartisimError> {
        let code = kernel.add_mol_list(tag);
        if !code.is_ok() {
            return Err(PartisimError::MolListRejected {
                name: self.name.clone(),
                tag: tag.to_string(),
                code,
            });
        }
        let code = kernel.set_mol_list(&self.name, self.state, tag);
        if !code.is_ok() {
            return Err(PartisimError::MolListRejected {
                name: self.name.clone(),
                tag: tag.to_string(),
                code,
            });
        }
        self.mol_list = Some(tag.to_string());
        Ok(())
    }

    /// Places `count` molecules of this species in solution, optionally
    /// confined to the axis-aligned box `low_bound`..`high_bound` (empty
    /// bounds mean anywhere in the defined space).
    ///
    /// Only valid for species declared with state `soln`; anything else is
    /// a local contract violation and the kernel is not contacted.
    pub fn add_to_solution(
        &self,
        kernel: &mut dyn SimulationKernel,
        count: u64,
        low_bound: &[f64],
        high_bound: &[f64],
    ) -> Result<(), PartisimError> {
        if self.state != MolecState::Soln {
            return Err(PartisimError::NotSolutionState {
                species: self.name.clone(),
                state: self.state,
            });
        }
        let code = kernel.add_solution_molecules(&self.name, count, low_bound, high_bound);
        if !code.is_ok() {
            return Err(PartisimError::SolutionFillRejected {
                name: self.name.clone(),
                count,
                code,
            });
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared state; immutable after construction.
    pub fn state(&self) -> MolecState {
        self.state
    }

    pub fn difc(&self) -> f64 {
        self.difc
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn display_size(&self) -> f64 {
        self.display_size
    }

    pub fn mol_list(&self) -> Option<&str> {
        self.mol_list.as_deref()
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Species: {}, difc={}, state={}>",
            self.name, self.difc, self.state
        )
    }
}
