use anyhow::{bail, Context, Result};
use partisim_core::{Reaction, RecordingKernel, ReversibleReaction, Species};
use partisim_schemas::file_formats::ModelFile;
use partisim_schemas::model_spec::{ReactionSpec, SiteSpec};
use partisim_schemas::state::MolecState;
use serde::Serialize;
use std::collections::HashMap;

/// Summary of a successful model replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    pub species: usize,
    pub reactions: usize,
    pub placements: usize,
    pub kernel_calls: usize,
}

/// Replays a model file through the modeling layer against the given
/// recording kernel. Stops at the first validation or kernel failure,
/// exactly as a scripted model build would.
pub fn build_model(model: &ModelFile, kernel: &mut RecordingKernel) -> Result<LintReport> {
    let mut species_by_name: HashMap<String, Species> = HashMap::new();
    for spec in &model.species {
        let species = Species::new(kernel, spec.clone())
            .with_context(|| format!("Species '{}' failed to build", spec.name))?;
        species_by_name.insert(spec.name.clone(), species);
    }

    for fill in &model.solution_fills {
        let species = species_by_name
            .get(&fill.species)
            .with_context(|| format!("Solution fill references undeclared species '{}'", fill.species))?;
        species
            .add_to_solution(kernel, fill.count, &fill.low_bound, &fill.high_bound)
            .with_context(|| format!("Solution fill for '{}' failed", fill.species))?;
    }

    let mut reactions = 0;
    let mut placements = 0;
    for spec in &model.reactions {
        reactions += build_reaction(spec, &species_by_name, kernel, &mut placements)
            .with_context(|| format!("Reaction '{}' failed to build", spec.name))?;
    }

    Ok(LintReport {
        species: species_by_name.len(),
        reactions,
        placements,
        kernel_calls: kernel.calls().len(),
    })
}

fn resolve_sites<'a>(
    sites: &[SiteSpec],
    species_by_name: &'a HashMap<String, Species>,
) -> Result<Vec<(&'a Species, MolecState)>> {
    sites
        .iter()
        .map(|site| {
            let species = species_by_name
                .get(&site.species)
                .with_context(|| format!("Undeclared species '{}'", site.species))?;
            let state = MolecState::from_name(&site.state)
                .with_context(|| format!("'{}' is not a valid molecular state", site.state))?;
            Ok((species, state))
        })
        .collect()
}

fn resolve_target<'a>(
    name: &Option<String>,
    species_by_name: &'a HashMap<String, Species>,
) -> Result<Option<&'a Species>> {
    match name {
        Some(name) => Ok(Some(species_by_name.get(name).with_context(|| {
            format!("Placement targets undeclared species '{name}'")
        })?)),
        None => Ok(None),
    }
}

/// Registers one reaction spec; returns how many kernel reactions it
/// produced (two for reversible rules).
fn build_reaction(
    spec: &ReactionSpec,
    species_by_name: &HashMap<String, Species>,
    kernel: &mut RecordingKernel,
    placements: &mut usize,
) -> Result<usize> {
    let reactants = resolve_sites(&spec.reactants, species_by_name)?;
    let products = resolve_sites(&spec.products, species_by_name)?;

    match spec.rate_rev {
        Some(rate_rev) => {
            let pair = ReversibleReaction::new(
                kernel,
                &spec.name,
                &reactants,
                &products,
                spec.rate,
                rate_rev,
            )?;
            // For reversible rules the placement governs geminate
            // recombination, which belongs to the backward direction.
            if let Some(placement) = &spec.placement {
                pair.backward().set_product_placement_named(
                    kernel,
                    &placement.method,
                    placement.parameter,
                    resolve_target(&placement.product, species_by_name)?,
                    &placement.position,
                )?;
                *placements += 1;
            }
            Ok(2)
        }
        None => {
            let reaction = Reaction::new(kernel, &spec.name, &reactants, &products, spec.rate)?;
            if let Some(placement) = &spec.placement {
                reaction.set_product_placement_named(
                    kernel,
                    &placement.method,
                    placement.parameter,
                    resolve_target(&placement.product, species_by_name)?,
                    &placement.position,
                )?;
                *placements += 1;
            }
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partisim_schemas::model_spec::{PlacementSpec, SolutionFillSpec, SpeciesSpec};

    fn two_species_model() -> ModelFile {
        ModelFile {
            schema_version: "1".to_string(),
            model_id: None,
            species: vec![
                SpeciesSpec {
                    difc: 3.0,
                    ..SpeciesSpec::named("A")
                },
                SpeciesSpec::named("B"),
            ],
            solution_fills: vec![SolutionFillSpec {
                species: "A".to_string(),
                count: 50,
                low_bound: vec![],
                high_bound: vec![],
            }],
            reactions: vec![ReactionSpec {
                name: "conv".to_string(),
                reactants: vec![SiteSpec {
                    species: "A".to_string(),
                    state: "soln".to_string(),
                }],
                products: vec![SiteSpec {
                    species: "B".to_string(),
                    state: "soln".to_string(),
                }],
                rate: 0.1,
                rate_rev: None,
                placement: Some(PlacementSpec {
                    method: "irrev".to_string(),
                    parameter: 0.0,
                    product: None,
                    position: vec![],
                }),
            }],
        }
    }

    #[test]
    fn a_valid_model_replays_cleanly() {
        let mut kernel = RecordingKernel::new();
        let report = build_model(&two_species_model(), &mut kernel).unwrap();
        assert_eq!(report.species, 2);
        assert_eq!(report.reactions, 1);
        assert_eq!(report.placements, 1);
        assert_eq!(kernel.reaction_count(), 1);
        assert!(kernel.placement("conv").is_some());
    }

    #[test]
    fn undeclared_species_references_are_reported() {
        let mut model = two_species_model();
        model.reactions[0].reactants[0].species = "C".to_string();
        let mut kernel = RecordingKernel::new();
        let err = build_model(&model, &mut kernel).unwrap_err();
        assert!(format!("{err:#}").contains("Undeclared species 'C'"));
    }

    #[test]
    fn invalid_state_strings_are_reported() {
        let mut model = two_species_model();
        model.species[0].state = "liquid".to_string();
        let mut kernel = RecordingKernel::new();
        let err = build_model(&model, &mut kernel).unwrap_err();
        assert!(format!("{err:#}").contains("not a valid molecular state"));
    }
}
