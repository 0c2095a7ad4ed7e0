//! End-to-end model construction against the recording kernel.

use partisim_core::{KernelCall, PartisimError, Reaction, RecordingKernel, ReversibleReaction, Species};
use partisim_schemas::model_spec::SpeciesSpec;
use partisim_schemas::placement::PlacementMethod;
use partisim_schemas::state::MolecState;

fn species(kernel: &mut RecordingKernel, name: &str, state: &str, difc: f64) -> Species {
    let spec = SpeciesSpec {
        state: state.to_string(),
        difc,
        ..SpeciesSpec::named(name)
    };
    Species::new(kernel, spec).unwrap()
}

#[test]
fn enzyme_substrate_binding_registers_one_reaction() {
    let mut kernel = RecordingKernel::new();
    let s = species(&mut kernel, "S", "soln", 3.0);
    let e = species(&mut kernel, "E", "front", 0.0);
    let es = species(&mut kernel, "ES", "front", 0.0);

    let before = kernel.reaction_count();
    let r1 = Reaction::new(
        &mut kernel,
        "r1",
        &[(&e, MolecState::Front), (&s, MolecState::Bsoln)],
        &[(&es, MolecState::Front)],
        0.001,
    )
    .unwrap();
    assert_eq!(kernel.reaction_count(), before + 1);
    assert_eq!(r1.name(), "r1");

    let registration = kernel
        .calls()
        .iter()
        .filter(|call| matches!(call, KernelCall::AddReaction { .. }))
        .collect::<Vec<_>>();
    assert_eq!(registration.len(), 1);
    match registration[0] {
        KernelCall::AddReaction {
            name,
            reactant1_name,
            reactant1_state,
            reactant2_name,
            reactant2_state,
            product_names,
            product_states,
            rate,
        } => {
            assert_eq!(name, "r1");
            assert_eq!((reactant1_name.as_str(), *reactant1_state), ("E", MolecState::Front));
            assert_eq!((reactant2_name.as_str(), *reactant2_state), ("S", MolecState::Bsoln));
            assert_eq!(product_names, &["ES".to_string()]);
            assert_eq!(product_states, &[MolecState::Front]);
            assert_eq!(*rate, 0.001);
        }
        other => panic!("expected AddReaction, got {other:?}"),
    }
}

#[test]
fn geminate_recombination_on_the_backward_direction() {
    let mut kernel = RecordingKernel::new();
    let a = species(&mut kernel, "A", "soln", 1.0);
    let b = species(&mut kernel, "B", "soln", 1.0);
    let ab = species(&mut kernel, "AB", "soln", 0.5);

    let pair = ReversibleReaction::new(
        &mut kernel,
        "assoc",
        &[(&a, MolecState::Soln), (&b, MolecState::Soln)],
        &[(&ab, MolecState::Soln)],
        10.0,
        0.1,
    )
    .unwrap();

    pair.backward()
        .set_product_placement_named(&mut kernel, "pgemmax", 0.2, None, &[])
        .unwrap();

    let placements = kernel
        .calls()
        .iter()
        .filter(|call| matches!(call, KernelCall::SetReactionProducts { .. }))
        .collect::<Vec<_>>();
    assert_eq!(placements.len(), 1);
    match placements[0] {
        KernelCall::SetReactionProducts {
            reaction_name,
            method,
            method_code,
            parameter,
            target_product_name,
            position,
        } => {
            assert_eq!(reaction_name, "assoc_rev");
            assert_eq!(*method, PlacementMethod::Pgemmax);
            assert_eq!(*method_code, 5);
            assert_eq!(*parameter, 0.2);
            assert!(target_product_name.is_empty());
            assert!(position.is_empty());
        }
        other => panic!("expected SetReactionProducts, got {other:?}"),
    }
}

#[test]
fn a_full_model_builds_in_one_pass() {
    let mut kernel = RecordingKernel::new();
    let mut s = species(&mut kernel, "S", "soln", 3.0);
    let e = species(&mut kernel, "E", "front", 0.0);
    let es = species(&mut kernel, "ES", "front", 0.0);
    let p = species(&mut kernel, "P", "soln", 3.0);

    s.set_mol_list(&mut kernel, "substrate").unwrap();
    s.add_to_solution(&mut kernel, 1000, &[], &[]).unwrap();
    p.add_to_solution(&mut kernel, 0, &[0.0, 0.0, 0.0], &[10.0, 10.0, 10.0])
        .unwrap();

    let binding = ReversibleReaction::new(
        &mut kernel,
        "fwd",
        &[(&e, MolecState::Front), (&s, MolecState::Bsoln)],
        &[(&es, MolecState::Front)],
        0.001,
        0.0001,
    )
    .unwrap();
    binding
        .backward()
        .set_product_placement(&mut kernel, PlacementMethod::Pgemmax, 0.2, None, &[])
        .unwrap();

    let release = Reaction::new(
        &mut kernel,
        "cat",
        &[(&es, MolecState::Front)],
        &[(&e, MolecState::Front), (&p, MolecState::Bsoln)],
        0.1,
    )
    .unwrap();
    assert!(release.reactant2().is_none());

    assert_eq!(kernel.species_count(), 4);
    assert_eq!(kernel.reaction_count(), 3);
    assert!(kernel.placement("fwd_rev").is_some());
    assert!(kernel.placement("cat").is_none());
}

#[test]
fn rejected_construction_leaves_no_species_behind() {
    let mut kernel = RecordingKernel::new();
    let _s = species(&mut kernel, "S", "soln", 1.0);
    let result = Species::new(&mut kernel, SpeciesSpec::named("S"));
    match result {
        Err(PartisimError::SpeciesRejected { name, .. }) => assert_eq!(name, "S"),
        other => panic!("expected SpeciesRejected, got {other:?}"),
    }
    assert_eq!(kernel.species_count(), 1);
}
