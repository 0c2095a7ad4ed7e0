use crate::error::PartisimError;
use crate::kernel::SimulationKernel;
use crate::model::species::Species;
use partisim_schemas::{placement::PlacementMethod, state::MolecState};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter behind synthesized reaction names; process-unique.
static NEXT_REACTION_ID: AtomicU64 = AtomicU64::new(1);

fn synthesize_name() -> String {
    format!("r{}", NEXT_REACTION_ID.fetch_add(1, Ordering::Relaxed))
}

/// One reaction site: a species taking part at a particular molecular
/// state. The site state may differ from the state the species was
/// declared with (a `soln` species can still react at `front`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub species: String,
    pub state: MolecState,
}

impl Site {
    fn of(species: &Species, state: MolecState) -> Self {
        Site {
            species: species.name().to_string(),
            state,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.species, self.state)
    }
}

/// Diagnostic list of sites carried inside reaction-rejection errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteList(pub Vec<Site>);

impl fmt::Display for SiteList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        for (i, site) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{site}")?;
        }
        Ok(())
    }
}

/// A registered reaction rule: one or two reactant sites transformed into
/// zero or more product sites at a fixed rate.
///
/// The second reactant is an explicit `Option`; unimolecular reactions are
/// padded on the kernel wire with the empty name at state `all`, but no
/// placeholder species object exists on this side of the boundary.
#[derive(Debug, Clone)]
pub struct Reaction {
    name: String,
    reactant1: Site,
    reactant2: Option<Site>,
    products: Vec<Site>,
    rate: f64,
}

impl Reaction {
    /// Registers a reaction with the kernel.
    ///
    /// `reactants` must hold one or two entries; anything else is a local
    /// contract violation and the kernel is not contacted. An empty `name`
    /// gets a synthesized process-unique one. Kernel rejection surfaces as
    /// `ReactionRejected` carrying both reactant sites and every product
    /// site for diagnosis.
    pub fn new(
        kernel: &mut dyn SimulationKernel,
        name: &str,
        reactants: &[(&Species, MolecState)],
        products: &[(&Species, MolecState)],
        rate: f64,
    ) -> Result<Self, PartisimError> {
        if reactants.is_empty() || reactants.len() > 2 {
            return Err(PartisimError::ReactantArity(reactants.len()));
        }
        let name = if name.is_empty() {
            synthesize_name()
        } else {
            name.to_string()
        };

        let reactant1 = Site::of(reactants[0].0, reactants[0].1);
        let reactant2 = reactants.get(1).map(|(s, state)| Site::of(s, *state));
        let products: Vec<Site> = products
            .iter()
            .map(|(s, state)| Site::of(s, *state))
            .collect();

        // Unimolecular reactions share the two-reactant kernel call,
        // padded with the empty name at state `all`.
        let (r2_name, r2_state) = match &reactant2 {
            Some(site) => (site.species.as_str(), site.state),
            None => ("", MolecState::All),
        };
        let product_names: Vec<String> =
            products.iter().map(|site| site.species.clone()).collect();
        let product_states: Vec<MolecState> =
            products.iter().map(|site| site.state).collect();

        let code = kernel.add_reaction(
            &name,
            &reactant1.species,
            reactant1.state,
            r2_name,
            r2_state,
            &product_names,
            &product_states,
            rate,
        );
        if !code.is_ok() {
            let mut reactant_sites = vec![reactant1];
            if let Some(site) = reactant2 {
                reactant_sites.push(site);
            }
            return Err(PartisimError::ReactionRejected {
                name,
                code,
                reactants: SiteList(reactant_sites),
                products: SiteList(products),
            });
        }

        Ok(Reaction {
            name,
            reactant1,
            reactant2,
            products,
            rate,
        })
    }

    /// Attaches (or replaces) the product placement policy for this
    /// reaction. Repeated calls replace the previous policy; they do not
    /// compose.
    ///
    /// `product` targets the placement at a specific product species;
    /// methods that need no target pass `None` and the kernel receives the
    /// empty name. Position-based methods (`offset`, `fixed`) require a
    /// non-empty `position`, checked locally before the kernel call.
    pub fn set_product_placement(
        &self,
        kernel: &mut dyn SimulationKernel,
        method: PlacementMethod,
        parameter: f64,
        product: Option<&Species>,
        position: &[f64],
    ) -> Result<(), PartisimError> {
        if method.needs_position() && position.is_empty() {
            return Err(PartisimError::MissingPosition(method));
        }
        let target = product.map(Species::name).unwrap_or("");
        let code = kernel.set_reaction_products(&self.name, method, parameter, target, position);
        if !code.is_ok() {
            return Err(PartisimError::PlacementRejected {
                reaction: self.name.clone(),
                method,
                code,
            });
        }
        Ok(())
    }

    /// String-keyed variant of [`set_product_placement`], for callers that
    /// carry the method as text (model files, scripting front ends). An
    /// unknown method name fails before any kernel call.
    ///
    /// [`set_product_placement`]: Reaction::set_product_placement
    pub fn set_product_placement_named(
        &self,
        kernel: &mut dyn SimulationKernel,
        method: &str,
        parameter: f64,
        product: Option<&Species>,
        position: &[f64],
    ) -> Result<(), PartisimError> {
        let method = PlacementMethod::from_name(method)
            .ok_or_else(|| PartisimError::UnknownPlacementMethod(method.to_string()))?;
        self.set_product_placement(kernel, method, parameter, product, position)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn reactant1(&self) -> &Site {
        &self.reactant1
    }

    /// `None` for unimolecular reactions.
    pub fn reactant2(&self) -> Option<&Site> {
        self.reactant2.as_ref()
    }

    pub fn products(&self) -> &[Site] {
        &self.products
    }
}

/// A reversible reaction: the forward rule plus its reversed counterpart,
/// registered as two kernel reactions sharing a name stem. Placement for
/// geminate recombination is normally attached to the backward direction.
#[derive(Debug, Clone)]
pub struct ReversibleReaction {
    forward: Reaction,
    backward: Reaction,
}

impl ReversibleReaction {
    /// Registers the forward reaction under `name` and the backward one
    /// (products and reactants swapped) under `name` + `"_rev"`.
    ///
    /// Both directions must satisfy the reactant arity contract, so the
    /// forward product list must also hold one or two sites.
    pub fn new(
        kernel: &mut dyn SimulationKernel,
        name: &str,
        reactants: &[(&Species, MolecState)],
        products: &[(&Species, MolecState)],
        rate_fwd: f64,
        rate_rev: f64,
    ) -> Result<Self, PartisimError> {
        if products.is_empty() || products.len() > 2 {
            return Err(PartisimError::ReactantArity(products.len()));
        }
        let name = if name.is_empty() {
            synthesize_name()
        } else {
            name.to_string()
        };
        let forward = Reaction::new(kernel, &name, reactants, products, rate_fwd)?;
        let backward = Reaction::new(
            kernel,
            &format!("{name}_rev"),
            products,
            reactants,
            rate_rev,
        )?;
        Ok(ReversibleReaction { forward, backward })
    }

    pub fn forward(&self) -> &Reaction {
        &self.forward
    }

    pub fn backward(&self) -> &Reaction {
        &self.backward
    }
}
