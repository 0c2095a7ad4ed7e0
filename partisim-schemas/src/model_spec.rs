use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Declaration of one chemical species.
///
/// `state` and the placement method names in [`PlacementSpec`] are kept as
/// plain strings here; the modeling layer validates them against the closed
/// vocabulary before any kernel call is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSpec {
    pub name: String,
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub difc: f64,
    #[serde(default = "default_display_size")]
    pub display_size: f64,
    #[serde(default)]
    pub mol_list: Option<String>,
}

fn default_state() -> String {
    "soln".to_string()
}

fn default_display_size() -> f64 {
    2.0
}

impl SpeciesSpec {
    /// A spec with defaults for everything but the name.
    pub fn named(name: &str) -> Self {
        SpeciesSpec {
            name: name.to_string(),
            state: default_state(),
            color: Color::default(),
            difc: 0.0,
            display_size: default_display_size(),
            mol_list: None,
        }
    }
}

/// Initial placement of dissolved molecules, optionally confined to an
/// axis-aligned box. Empty bounds mean anywhere in the defined space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionFillSpec {
    pub species: String,
    pub count: u64,
    #[serde(default)]
    pub low_bound: Vec<f64>,
    #[serde(default)]
    pub high_bound: Vec<f64>,
}

/// One reaction site: a species reacting at a particular molecular state,
/// which may differ from the state the species was declared with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSpec {
    pub species: String,
    pub state: String,
}

/// Product placement attached to a reaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSpec {
    pub method: String,
    pub parameter: f64,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub position: Vec<f64>,
}

/// Declaration of one reaction rule: one or two reactant sites transformed
/// into zero or more product sites at the given rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSpec {
    #[serde(default)]
    pub name: String,
    pub reactants: Vec<SiteSpec>,
    #[serde(default)]
    pub products: Vec<SiteSpec>,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub rate_rev: Option<f64>,
    #[serde(default)]
    pub placement: Option<PlacementSpec>,
}
