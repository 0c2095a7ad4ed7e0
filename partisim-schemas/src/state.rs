use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical state of a molecule: dissolved in solution, bound to one of the
/// four surface faces, dissolved but adjacent to a surface back face, or one
/// of the wildcard states used when declaring reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MolecState {
    Soln,
    Front,
    Back,
    Up,
    Down,
    Bsoln,
    All,
    None,
    Some,
}

impl MolecState {
    /// Every valid state, in kernel table order.
    pub const ALL: [MolecState; 9] = [
        MolecState::Soln,
        MolecState::Front,
        MolecState::Back,
        MolecState::Up,
        MolecState::Down,
        MolecState::Bsoln,
        MolecState::All,
        MolecState::None,
        MolecState::Some,
    ];

    /// Membership test by wire name. Returns `None` for anything outside
    /// the closed set, so callers can validate input before touching the
    /// kernel.
    pub fn from_name(name: &str) -> Option<MolecState> {
        match name {
            "soln" => Some(MolecState::Soln),
            "front" => Some(MolecState::Front),
            "back" => Some(MolecState::Back),
            "up" => Some(MolecState::Up),
            "down" => Some(MolecState::Down),
            "bsoln" => Some(MolecState::Bsoln),
            "all" => Some(MolecState::All),
            "none" => Some(MolecState::None),
            "some" => Some(MolecState::Some),
            _ => Option::None,
        }
    }

    /// The lower-case name used on the kernel wire and in model files.
    pub fn name(&self) -> &'static str {
        match self {
            MolecState::Soln => "soln",
            MolecState::Front => "front",
            MolecState::Back => "back",
            MolecState::Up => "up",
            MolecState::Down => "down",
            MolecState::Bsoln => "bsoln",
            MolecState::All => "all",
            MolecState::None => "none",
            MolecState::Some => "some",
        }
    }
}

impl fmt::Display for MolecState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_resolves_by_name() {
        for state in MolecState::ALL {
            assert_eq!(MolecState::from_name(state.name()), Some(state));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(MolecState::from_name("solution"), None);
        assert_eq!(MolecState::from_name(""), None);
        assert_eq!(MolecState::from_name("Soln"), None);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&MolecState::Bsoln).unwrap();
        assert_eq!(json, "\"bsoln\"");
        let back: MolecState = serde_json::from_str("\"front\"").unwrap();
        assert_eq!(back, MolecState::Front);
    }
}
