use serde::{Deserialize, Serialize};
use std::fmt;

/// How product molecules are positioned after a reaction fires.
///
/// The variants cover no placement at all, irreversible placement at the
/// reaction site, conformational spread, bounce-back for surface reactions,
/// the geminate-recombination-probability family (`pgem*`), ratio-based
/// placement, an explicit unbinding radius, and the two position-based
/// methods (`offset`, `fixed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMethod {
    None,
    Irrev,
    Confspread,
    Bounce,
    Pgem,
    Pgemmax,
    Pgemmaxw,
    Ratio,
    Unbindrad,
    Pgem2,
    Pgemmax2,
    Ratio2,
    Offset,
    Fixed,
}

impl PlacementMethod {
    /// Every valid method, in kernel table order.
    pub const ALL: [PlacementMethod; 14] = [
        PlacementMethod::None,
        PlacementMethod::Irrev,
        PlacementMethod::Confspread,
        PlacementMethod::Bounce,
        PlacementMethod::Pgem,
        PlacementMethod::Pgemmax,
        PlacementMethod::Pgemmaxw,
        PlacementMethod::Ratio,
        PlacementMethod::Unbindrad,
        PlacementMethod::Pgem2,
        PlacementMethod::Pgemmax2,
        PlacementMethod::Ratio2,
        PlacementMethod::Offset,
        PlacementMethod::Fixed,
    ];

    /// Membership test by wire name; `None` for anything outside the
    /// closed set.
    pub fn from_name(name: &str) -> Option<PlacementMethod> {
        match name {
            "none" => Some(PlacementMethod::None),
            "irrev" => Some(PlacementMethod::Irrev),
            "confspread" => Some(PlacementMethod::Confspread),
            "bounce" => Some(PlacementMethod::Bounce),
            "pgem" => Some(PlacementMethod::Pgem),
            "pgemmax" => Some(PlacementMethod::Pgemmax),
            "pgemmaxw" => Some(PlacementMethod::Pgemmaxw),
            "ratio" => Some(PlacementMethod::Ratio),
            "unbindrad" => Some(PlacementMethod::Unbindrad),
            "pgem2" => Some(PlacementMethod::Pgem2),
            "pgemmax2" => Some(PlacementMethod::Pgemmax2),
            "ratio2" => Some(PlacementMethod::Ratio2),
            "offset" => Some(PlacementMethod::Offset),
            "fixed" => Some(PlacementMethod::Fixed),
            _ => Option::None,
        }
    }

    /// The lower-case name used on the kernel wire and in model files.
    pub fn name(&self) -> &'static str {
        match self {
            PlacementMethod::None => "none",
            PlacementMethod::Irrev => "irrev",
            PlacementMethod::Confspread => "confspread",
            PlacementMethod::Bounce => "bounce",
            PlacementMethod::Pgem => "pgem",
            PlacementMethod::Pgemmax => "pgemmax",
            PlacementMethod::Pgemmaxw => "pgemmaxw",
            PlacementMethod::Ratio => "ratio",
            PlacementMethod::Unbindrad => "unbindrad",
            PlacementMethod::Pgem2 => "pgem2",
            PlacementMethod::Pgemmax2 => "pgemmax2",
            PlacementMethod::Ratio2 => "ratio2",
            PlacementMethod::Offset => "offset",
            PlacementMethod::Fixed => "fixed",
        }
    }

    /// The stable ordinal the kernel expects for this method.
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Whether the method places products at an explicit coordinate and
    /// therefore requires a position vector.
    pub fn needs_position(&self) -> bool {
        matches!(self, PlacementMethod::Offset | PlacementMethod::Fixed)
    }
}

impl fmt::Display for PlacementMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_method_resolves_by_name() {
        for method in PlacementMethod::ALL {
            assert_eq!(PlacementMethod::from_name(method.name()), Some(method));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(PlacementMethod::from_name("pgemax"), None);
        assert_eq!(PlacementMethod::from_name(""), None);
    }

    #[test]
    fn codes_follow_kernel_table_order() {
        assert_eq!(PlacementMethod::None.code(), 0);
        assert_eq!(PlacementMethod::Pgem.code(), 4);
        assert_eq!(PlacementMethod::Unbindrad.code(), 8);
        assert_eq!(PlacementMethod::Fixed.code(), 13);
        for (i, method) in PlacementMethod::ALL.iter().enumerate() {
            assert_eq!(method.code() as usize, i);
        }
    }

    #[test]
    fn only_offset_and_fixed_need_a_position() {
        for method in PlacementMethod::ALL {
            let expected =
                method == PlacementMethod::Offset || method == PlacementMethod::Fixed;
            assert_eq!(method.needs_position(), expected);
        }
    }
}
