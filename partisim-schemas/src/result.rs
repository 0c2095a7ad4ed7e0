use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a kernel boundary call. `Ok` is the only success value;
/// the modeling layer treats every other code as a fatal rejection of
/// the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    Ok,
    Error,
    Memory,
    Bug,
    Syntax,
    Undefined,
    Bounds,
}

impl ResultCode {
    pub fn is_ok(&self) -> bool {
        matches!(self, ResultCode::Ok)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResultCode::Ok => "ok",
            ResultCode::Error => "error",
            ResultCode::Memory => "memory",
            ResultCode::Bug => "bug",
            ResultCode::Syntax => "syntax",
            ResultCode::Undefined => "undefined",
            ResultCode::Bounds => "bounds",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ok_is_ok() {
        assert!(ResultCode::Ok.is_ok());
        for code in [
            ResultCode::Error,
            ResultCode::Memory,
            ResultCode::Bug,
            ResultCode::Syntax,
            ResultCode::Undefined,
            ResultCode::Bounds,
        ] {
            assert!(!code.is_ok(), "{code} must count as failure");
        }
    }
}
