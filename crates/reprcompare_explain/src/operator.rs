//! Comparison operators.

use std::fmt;
use std::str::FromStr;

use reprcompare_foundation::Error;

/// A binary operator an assertion compared its operands with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `not in`
    NotIn,
}

impl Operator {
    /// Every operator, in a fixed order.
    pub const ALL: [Self; 7] = [
        Self::Eq,
        Self::Ne,
        Self::Ge,
        Self::Le,
        Self::Gt,
        Self::Lt,
        Self::NotIn,
    ];

    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::NotIn => "not in",
        }
    }

    /// Returns true for the six operators that compare sets.
    #[must_use]
    pub const fn is_set_comparison(self) -> bool {
        !matches!(self, Self::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| Error::unknown_operator(s))
    }
}
