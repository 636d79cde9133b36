//! Binary operators and their precedence tiers.
//!
//! All operators are left-associative. Precedence is expressed as an index
//! into [`PRECEDENCE_TIERS`]: a higher index binds more tightly.

use std::fmt;

/// Binary operators joining the operands of an arithmetic expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithmeticOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,

    // Logical
    And,
    Or,

    // Coalesce
    Pipe,
}

/// Operator tiers ordered from lowest to highest precedence.
///
/// Every operator appears in exactly one tier. `Pipe` sits below `Or`, so an
/// unparenthesized `a || b | c` coalesces the whole boolean expression.
pub const PRECEDENCE_TIERS: &[&[ArithmeticOp]] = &[
    &[ArithmeticOp::Pipe],
    &[ArithmeticOp::Or],
    &[ArithmeticOp::And],
    &[
        ArithmeticOp::Eq,
        ArithmeticOp::Neq,
        ArithmeticOp::Gt,
        ArithmeticOp::Gte,
        ArithmeticOp::Lt,
        ArithmeticOp::Lte,
    ],
    &[ArithmeticOp::Add, ArithmeticOp::Sub],
    &[ArithmeticOp::Mul, ArithmeticOp::Div, ArithmeticOp::Mod],
];

impl ArithmeticOp {
    /// Every operator, in declaration order.
    pub const ALL: [ArithmeticOp; 14] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Eq,
        Self::Neq,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::And,
        Self::Or,
        Self::Pipe,
    ];

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Pipe => "|",
        }
    }

    /// Returns the index of this operator's tier in [`PRECEDENCE_TIERS`].
    ///
    /// Higher number = higher precedence (binds more tightly).
    pub fn precedence(self) -> usize {
        PRECEDENCE_TIERS
            .iter()
            .position(|tier| tier.contains(&self))
            .unwrap_or(0)
    }

    /// Whether the right operand may be skipped depending on the left value.
    pub const fn is_lazy(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Pipe)
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Neq | Self::Gt | Self::Gte | Self::Lt | Self::Lte
        )
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests;
