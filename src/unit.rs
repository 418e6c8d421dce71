//!
//! Function unit surface
//!
//! One operation per call: the harness picks an [`Op`], supplies its
//! operands and consumes a single 16-bit result. Nothing is retained
//! between calls.
//!

use std::str::FromStr;

use thiserror::Error;

use crate::cosine::cos16;
use crate::fixed::{add16fix, mul16fix};

/// Operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Cos16,
    Mul16Fix,
    Add16Fix,
}

impl Op {
    /// Unit-level operation name.
    pub fn name(&self) -> &'static str {
        use self::Op::*;
        match self {
            Cos16 => "COS16",
            Mul16Fix => "MUL_16_FIX",
            Add16Fix => "ADD_16_FIX",
        }
    }

    /// Fixed operand count.
    pub fn operands(&self) -> usize {
        use self::Op::*;
        match self {
            Cos16 => 1,
            Mul16Fix | Add16Fix => 2,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("unknown operation {0}")]
    UnknownOperation(String),
    #[error("{op} takes {expected} operands, got {got}")]
    OperandCount {
        op: &'static str,
        expected: usize,
        got: usize,
    },
}

impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "COS16" => Ok(Op::Cos16),
            "MUL_16_FIX" => Ok(Op::Mul16Fix),
            "ADD_16_FIX" => Ok(Op::Add16Fix),
            _ => Err(Error::UnknownOperation(s.to_owned())),
        }
    }
}

/// Static description of the unit.
#[derive(Debug)]
pub struct Descr {
    pub name: &'static str,
    pub desc: &'static str,
    pub ops: &'static [Op],
}

pub const COS16_DESCR: &Descr = &Descr {
    name: "cos16",
    desc: "fixed-point cosine function unit",
    ops: &[Op::Cos16, Op::Mul16Fix, Op::Add16Fix],
};

/// Run one operation against its operands.
pub fn execute(op: Op, operands: &[u32]) -> Result<u16, Error> {
    if operands.len() != op.operands() {
        return Err(Error::OperandCount {
            op: op.name(),
            expected: op.operands(),
            got: operands.len(),
        });
    }

    let value = match op {
        Op::Cos16 => cos16(operands[0]),
        Op::Mul16Fix => mul16fix(operands[0], operands[1]),
        Op::Add16Fix => add16fix(operands[0], operands[1]),
    };

    trace!("{} {:?} -> {}", op.name(), operands, value);

    Ok(value)
}
