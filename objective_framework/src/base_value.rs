use std::{
    fmt,
    iter::Sum,
    ops::{Add, Sub},
};

use model::base_types::Duration;

/// A single value of an indicator. E.g., count of things, durations, costs
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum BaseValue {
    Integer(i64), // cannot handle negative values
    Float(f64),
    Duration(Duration), // cannot handle negative values
    Maximum,
    Zero,
}

impl Add for BaseValue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (BaseValue::Integer(a), BaseValue::Integer(b)) => BaseValue::Integer(a + b),
            (BaseValue::Float(a), BaseValue::Float(b)) => BaseValue::Float(a + b),
            (BaseValue::Duration(a), BaseValue::Duration(b)) => BaseValue::Duration(a + b),
            (BaseValue::Maximum, _) => BaseValue::Maximum,
            (_, BaseValue::Maximum) => BaseValue::Maximum,
            (BaseValue::Zero, value) => value,
            (value, BaseValue::Zero) => value,
            _ => panic!("Cannot add {:?} and {:?}", self, other),
        }
    }
}

impl Sub for BaseValue {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match (self, other) {
            (BaseValue::Integer(a), BaseValue::Integer(b)) => BaseValue::Integer(a - b),
            (BaseValue::Float(a), BaseValue::Float(b)) => BaseValue::Float(a - b),
            (BaseValue::Duration(a), BaseValue::Duration(b)) => BaseValue::Duration(a - b),
            (BaseValue::Maximum, _) => BaseValue::Maximum,
            (value, BaseValue::Zero) => value,
            (BaseValue::Zero, BaseValue::Integer(a)) => BaseValue::Integer(-a),
            (BaseValue::Zero, BaseValue::Float(a)) => BaseValue::Float(-a),
            _ => panic!("Cannot sub {:?} and {:?}", self, other),
        }
    }
}

impl Sum<Self> for BaseValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(BaseValue::Zero, |a, b| a + b)
    }
}

impl fmt::Display for BaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseValue::Integer(i) => write!(f, "{}", i),
            BaseValue::Float(c) => write!(f, "{}", c),
            BaseValue::Duration(d) => write!(f, "{}", d),
            BaseValue::Maximum => write!(f, "MAX"),
            BaseValue::Zero => write!(f, "0"),
        }
    }
}
