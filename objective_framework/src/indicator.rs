use crate::base_value::BaseValue;

/// A single measurable quantity of a solution (a count, a duration, ...)
/// that contributes to one level of the objective hierarchy.
pub trait Indicator<S> {
    fn evaluate(&self, solution: &S) -> BaseValue;

    fn name(&self) -> String;
}
