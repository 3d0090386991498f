use crate::base_value::BaseValue;
use crate::evaluated_solution::EvaluatedSolution;
use crate::level::Level;
use crate::objective_value::ObjectiveValue;

/// Defines the hierarchical objective of an optimization problem. Each
/// level is minimized in order; a level only matters if all levels above
/// it are equal.
pub struct Objective<S> {
    hierarchy_levels: Vec<Level<S>>,
}

// static functions
impl<S> Objective<S> {
    pub fn new(hierarchy_levels: Vec<Level<S>>) -> Objective<S> {
        Objective { hierarchy_levels }
    }
}

// methods
impl<S> Objective<S> {
    /// Consumes the solution and pairs it with its objective value.
    pub fn evaluate(&self, solution: S) -> EvaluatedSolution<S> {
        let objective_vector: Vec<BaseValue> = self
            .hierarchy_levels
            .iter()
            .map(|level| level.evaluate(&solution))
            .collect();
        EvaluatedSolution::new(solution, ObjectiveValue::new(objective_vector))
    }

    /// An objective value that every real solution improves on. Useful as
    /// the starting value of a best-so-far search.
    pub fn maximum_value(&self) -> ObjectiveValue {
        ObjectiveValue::new(vec![BaseValue::Maximum; self.hierarchy_levels.len()])
    }
}
