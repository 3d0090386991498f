use model::base_types::Duration;

use crate::{BaseValue, Coefficient, Indicator, Level, Objective};

/// toy solution for the framework tests
struct Plan {
    vehicles: i64,
    duration: Duration,
}

struct VehicleCountIndicator;

impl Indicator<Plan> for VehicleCountIndicator {
    fn evaluate(&self, plan: &Plan) -> BaseValue {
        BaseValue::Integer(plan.vehicles)
    }

    fn name(&self) -> String {
        "vehicleCount".to_string()
    }
}

struct DurationIndicator;

impl Indicator<Plan> for DurationIndicator {
    fn evaluate(&self, plan: &Plan) -> BaseValue {
        BaseValue::Duration(plan.duration)
    }

    fn name(&self) -> String {
        "duration".to_string()
    }
}

fn build_objective() -> Objective<Plan> {
    let first_level = Level::new(vec![(
        Coefficient::Integer(1),
        Box::new(VehicleCountIndicator) as Box<dyn Indicator<Plan>>,
    )]);
    let second_level = Level::new(vec![(
        Coefficient::Integer(1),
        Box::new(DurationIndicator) as Box<dyn Indicator<Plan>>,
    )]);
    Objective::new(vec![first_level, second_level])
}

#[test]
fn lexicographic_comparison_prefers_higher_levels() {
    // ARRANGE
    let objective = build_objective();
    let short_with_three = Plan {
        vehicles: 3,
        duration: Duration::from_minutes(10.0).unwrap(),
    };
    let long_with_two = Plan {
        vehicles: 2,
        duration: Duration::from_minutes(500.0).unwrap(),
    };

    // ACT
    let a = objective.evaluate(short_with_three);
    let b = objective.evaluate(long_with_two);

    // ASSERT: fewer vehicles wins although the duration is much longer
    assert!(b.objective_value() < a.objective_value());
}

#[test]
fn equal_first_level_falls_through_to_second() {
    let objective = build_objective();
    let slow = objective.evaluate(Plan {
        vehicles: 2,
        duration: Duration::from_minutes(90.0).unwrap(),
    });
    let fast = objective.evaluate(Plan {
        vehicles: 2,
        duration: Duration::from_minutes(60.0).unwrap(),
    });

    assert!(fast.objective_value() < slow.objective_value());
    assert_eq!(fast.objective_value(), &fast.objective_value().clone());
}

#[test]
fn maximum_value_is_worse_than_any_real_value() {
    let objective = build_objective();
    let evaluated = objective.evaluate(Plan {
        vehicles: 1000,
        duration: Duration::from_hours(1000.0).unwrap(),
    });

    assert!(*evaluated.objective_value() < objective.maximum_value());
}

#[test]
fn base_value_arithmetic() {
    let five = BaseValue::Integer(5);
    let three = BaseValue::Integer(3);
    assert_eq!(five + three, BaseValue::Integer(8));
    assert_eq!(five - three, BaseValue::Integer(2));
    assert_eq!(BaseValue::Zero + five, five);
    assert_eq!(BaseValue::Maximum + five, BaseValue::Maximum);

    let sum: BaseValue = vec![five, three, BaseValue::Zero].into_iter().sum();
    assert_eq!(sum, BaseValue::Integer(8));

    assert_eq!(Coefficient::Integer(2) * three, BaseValue::Integer(6));
    assert_eq!(
        Coefficient::Float(0.5) * BaseValue::Duration(Duration::from_minutes(10.0).unwrap()),
        BaseValue::Duration(Duration::from_minutes(5.0).unwrap())
    );
}
