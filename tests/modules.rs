mod common;

use alg_dsl::*;
use common::*;

#[test]
fn linear_combination() {
    let terms = nonempty![(2.0, DoublePair(1.0, 2.0)), (-1.0, DoublePair(3.0, 4.0))];
    assert_eq!(DoublePair::linear_combination(terms), DoublePair(-1.0, 0.0));

    let terms = [(2.0, DoublePair(1.0, 2.0)), (-1.0, DoublePair(3.0, 4.0))];
    assert_eq!(DoublePair::weighted_sum(terms), DoublePair(-1.0, 0.0));
}

#[test]
fn linear_combination_of() {
    let empty: Vec<(f64, DoublePair)> = vec![];
    assert_eq!(DoublePair::linear_combination_of(empty.clone()), None);
    assert_eq!(DoublePair::weighted_sum(empty), DoublePair::zero());

    let terms = vec![(2.0, DoublePair(1.0, 2.0)), (3.0, DoublePair(4.0, 5.0))];
    assert_eq!(DoublePair::linear_combination_of(terms), Some(DoublePair(14.0, 19.0)));
}

#[test]
fn scaled_down() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logger();
    let a = DoublePair(8.0, 10.0).scaled_down(&2.0)?;
    assert_eq!(a, DoublePair(4.0, 5.0));
    assert_eq!(DoublePair(8.0, 10.0).scaled_down(&0.0), Err(DivisionByNonUnit::new()));

    let two = Unit::of(2.0).ok_or("not a unit")?;
    assert_eq!(DoublePair(8.0, 10.0).scaled_down_by_unit(&two), DoublePair(4.0, 5.0));
    Ok(())
}

#[test]
fn right_linear_combination() {
    let terms = nonempty![(DoublePair(1.0, 2.0), 2.0), (DoublePair(3.0, 4.0), -1.0)];
    assert_eq!(DoublePair::right_linear_combination(terms), DoublePair(-1.0, 0.0));

    let empty: Vec<(DoublePair, f64)> = vec![];
    assert_eq!(DoublePair::right_linear_combination_of(empty.clone()), None);
    assert_eq!(DoublePair::right_weighted_sum(empty), DoublePair::zero());
}

#[test]
fn right_scaled_down() -> Result<(), Box<dyn std::error::Error>> {
    let a = DoublePair(8.0, 10.0).right_scaled_down(&2.0)?;
    assert_eq!(a, DoublePair(4.0, 5.0));
    assert!(DoublePair(8.0, 10.0).right_scaled_down(&0.0).is_err());

    let two = Unit::of(2.0).ok_or("not a unit")?;
    assert_eq!(DoublePair(8.0, 10.0).right_scaled_down_by_unit(&two), DoublePair(4.0, 5.0));
    Ok(())
}

#[test]
fn scaled_one() {
    assert_eq!(DoublePair::scaled_one(&3.0), DoublePair(3.0, 3.0));
    assert_eq!(DoublePair::right_scaled_one(&3.0), DoublePair(3.0, 3.0));
}

#[test]
fn bimodule_compat() {
    fn both_sides<M>(x: M, r: f64, s: f64) -> (M, M)
    where M: Bimodule + LeftModule<Scalar = f64> + RightModule<Scalar = f64> + Clone {
        let a = x.clone().left_scaled(&r).right_scaled(&s);
        let b = x.right_scaled(&s).left_scaled(&r);
        (a, b)
    }

    let (a, b) = both_sides(DoublePair(1.0, -2.0), 3.0, 0.5);
    assert_eq!(a, b);
}
