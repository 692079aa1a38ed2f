use proptest::prelude::*;
use verdict::{
    check_almost_equal, check_almost_equal_places, check_equal, check_greater_than,
    check_greater_than_or_equal, check_in, check_less_than, check_less_than_or_equal,
    check_length, check_not_equal, check_not_in, round_to_places,
};

#[test]
fn tolerance_examples() {
    check_almost_equal_places(1.0, 1.0000001, 5).unwrap();
    assert!(check_almost_equal_places(1.0, 1.1, 5).is_err());
    check_almost_equal(0.1 + 0.2, 0.3).unwrap();
    check_almost_equal(1_u8, 1.0_f32).unwrap();

    let failure = check_almost_equal(1.0, 1.001).unwrap_err();
    assert_eq!(failure.message(), "1.001 is not almost equal to 1.0");
    assert_eq!(failure.info().context["places"], "7");
}

#[test]
fn negative_places_round_to_tens() {
    check_almost_equal_places(100.0, 104.0, -1).unwrap();
    assert!(check_almost_equal_places(100.0, 116.0, -1).is_err());
    assert_eq!(round_to_places(25.0, -1), 20.0);
    assert_eq!(round_to_places(0.125, 2), 0.12);
    assert!(round_to_places(f64::NAN, 3).is_nan());
}

#[test]
fn integer_operands_of_any_width() {
    let items = vec!['a', 'b', 'c'];
    check_almost_equal(10_i64, 10_i64).unwrap();
    check_almost_equal(items.len(), 3_usize).unwrap();
    check_almost_equal(3_u64, 3.00000001).unwrap();
    check_almost_equal_places(-7_i128, -7.4_f32, 0).unwrap();
    assert!(check_almost_equal(u64::MAX, 0_u64).is_err());
    verdict::assert_almost_equal(&2_isize, &2.0);
}

#[test]
fn ties_round_on_the_scaled_product() {
    assert_eq!(round_to_places(5.0000000000000004e-08, 7), 0.0);
    check_almost_equal_places(5.0000000000000004e-08, 0.0, 7).unwrap();
}

#[test]
#[should_panic(expected = "is not almost equal to")]
fn assert_almost_equal_panics() {
    verdict::assert_almost_equal(2.0, 2.5);
}

proptest! {
    #[test]
    fn equality_is_reflexive(value in any::<i64>(), text in ".*") {
        prop_assert!(check_equal(value, value).is_ok());
        prop_assert!(check_not_equal(value, value).is_err());
        prop_assert!(check_equal(text.as_str(), text.as_str()).is_ok());
    }

    #[test]
    fn unequal_values_name_both(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let failure = check_equal(a, b).unwrap_err();
        prop_assert!(failure.message().contains(&a.to_string()));
        prop_assert!(failure.message().contains(&b.to_string()));
    }

    #[test]
    fn checks_are_idempotent(items in proptest::collection::vec(any::<u8>(), 0..16), probe in any::<u8>()) {
        let first = check_in(&probe, &items).is_ok();
        let second = check_in(&probe, &items).is_ok();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, check_not_in(&probe, &items).is_err());
        prop_assert!(check_length(items.len(), &items).is_ok());
        prop_assert!(check_length(items.len() + 1, &items).is_err());
    }

    #[test]
    fn ordering_duality(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(check_greater_than(a, b).is_ok(), check_less_than(b, a).is_ok());
        prop_assert_eq!(
            check_greater_than_or_equal(a, b).is_ok(),
            check_less_than(a, b).is_err()
        );
        prop_assert_eq!(
            check_less_than_or_equal(a, b).is_ok(),
            check_greater_than(a, b).is_err()
        );
    }

    #[test]
    fn tolerance_accepts_tiny_offsets(base in -1.0e6f64..1.0e6, places in 0i32..6) {
        let offset = 10f64.powi(-(places + 2));
        prop_assert!(check_almost_equal_places(base, base, places).is_ok());
        prop_assert!(check_almost_equal_places(base, base + offset, places).is_ok());
        prop_assert!(check_almost_equal_places(base, base + 1.0, places).is_err());
    }
}
