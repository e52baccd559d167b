//! Property-based tests for slip pricing
//!
//! Uses proptest to check behavioural properties over generated reserves
//! rather than single fixtures.

mod common;

use amm::{CompositePair, Pair, SlipMath};
use common::{amount, atk, btk, rwn};
use proptest::prelude::*;
use types::{AssetAmount, Quantity};

fn whole(units: u64) -> Quantity {
    Quantity::from(units)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_below_received_reserve(
        x in 1u64..1_000_000_000,
        reserve_in in 1u64..1_000_000_000,
        reserve_out in 1u64..1_000_000_000,
    ) {
        let out = SlipMath::calculate_output_amount(
            &whole(x),
            &whole(reserve_in),
            &whole(reserve_out),
        ).unwrap();

        prop_assert!(!out.is_negative());
        prop_assert!(out < whole(reserve_out));
        // Never more than the quarter of the pool reached at x = X
        prop_assert!(out <= SlipMath::max_output_amount(&whole(reserve_out)));
    }

    #[test]
    fn prop_output_monotonic_below_pool_depth(
        reserve_in in 1_000u64..1_000_000_000,
        reserve_out in 1u64..1_000_000_000,
        a in 1u64..1_000_000,
        b in 1u64..1_000_000,
    ) {
        // The curve rises up to x = X and falls after it
        let (small, large) = (a.min(b), a.max(b));
        prop_assume!(large <= reserve_in);

        let out_small = SlipMath::calculate_output_amount(
            &whole(small), &whole(reserve_in), &whole(reserve_out),
        ).unwrap();
        let out_large = SlipMath::calculate_output_amount(
            &whole(large), &whole(reserve_in), &whole(reserve_out),
        ).unwrap();

        prop_assert!(out_small <= out_large);
    }

    #[test]
    fn prop_output_plus_fee_is_constant_product(
        x in 1u64..1_000_000,
        reserve_in in 1u64..1_000_000,
        reserve_out in 1u64..1_000_000,
    ) {
        let (x, big_x, big_y) = (whole(x), whole(reserve_in), whole(reserve_out));
        let out = SlipMath::calculate_output_amount(&x, &big_x, &big_y).unwrap();
        let fee = SlipMath::calculate_liquidity_fee(&x, &big_x, &big_y).unwrap();

        // x*Y/(x+X), computed independently; three roundings at 10^-36
        let plain = (&x * &big_y).checked_div(&(&x + &big_x)).unwrap();
        let sum = &out + &fee;
        let tolerance = Quantity::from_raw(3u8.into());
        prop_assert!(&sum - &plain <= tolerance);
        prop_assert!(&plain - &sum <= tolerance);
    }

    #[test]
    fn prop_reverse_then_forward_recovers_output(
        reserve_in in 1_000u64..1_000_000_000,
        reserve_out in 1_000u64..1_000_000_000,
        fraction in 1u64..1_000,
    ) {
        // Desired outputs up to a quarter of the received reserve
        let big_y = whole(reserve_out);
        let y = (&big_y * &Quantity::from(fraction))
            .checked_div(&Quantity::from(4_000u64))
            .unwrap();
        let big_x = whole(reserve_in);

        let x = SlipMath::calculate_input_amount(&y, &big_x, &big_y).unwrap();
        let back = SlipMath::calculate_output_amount(&x, &big_x, &big_y).unwrap();

        prop_assert_eq!(back.round_dp(18), y.round_dp(18));
    }

    #[test]
    fn prop_composite_equals_manual_chain(
        a_depth in 1u64..1_000_000_000,
        pivot_left in 1u64..1_000_000_000,
        pivot_right in 1u64..1_000_000_000,
        b_depth in 1u64..1_000_000_000,
        sent in 1u64..1_000_000,
    ) {
        let pair1 = Pair::new(
            AssetAmount::new(atk(), whole(a_depth)),
            AssetAmount::new(rwn(), whole(pivot_left)),
        ).unwrap();
        let pair2 = Pair::new(
            AssetAmount::new(rwn(), whole(pivot_right)),
            AssetAmount::new(btk(), whole(b_depth)),
        ).unwrap();
        let composite = CompositePair::new(pair1.clone(), pair2.clone()).unwrap();

        let input = AssetAmount::new(atk(), whole(sent));
        let routed = composite.calc_swap_result(&input).unwrap();
        let chained = pair2.calc_swap_result(&pair1.calc_swap_result(&input).unwrap()).unwrap();

        prop_assert_eq!(routed, chained);
    }

    #[test]
    fn prop_pair_symbol_independent_of_order(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        let forward = Pair::new(
            AssetAmount::new(atk(), whole(a)),
            AssetAmount::new(btk(), whole(b)),
        ).unwrap();
        let backward = Pair::new(
            AssetAmount::new(btk(), whole(b)),
            AssetAmount::new(atk(), whole(a)),
        ).unwrap();

        prop_assert_eq!(forward.symbol(), backward.symbol());
        prop_assert_eq!(forward.clone(), backward.clone());
        prop_assert_eq!(
            forward.calc_swap_result(&amount(&atk(), "1")).unwrap(),
            backward.calc_swap_result(&amount(&atk(), "1")).unwrap()
        );
    }
}
