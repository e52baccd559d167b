//! Native Precision Tests
//!
//! Amounts keep every digit internally and render at their asset's own
//! width: 18 decimals for ROWAN-style coins, 6 for USDC-style tokens.

use rust_decimal_macros::dec;
use types::{Asset, AssetAmount, AssetError, Network, Quantity};

fn rowan() -> Asset {
    Asset::coin("rowan", "Rowan", 18, Network::Sifchain).unwrap()
}

fn usdc() -> Asset {
    Asset::token(
        "usdc",
        "USD Coin",
        6,
        Network::Ethereum,
        "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
    )
    .unwrap()
}

#[test]
fn test_render_at_native_width() {
    assert_eq!(
        AssetAmount::parse(rowan(), "1").unwrap().to_string(),
        "1.000000000000000000 ROWAN"
    );
    assert_eq!(
        AssetAmount::parse(usdc(), "1").unwrap().to_string(),
        "1.000000 USDC"
    );
    assert_eq!(AssetAmount::zero(usdc()).to_fixed(), "0.000000");
}

#[test]
fn test_render_rounds_half_even_beyond_width() {
    let render = |literal| AssetAmount::parse(usdc(), literal).unwrap().to_fixed();

    assert_eq!(render("0.0000005"), "0.000000");
    assert_eq!(render("0.0000015"), "0.000002");
    assert_eq!(render("0.00000150001"), "0.000002");
    assert_eq!(render("123.4567894999"), "123.456789");
}

#[test]
fn test_repeated_renders_are_stable() {
    let amount = AssetAmount::parse(usdc(), "0.826446280991735537190082644628099174").unwrap();
    let first = amount.to_string();
    for _ in 0..3 {
        assert_eq!(amount.to_string(), first);
    }
    assert_eq!(first, "0.826446 USDC");
}

#[test]
fn test_base_units_from_chain_queries() {
    let one_wei = AssetAmount::from_base_units(rowan(), 1u64).unwrap();
    assert_eq!(one_wei.to_fixed(), "0.000000000000000001");

    let one_cent = AssetAmount::from_base_units(usdc(), 10_000u64).unwrap();
    assert_eq!(one_cent.to_string(), "0.010000 USDC");
    assert_eq!(one_cent.to_base_units().to_string(), "10000");

    let precise = AssetAmount::from_base_units(rowan(), 1_234_567_890_123_456_789u64).unwrap();
    assert_eq!(precise.to_fixed(), "1.234567890123456789");
    assert_eq!(precise.to_base_units().to_string(), "1234567890123456789");
}

#[test]
fn test_mixed_asset_arithmetic_rejected() {
    let rowan = AssetAmount::parse(rowan(), "1").unwrap();
    let usdc = AssetAmount::parse(usdc(), "1").unwrap();

    let err = rowan.add(&usdc).unwrap_err();
    assert_eq!(
        err,
        AssetError::MismatchedAsset {
            left: "sifchain:rowan".to_string(),
            right: "ethereum:0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
        }
    );
    assert!(rowan.subtract(&usdc).is_err());
    assert!(rowan.try_cmp(&usdc).is_err());
    assert_eq!(rowan.partial_cmp(&usdc), None);
}

#[test]
fn test_same_asset_arithmetic() {
    let a = AssetAmount::parse(usdc(), "10.5").unwrap();
    let b = AssetAmount::parse(usdc(), "0.25").unwrap();

    assert_eq!(a.add(&b).unwrap().to_fixed(), "10.750000");
    assert_eq!(a.subtract(&b).unwrap().to_fixed(), "10.250000");
    assert_eq!(a.multiply(&"3".parse().unwrap()).to_fixed(), "31.500000");
    assert_eq!(
        a.divide(&"3".parse().unwrap()).unwrap().amount().to_string(),
        "3.5"
    );
    assert_eq!(a.divide(&Quantity::zero()), Err(AssetError::DivisionByZero));
    assert!(b < a);
}

#[test]
fn test_decimal_boundary() {
    // Decimal keeps at most 28 fractional digits
    let third = Quantity::one().checked_div(&Quantity::from(3u64)).unwrap();
    assert_eq!(third.to_decimal(), Some(dec!(0.3333333333333333333333333333)));

    let usd = Quantity::from(dec!(1234.56));
    assert_eq!(AssetAmount::new(usdc(), usd).to_string(), "1234.560000 USDC");

    // Beyond Decimal's 96-bit mantissa there is nothing to return
    let huge: Quantity = "100000000000000000000000000000".parse().unwrap();
    assert_eq!(huge.to_decimal(), None);
}

#[test]
fn test_literals_parse_exactly() {
    assert_eq!(
        "0.1".parse::<Quantity>().unwrap() + "0.2".parse::<Quantity>().unwrap(),
        "0.3".parse::<Quantity>().unwrap()
    );
    assert!(matches!(
        "1e18".parse::<Quantity>(),
        Err(AssetError::InvalidAmount { .. })
    ));
    assert!(matches!(
        "0.0000000000000000000000000000000000001".parse::<Quantity>(),
        Err(AssetError::PrecisionLoss { .. })
    ));
}
