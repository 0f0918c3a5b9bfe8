// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kudibook::ledger::invoices::calculate_vat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn vat_standard_rate_example() {
    let v = calculate_vat(dec!(10000), dec!(7.5));
    assert_eq!(v.vat_amount, dec!(750));
    assert_eq!(v.total, dec!(10750));
}

#[test]
fn vat_zero_rate_and_zero_amount() {
    let v = calculate_vat(dec!(5000), Decimal::ZERO);
    assert_eq!(v.vat_amount, Decimal::ZERO);
    assert_eq!(v.total, dec!(5000));

    let v = calculate_vat(Decimal::ZERO, dec!(7.5));
    assert_eq!(v.vat_amount, Decimal::ZERO);
    assert_eq!(v.total, Decimal::ZERO);
}

#[test]
fn vat_identity_holds_across_grid() {
    // total = amount + vatAmount and vatAmount = round2(amount * rate / 100)
    // for a spread of non-negative inputs.
    for amount in [dec!(0.01), dec!(1), dec!(99.99), dec!(10000), dec!(123456.78)] {
        for rate in [dec!(0), dec!(5), dec!(7.5), dec!(20), dec!(27.5)] {
            let v = calculate_vat(amount, rate);
            let expected = (amount * rate / dec!(100)).round_dp(2);
            assert_eq!(v.vat_amount, expected, "amount={} rate={}", amount, rate);
            assert_eq!(v.total, amount + v.vat_amount);
        }
    }
}

#[test]
fn vat_rounds_to_two_places() {
    // 33.33 * 7.5% = 2.49975 -> 2.50
    let v = calculate_vat(dec!(33.33), dec!(7.5));
    assert_eq!(v.vat_amount, dec!(2.50));
    assert_eq!(v.total, dec!(35.83));
}
