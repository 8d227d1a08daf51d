use mortgage_core::amortization::{compute_monthly_payment, generate_schedule, LoanTerms};
use mortgage_core::types::round_currency;
use mortgage_core::MortgageError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Monthly payment: known answers
// ===========================================================================

#[test]
fn test_payment_known_answers() {
    let cases = [
        (dec!(200000), dec!(3.0), 360, dec!(843.21)),
        (dec!(12000), dec!(0.0), 12, dec!(1000.00)),
        (dec!(150000), dec!(3.5), 180, dec!(1072.32)),
        (dec!(10000), dec!(5.0), 12, dec!(856.07)),
        (dec!(100000), dec!(4.25), 240, dec!(619.23)),
    ];

    for (principal, rate, months, expected) in cases {
        let payment = compute_monthly_payment(principal, rate, months).unwrap();
        assert_eq!(
            payment, expected,
            "payment for {principal} at {rate}% over {months} months"
        );
    }
}

#[test]
fn test_zero_rate_is_straight_line() {
    for (principal, months) in [
        (dec!(12000), 12),
        (dec!(1000), 3),
        (dec!(999.99), 7),
        (dec!(250000), 360),
        (dec!(0.01), 2),
    ] {
        let payment = compute_monthly_payment(principal, Decimal::ZERO, months).unwrap();
        assert_eq!(payment, round_currency(principal / Decimal::from(months)));
    }
}

#[test]
fn test_payment_rises_with_rate() {
    let mut previous = Decimal::ZERO;
    for rate in [dec!(0), dec!(1), dec!(2.5), dec!(5), dec!(10)] {
        let payment = compute_monthly_payment(dec!(100000), rate, 240).unwrap();
        assert!(payment > previous, "payment at {rate}% should exceed {previous}");
        previous = payment;
    }
}

#[test]
fn test_invalid_inputs_fail_with_invalid_argument() {
    let cases = [
        (dec!(-1), dec!(5), 12u32),
        (dec!(0), dec!(5), 12),
        (dec!(1000), dec!(-1), 12),
        (dec!(1000), dec!(5), 0),
    ];
    for (principal, rate, months) in cases {
        assert!(matches!(
            compute_monthly_payment(principal, rate, months),
            Err(MortgageError::InvalidArgument { .. })
        ));
        assert!(matches!(
            generate_schedule(principal, rate, months),
            Err(MortgageError::InvalidArgument { .. })
        ));
    }
}

// ===========================================================================
// Schedule invariants
// ===========================================================================

fn schedule_cases() -> Vec<(Decimal, Decimal, u32)> {
    vec![
        (dec!(10000), dec!(5.0), 12),
        (dec!(200000), dec!(3.0), 360),
        (dec!(150000), dec!(3.5), 180),
        (dec!(100000), dec!(4.25), 240),
        (dec!(5000), dec!(12), 24),
    ]
}

#[test]
fn test_schedule_months_are_contiguous() {
    for (principal, rate, months) in schedule_cases() {
        let plan = generate_schedule(principal, rate, months).unwrap();
        assert_eq!(plan.schedule.len(), months as usize);
        for (i, entry) in plan.schedule.iter().enumerate() {
            assert_eq!(entry.month, i as u32 + 1);
        }
    }
}

#[test]
fn test_balance_is_non_increasing_and_ends_near_zero() {
    for (principal, rate, months) in schedule_cases() {
        let plan = generate_schedule(principal, rate, months).unwrap();

        let mut previous = principal;
        for entry in &plan.schedule {
            assert!(entry.remaining_balance <= previous);
            assert!(entry.remaining_balance >= Decimal::ZERO);
            previous = entry.remaining_balance;
        }

        let tolerance = dec!(0.01) * Decimal::from(months);
        let last = plan.schedule.last().unwrap();
        assert!(
            last.remaining_balance <= tolerance,
            "final balance {} for {principal} at {rate}% over {months}",
            last.remaining_balance
        );
        assert!(plan.residual_balance().abs() <= tolerance);
    }
}

#[test]
fn test_principal_sums_to_loan_amount() {
    for (principal, rate, months) in schedule_cases() {
        let plan = generate_schedule(principal, rate, months).unwrap();
        let repaid = plan.total_principal();
        let tolerance = dec!(0.01) * Decimal::from(months);
        assert!((repaid - principal).abs() <= tolerance);
        // Every cent not repaid is the carried residual.
        assert_eq!(principal - repaid, plan.residual_balance());
    }
}

#[test]
fn test_total_interest_is_rounded_sum() {
    for (principal, rate, months) in schedule_cases() {
        let plan = generate_schedule(principal, rate, months).unwrap();
        let summed: Decimal = plan.schedule.iter().map(|e| e.interest_payment).sum();
        assert_eq!(plan.total_interest, round_currency(summed));
    }
}

#[test]
fn test_schedule_reuses_rounded_payment() {
    let plan = generate_schedule(dec!(150000), dec!(3.5), 180).unwrap();
    assert_eq!(plan.monthly_payment, dec!(1072.32));
    // Each period splits exactly the same installment.
    for entry in &plan.schedule {
        assert_eq!(entry.principal_payment + entry.interest_payment, plan.monthly_payment);
    }
}

#[test]
fn test_first_month_interest() {
    let plan = generate_schedule(dec!(10000), dec!(5.0), 12).unwrap();
    assert_eq!(plan.schedule.len(), 12);
    assert_eq!(
        plan.schedule[0].interest_payment,
        round_currency(dec!(10000) * (dec!(5.0) / dec!(100) / dec!(12)))
    );
    assert_eq!(plan.schedule[0].interest_payment, dec!(41.67));
}

#[test]
fn test_interest_share_declines() {
    let plan = generate_schedule(dec!(100000), dec!(4.25), 240).unwrap();
    let first = &plan.schedule[0];
    let last = plan.schedule.last().unwrap();
    assert!(first.interest_payment > last.interest_payment);
    assert!(first.principal_payment < last.principal_payment);
}

#[test]
fn test_terms_methods_match_free_functions() {
    let terms = LoanTerms::new(dec!(200000), dec!(3.0), 360).unwrap();
    assert_eq!(
        terms.monthly_payment().unwrap(),
        compute_monthly_payment(dec!(200000), dec!(3.0), 360).unwrap()
    );
    assert_eq!(
        terms.schedule().unwrap(),
        generate_schedule(dec!(200000), dec!(3.0), 360).unwrap()
    );
}

#[test]
fn test_concurrent_invocations_agree() {
    let expected = generate_schedule(dec!(200000), dec!(3.0), 360).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| generate_schedule(dec!(200000), dec!(3.0), 360).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
