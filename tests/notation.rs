use dice_notation::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn notation_strategy() -> impl Strategy<Value = String> {
    let term = prop_oneof![
        (any::<bool>(), 0..=12u32, 0..=100u32).prop_map(|(neg, count, sides)| {
            format!("{}{}d{}", if neg { "-" } else { "+" }, count, sides)
        }),
        (-50..=50i64).prop_map(|x| format!("{:+}", x)),
    ];
    prop::collection::vec(term, 1..6).prop_map(|terms| terms.concat())
}

proptest! {
    #[test]
    fn roll_stays_within_bounds(s in notation_strategy(), seed in any::<u64>()) {
        let expr = parse(&s).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 {
            let total = expr.roll_with(&mut rng);
            prop_assert!(expr.minimum() <= total && total <= expr.maximum(), "{} rolled {}", s, total);
        }
        let mean = expr.expectancy().as_float();
        prop_assert!(expr.minimum() as f64 <= mean && mean <= expr.maximum() as f64);
    }

    #[test]
    fn constants_are_fixed(c in -10_000..=10_000i64) {
        let s = c.to_string();
        prop_assert_eq!(roll(s.as_str()).unwrap(), c);
        prop_assert_eq!(expectancy(s.as_str()).unwrap(), Number::Int(c));
        prop_assert_eq!(minimum(s.as_str()).unwrap(), c);
        prop_assert_eq!(maximum(s.as_str()).unwrap(), c);
    }

    #[test]
    fn positive_dice_bounds(n in 0..=1000u32, s in 1..=1000u32) {
        let dice = DieGroup::new(Sign::Pos, n, s).unwrap();
        prop_assert_eq!(dice.minimum(), Int::from(n));
        prop_assert_eq!(dice.maximum(), Int::from(n) * Int::from(s));
    }

    #[test]
    fn render_fills_every_slot(count in 0..8usize) {
        let s = vec!["1d1"; count].join(" and ");
        let expr = parse(&format!("[{}]", s)).unwrap();
        prop_assert_eq!(expr.len(), count);
        prop_assert_eq!(expr.render(), format!("[{}]", vec!["1"; count].join(" and ")));
    }
}

#[test]
fn three_d_six_plus_two() {
    let expr = parse("3d6+2").unwrap();
    let dice = expr.terms()[0].as_dice().unwrap();
    assert_eq!((dice.sign(), dice.count(), dice.sides()), (Sign::Pos, 3, 6));
    assert_eq!(expr.terms()[1].as_constant(), Some(&Constant::new(2)));
    for _ in 0..100 {
        assert!((5..=20).contains(&roll("3d6+2").unwrap()));
    }
}

#[test]
fn negative_group() {
    let expr = parse("-1d4").unwrap();
    assert_eq!(expr.terms()[0].as_dice().map(DieGroup::sign), Some(Sign::Neg));
    assert_eq!(expr.minimum(), -4);
    assert_eq!(expr.maximum(), -1);
    assert_eq!(expr.expectancy().to_string(), "-2.5");
}

#[test]
fn expectancy_is_exact() {
    assert_eq!(expectancy("2d6").unwrap(), Number::Int(7));
    assert!(expectancy("2d6").unwrap().is_int());
    assert_eq!(expectancy("1d4").unwrap(), Number::Half(5));
    assert!(!expectancy("1d4").unwrap().is_int());
}

#[test]
fn height_and_weight_modifiers() {
    let height = parse("4'10\" +2d12").unwrap();
    assert_eq!(height.len(), 3);
    assert_eq!(height.template().to_string(), "{}'{}\" {}");
    let rendered = height.render_with(&mut StdRng::seed_from_u64(1));
    assert!(rendered.starts_with("4'10\" "));
    assert!(!rendered.contains('+'));

    assert_eq!(expectancy("2d6").unwrap().as_int(), Some(7));
    assert_eq!(minimum("2d12").unwrap(), 2);
}

#[test]
fn malformed_notation() {
    assert_eq!(parse("").unwrap_err().kind, ParseErrorKind::Empty);
    assert_eq!(parse("3d + 1").unwrap_err().kind, ParseErrorKind::MissingSides);
    assert!(roll("  ").is_err());
}

#[test]
fn zero_terms_render_unchanged() {
    let expr = parse("nothing to roll").unwrap();
    assert_eq!(expr.render(), "nothing to roll");
    assert_eq!(expr.expectancy(), Number::ZERO);
}

#[test]
fn signed_terms_render_as_values() {
    assert_eq!(parse("+5").unwrap().render(), "5");
    assert_eq!(parse("-5").unwrap().render(), "-5");
    assert_eq!(parse("+1d1").unwrap().render(), "1");
}

#[test]
fn totals_at_int_limits() {
    let expr = parse("9223372036854775806 + 1").unwrap();
    assert_eq!(expr.maximum(), Int::MAX);
    assert_eq!(expr.roll(), Int::MAX);
    assert_eq!(expr.expectancy(), Number::Int(Int::MAX));

    let expr = parse("-9223372036854775807 - 1").unwrap();
    assert_eq!(expr.minimum(), Int::MIN);
    assert_eq!(expr.roll(), Int::MIN);
}

#[test]
fn totals_past_int_limits_are_rejected() {
    assert_eq!(parse("9223372036854775807+1").unwrap_err().kind, ParseErrorKind::OutOfRange);
    assert_eq!(minimum("-9223372036854775808 -1").unwrap_err().kind, ParseErrorKind::OutOfRange);
    assert_eq!(roll("9223372036854775807 + 1d6").unwrap_err().kind, ParseErrorKind::OutOfRange);
    assert_eq!(
        expectancy("5000000000000000000 + 1d2").unwrap_err().kind,
        ParseErrorKind::OutOfRange
    );
    assert_eq!(
        maximum("4294967295d2000000000 + 4294967295d2000000000").unwrap_err().kind,
        ParseErrorKind::OutOfRange
    );
}
