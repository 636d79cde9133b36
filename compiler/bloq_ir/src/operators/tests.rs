use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_operator_in_exactly_one_tier() {
    for op in ArithmeticOp::ALL {
        let tiers = PRECEDENCE_TIERS
            .iter()
            .filter(|tier| tier.contains(&op))
            .count();
        assert_eq!(tiers, 1, "{op:?} must belong to exactly one tier");
    }
}

#[test]
fn tiers_cover_all_operators() {
    let total: usize = PRECEDENCE_TIERS.iter().map(|tier| tier.len()).sum();
    assert_eq!(total, ArithmeticOp::ALL.len());
}

#[test]
fn precedence_ordering() {
    use ArithmeticOp as Op;

    assert!(Op::Pipe.precedence() < Op::Or.precedence());
    assert!(Op::Or.precedence() < Op::And.precedence());
    assert!(Op::And.precedence() < Op::Eq.precedence());
    assert!(Op::Eq.precedence() < Op::Add.precedence());
    assert!(Op::Add.precedence() < Op::Mul.precedence());

    assert_eq!(Op::Eq.precedence(), Op::Lte.precedence());
    assert_eq!(Op::Add.precedence(), Op::Sub.precedence());
    assert_eq!(Op::Mul.precedence(), Op::Mod.precedence());
    assert_eq!(Op::Div.precedence(), PRECEDENCE_TIERS.len() - 1);
}

#[test]
fn lazy_operators() {
    let lazy: Vec<_> = ArithmeticOp::ALL
        .into_iter()
        .filter(|op| op.is_lazy())
        .collect();
    assert_eq!(
        lazy,
        vec![ArithmeticOp::And, ArithmeticOp::Or, ArithmeticOp::Pipe]
    );
}

#[test]
fn display_uses_symbol() {
    assert_eq!(ArithmeticOp::Gte.to_string(), ">=");
    assert_eq!(ArithmeticOp::Pipe.to_string(), "|");
    assert_eq!(format!("{}", ArithmeticOp::And), "&&");
}
