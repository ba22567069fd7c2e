use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_literal_signatures_follow_value_kind() {
    assert_eq!(
        Operation::Literal(Literal::Five).signature().result,
        ResultKind::Scalar
    );
    assert_eq!(
        Operation::Literal(Literal::UnitY).signature().result,
        ResultKind::Vector
    );
    assert_eq!(Operation::Literal(Literal::Pi).arity(), 0);
}

#[test]
fn test_write_field_constraint_matches_catalog_kind() {
    assert_eq!(
        Operation::WriteField(FieldId::Heat).signature().operands,
        &[KindConstraint::Scalar]
    );
    assert_eq!(
        Operation::WriteField(FieldId::Gravity).signature().operands,
        &[KindConstraint::Vector]
    );
    assert_eq!(
        Operation::WriteField(FieldId::Gravity).signature().result,
        ResultKind::None
    );
}

#[test]
fn test_arities() {
    assert_eq!(Operation::Sign.arity(), 1);
    assert_eq!(Operation::Cross.arity(), 2);
    assert_eq!(Operation::Compose.arity(), 3);
    assert_eq!(Operation::Rotate.arity(), 3);
    assert_eq!(Operation::Derivative.arity(), 3);
    assert_eq!(
        Operation::Derivative.signature().operands.last(),
        Some(&KindConstraint::Scalar)
    );
    assert_eq!(Operation::VectorVar.arity(), 0);
    assert_eq!(Operation::Slot.arity(), 1);
}

#[test]
fn test_field_reference() {
    assert_eq!(
        Operation::ReadField(FieldId::Elevation).field(),
        Some(FieldId::Elevation)
    );
    assert_eq!(Operation::Add.field(), None);
}

#[test]
fn test_clear_is_not_etchable() {
    assert!(!Operation::Clear.is_etchable());
    assert!(Operation::WriteField(FieldId::Force).is_etchable());
}

#[test]
fn test_display_names() {
    assert_eq!(Operation::Literal(Literal::UnitX).to_string(), "Unit X");
    assert_eq!(Operation::VectorVar.to_string(), "Vector Var");
    assert_eq!(Operation::Axis(Axis::Z).to_string(), "Axis Z");
    assert_eq!(Operation::WriteField(FieldId::Gravity).to_string(), "Write Gravity");
}
