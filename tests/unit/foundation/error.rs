use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ChannelError::EmptyChannel
            .to_string()
            .contains("no samples")
    );
    assert!(
        ChannelError::Invariant("too close".into())
            .to_string()
            .contains("invariant violation")
    );
    let err = ChannelError::TypeMismatch {
        from: ValueKind::Bool,
        to: ValueKind::Float,
    };
    assert!(err.to_string().contains("Bool"));
    assert!(err.to_string().contains("Float"));
}

#[test]
fn expression_compile_error_carries_diagnostic() {
    let err = ChannelError::ExpressionCompile("unexpected token '+'".into());
    assert!(err.to_string().contains("unexpected token"));
}
