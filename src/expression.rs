//! The *ExprEval* collaborator (spec §6) and the symbol-binding glue spec §4.6
//! describes: a compiled per-sample scalar expression that can read and rewrite a
//! value's components.
//!
//! Gated behind the `expr` Cargo feature (spec §10.3); disabling it drops this module
//! and `Channel::set_value_expression`/`test_value_expression` from the build.

use std::collections::HashMap;

use crate::foundation::error::{ChannelError, ChannelResult};
use crate::time_index::TimeFrame;
use crate::value::{Value, ValueKind};

/// `compile`/`evaluate` plus symbol rebinding, the narrow contract this crate needs
/// from a scalar expression engine.
pub trait ExprEval {
    /// Compile `src`, declaring every name in `symbols` as a settable variable
    /// (initialized to `0.0`). Returns the diagnostic text on failure.
    fn compile(&mut self, src: &str, symbols: &[&str]) -> Result<(), String>;

    /// Rebind `name`'s value ahead of the next [`ExprEval::evaluate`]. A no-op if
    /// `name` was not declared at compile time.
    fn set_symbol(&mut self, name: &str, value: f64);

    /// Evaluate the compiled expression against the currently bound symbols.
    fn evaluate(&mut self) -> Result<f64, String>;
}

/// [`ExprEval`] backed by the `meval` crate (grounded in
/// `examples/other_examples/.../ClassicMiniDIY-UltraLog/src/expression.rs`, which
/// binds named channel values into a `meval::Context` the same way this binds a
/// channel value's components).
#[derive(Default)]
pub struct MevalExpr {
    source: String,
    expr: Option<meval::Expr>,
    symbols: HashMap<String, f64>,
}

impl ExprEval for MevalExpr {
    fn compile(&mut self, src: &str, symbols: &[&str]) -> Result<(), String> {
        let expr: meval::Expr = src.parse().map_err(|e: meval::ParseError| e.to_string())?;
        self.source = src.to_string();
        self.expr = Some(expr);
        self.symbols = symbols.iter().map(|&s| (s.to_string(), 0.0)).collect();
        Ok(())
    }

    fn set_symbol(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.symbols.get_mut(name) {
            *slot = value;
        }
    }

    fn evaluate(&mut self) -> Result<f64, String> {
        let expr = self.expr.as_ref().ok_or_else(|| "no expression compiled".to_string())?;
        let mut ctx = meval::Context::new();
        for (name, value) in &self.symbols {
            ctx.var(name, *value);
        }
        expr.eval_with_context(ctx).map_err(|e| e.to_string())
    }
}

/// Names of a value's scalar components, in binding order (spec §4.6: `x, y, z, w` of
/// the value, or `value` for scalars).
fn component_symbols(kind: ValueKind) -> &'static [&'static str] {
    match kind.component_count() {
        1 => &["value"],
        2 => &["x", "y"],
        3 => &["x", "y", "z"],
        4 => &["x", "y", "z", "w"],
        _ => &[],
    }
}

/// Binds `time`, `timeIndex`, `startOffset`, `scale`, `duration` and a value's
/// component fields to a compiled [`ExprEval`], and applies it per sample.
pub struct ExpressionBinding<E: ExprEval> {
    eval: E,
    kind: ValueKind,
    source: String,
}

impl<E: ExprEval + Default> ExpressionBinding<E> {
    /// Compile `src` against `kind`'s component symbols plus the fixed time symbols.
    /// On failure the caller's previous binding (if any) is left untouched — this
    /// constructs a brand new one, so callers implementing `set_value_expression`'s
    /// "leave the previous expression intact on failure" rule keep the old `Option`
    /// around until this succeeds.
    pub fn compile(src: &str, kind: ValueKind) -> ChannelResult<Self> {
        let mut eval = E::default();
        let mut symbols: Vec<&str> = vec!["time", "timeIndex", "startOffset", "scale", "duration"];
        symbols.extend_from_slice(component_symbols(kind));
        eval.compile(src, &symbols)
            .map_err(ChannelError::ExpressionCompile)?;
        Ok(Self {
            eval,
            kind,
            source: src.to_string(),
        })
    }

    /// The source text this binding was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run the expression against `value` at time `t`/`time_index`/`frame`, writing
    /// the result back into `value`'s components in declaration order.
    pub fn apply(&mut self, value: &mut Value, t: f32, time_index: f32, frame: &TimeFrame) {
        self.eval.set_symbol("time", t as f64);
        self.eval.set_symbol("timeIndex", time_index as f64);
        self.eval.set_symbol("startOffset", frame.start_offset as f64);
        self.eval.set_symbol("scale", frame.scale as f64);
        self.eval.set_symbol("duration", frame.duration as f64);

        let names = component_symbols(self.kind);
        for (i, name) in names.iter().enumerate() {
            self.eval.set_symbol(name, self.kind.get_component(value, i));
        }
        if let Ok(result) = self.eval.evaluate() {
            // `ExprEval::evaluate` returns one f64 (spec §6's ExprEval contract has no
            // per-component output), so a vector-like kind's components all take the
            // same result — the expression can still read each component's prior value
            // back via its bound `x`/`y`/`z`/`w` symbol above.
            for i in 0..names.len() {
                self.kind.set_component(value, i, result);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/expression.rs"]
mod tests;
