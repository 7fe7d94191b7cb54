//! Combination control: the operator sequence folding trigger results into
//! one boolean per tick.

use crate::{BehaviorError, BehaviorResult};

/// A pairwise operator between two adjacent trigger results.
///
/// `Not` is not a unary negation: the format historically uses it as a
/// pairwise "not equal" comparison, and that reading is preserved.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombineOp {
    And,
    Or,
    Xor,
    Not,
}

/// Which fold the evaluator runs.
///
/// The default fold has a known soundness quirk: every pairwise step that
/// computes `false` aborts the whole evaluation, which is wrong for
/// `OR`/`XOR` chains of more than two operands (`A OR B OR C` with `A`
/// false and `B` true can still come out `false`).  The quirk is preserved
/// because deployed scenes depend on it; `Corrected` is the opt-in
/// left-to-right accumulator fold with no early exit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvalMode {
    #[default]
    Legacy,
    Corrected,
}

/// A compiled combination-control string.
///
/// The authored string interleaves trigger references with operator symbols,
/// e.g. `"#0&#1|#2"`.  Trigger references are positional (the digits carry
/// no information beyond their position), so compilation keeps only the
/// operator sequence: `&` → [`CombineOp::And`], `|` → [`CombineOp::Or`],
/// `^` → [`CombineOp::Xor`], `!` → [`CombineOp::Not`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combination {
    ops: Vec<CombineOp>,
}

impl Combination {
    /// Compile a control string against a behavior's trigger count.
    ///
    /// Fail-fast errors: an unrecognized operator character, or more
    /// operators than adjacent trigger pairs.  *Fewer* operators than pairs
    /// is accepted: the fold then stops at the first pair with no operator
    /// (an authoring-format quirk, kept as-is).
    pub fn parse(control: &str, trigger_count: usize) -> BehaviorResult<Self> {
        let mut ops = Vec::new();
        for c in control.chars() {
            match c {
                '#' | '0'..='9' => {}
                c if c.is_whitespace() => {}
                '&' => ops.push(CombineOp::And),
                '|' => ops.push(CombineOp::Or),
                '^' => ops.push(CombineOp::Xor),
                '!' => ops.push(CombineOp::Not),
                other => return Err(BehaviorError::UnknownOperator(other)),
            }
        }
        let max = trigger_count.saturating_sub(1);
        if ops.len() > max {
            return Err(BehaviorError::TooManyOperators {
                ops: ops.len(),
                triggers: trigger_count,
                max,
            });
        }
        Ok(Self { ops })
    }

    /// A combination built straight from an operator sequence (tests,
    /// programmatic hosts).  Same count validation as [`Combination::parse`].
    pub fn from_ops(ops: Vec<CombineOp>, trigger_count: usize) -> BehaviorResult<Self> {
        let max = trigger_count.saturating_sub(1);
        if ops.len() > max {
            return Err(BehaviorError::TooManyOperators {
                ops: ops.len(),
                triggers: trigger_count,
                max,
            });
        }
        Ok(Self { ops })
    }

    pub fn ops(&self) -> &[CombineOp] {
        &self.ops
    }

    /// Fold this tick's trigger results into one boolean.
    ///
    /// `results` is the scratch array rewritten every tick; `Legacy` mode
    /// mutates it in place for `Xor` (the toggle never leaks across ticks
    /// because the array is re-sampled before each call).
    pub fn evaluate(&self, mode: EvalMode, results: &mut [bool]) -> bool {
        match mode {
            EvalMode::Legacy => self.evaluate_legacy(results),
            EvalMode::Corrected => self.evaluate_corrected(results),
        }
    }

    /// The historical pairwise fold, quirks and all:
    ///
    /// - each operator at position `i` combines `results[i]` with
    ///   `results[i+1]`; the pairwise value does not feed forward,
    /// - a pairwise `false` aborts the whole evaluation with `false`,
    /// - a position with no operator (operators exhausted, or the last
    ///   index) returns `results[i]` as the final value.
    fn evaluate_legacy(&self, results: &mut [bool]) -> bool {
        let n = results.len();
        for i in 0..n {
            if i + 1 < n && i < self.ops.len() {
                let pair = match self.ops[i] {
                    CombineOp::And => results[i] && results[i + 1],
                    CombineOp::Or => results[i] || results[i + 1],
                    CombineOp::Xor => {
                        results[i] ^= results[i + 1];
                        results[i]
                    }
                    CombineOp::Not => results[i] != results[i + 1],
                };
                if !pair {
                    return false;
                }
            } else {
                return results[i];
            }
        }
        // Zero triggers never reaches evaluation (guarded at the behavior).
        false
    }

    /// The sound fold: a plain left-to-right accumulator with no early exit.
    fn evaluate_corrected(&self, results: &mut [bool]) -> bool {
        let Some(&first) = results.first() else {
            return false;
        };
        let mut acc = first;
        for (i, op) in self.ops.iter().enumerate() {
            let rhs = results[i + 1];
            acc = match op {
                CombineOp::And => acc && rhs,
                CombineOp::Or => acc || rhs,
                CombineOp::Xor => acc ^ rhs,
                CombineOp::Not => acc != rhs,
            };
        }
        acc
    }
}
