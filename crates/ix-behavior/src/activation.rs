//! The six-state activation machine.

use ix_core::ActivationControl;

/// Turns the per-tick combination result into an edge/level symbol.
///
/// | This tick | Last tick | History              | Symbol        |
/// |-----------|-----------|----------------------|---------------|
/// | `true`    | —         | never entered before | `FirstEnter`  |
/// | `true`    | `false`   | entered before       | `EachEnter`   |
/// | `true`    | `true`    |                      | `ActiveOn`    |
/// | `false`   | `true`    | never exited before  | `FirstExit`   |
/// | `false`   | `true`    | exited before        | `EachExit`    |
/// | `false`   | `false`   |                      | `Off`         |
///
/// `FirstEnter`/`FirstExit` latch: the history flags are monotonic and
/// never reset for the machine's lifetime.  The previous-tick result is
/// updated on every step regardless of which symbol came out.
#[derive(Debug, Default)]
pub struct ActivationMachine {
    last_result:      bool,
    has_ever_entered: bool,
    has_ever_exited:  bool,
}

impl ActivationMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this tick's combination result and produce the symbol.
    pub fn step(&mut self, result: bool) -> ActivationControl {
        let state = if result {
            if !self.has_ever_entered {
                self.has_ever_entered = true;
                ActivationControl::FirstEnter
            } else if !self.last_result {
                ActivationControl::EachEnter
            } else {
                ActivationControl::ActiveOn
            }
        } else if self.last_result {
            if !self.has_ever_exited {
                self.has_ever_exited = true;
                ActivationControl::FirstExit
            } else {
                ActivationControl::EachExit
            }
        } else {
            ActivationControl::Off
        };
        self.last_result = result;
        state
    }

    /// The combination result the machine saw on the previous step.
    pub fn last_result(&self) -> bool {
        self.last_result
    }

    pub fn has_ever_entered(&self) -> bool {
        self.has_ever_entered
    }

    pub fn has_ever_exited(&self) -> bool {
        self.has_ever_exited
    }
}
