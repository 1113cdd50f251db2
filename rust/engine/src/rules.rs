use crate::agent::{Action, ActionKind};
use crate::errors::EngineError;

/// What an [`Action`] turns into once the seat's stack is taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedAction {
    Fold,
    /// Pay this many chips into the pot.
    Call(u32),
    /// Pay this many chips; it becomes the new highest bet.
    Raise(u32),
    /// The seat could not cover `amount` and is folded instead.
    ForcedFold { attempted: ActionKind, amount: u32 },
}

/// Smallest total a raise may name: the current bet plus the increment.
pub fn minimum_raise_total(current_highest_bet: u32, min_raise: u32) -> u32 {
    current_highest_bet.saturating_add(min_raise)
}

/// Applies the betting rules to a seat's action.
///
/// A call costs the full `current_highest_bet`. A raise names a total that
/// is lifted to at least `current_highest_bet + min_raise`; an absent or
/// zero amount means the minimum. There is no all-in for less: a seat that
/// cannot pay the whole amount is folded.
///
/// # Examples
///
/// ```
/// use showdown_engine::agent::{Action, ActionKind};
/// use showdown_engine::rules::{resolve_action, ResolvedAction};
///
/// // A raise below the minimum is lifted to the minimum
/// let r = resolve_action(5_000, 100, 500, Action::raise_to(200));
/// assert_eq!(r, ResolvedAction::Raise(600));
///
/// // A short stack cannot call for less
/// let r = resolve_action(80, 100, 500, Action::call());
/// assert_eq!(
///     r,
///     ResolvedAction::ForcedFold { attempted: ActionKind::Call, amount: 100 }
/// );
/// ```
pub fn resolve_action(
    stack: u32,
    current_highest_bet: u32,
    min_raise: u32,
    action: Action,
) -> ResolvedAction {
    match action.kind {
        ActionKind::Fold => ResolvedAction::Fold,
        ActionKind::Call => {
            if stack < current_highest_bet {
                ResolvedAction::ForcedFold {
                    attempted: ActionKind::Call,
                    amount: current_highest_bet,
                }
            } else {
                ResolvedAction::Call(current_highest_bet)
            }
        }
        ActionKind::Raise => {
            let minimum = minimum_raise_total(current_highest_bet, min_raise);
            let desired = action
                .raise_amount
                .filter(|&a| a > 0)
                .unwrap_or(minimum)
                .max(minimum);
            if desired > stack {
                ResolvedAction::ForcedFold {
                    attempted: ActionKind::Raise,
                    amount: desired,
                }
            } else {
                ResolvedAction::Raise(desired)
            }
        }
    }
}

/// Checks a raise amount typed by a person before it is submitted.
///
/// # Errors
///
/// - [`EngineError::InvalidRaise`] when `amount` is below `min_raise`
/// - [`EngineError::RaiseExceedsStack`] when `amount` is more than the stack
///
/// ```
/// use showdown_engine::rules::validate_raise_amount;
///
/// assert_eq!(validate_raise_amount(500, 500, 1_000), Ok(500));
/// assert!(validate_raise_amount(499, 500, 1_000).is_err());
/// assert!(validate_raise_amount(1_001, 500, 1_000).is_err());
/// ```
pub fn validate_raise_amount(amount: u32, min_raise: u32, stack: u32) -> Result<u32, EngineError> {
    if amount < min_raise {
        return Err(EngineError::InvalidRaise {
            amount,
            minimum: min_raise,
        });
    }
    if amount > stack {
        return Err(EngineError::RaiseExceedsStack { amount, stack });
    }
    Ok(amount)
}
