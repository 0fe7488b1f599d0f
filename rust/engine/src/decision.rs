use crate::action::Action;
use crate::errors::ActionError;
use crate::state::TurnView;

/// Source of decisions for one seat: a human at a terminal or an automated
/// strategy.
///
/// Implementations should only return actions whose kind is in
/// `view.available`. The engine still validates every action, so a provider
/// that gets it wrong is told via [`DecisionProvider::on_rejected`] and asked
/// again.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_engine::action::{Action, ActionKind};
/// use holdem_engine::decision::DecisionProvider;
/// use holdem_engine::state::TurnView;
///
/// struct AlwaysCheck;
///
/// impl DecisionProvider for AlwaysCheck {
///     fn get_action(&mut self, view: &TurnView) -> Action {
///         if view.can(ActionKind::Check) {
///             Action::Check
///         } else if view.can(ActionKind::Reveal) {
///             Action::Reveal
///         } else {
///             Action::Fold
///         }
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysCheck"
///     }
/// }
/// ```
pub trait DecisionProvider {
    fn get_action(&mut self, view: &TurnView) -> Action;

    fn name(&self) -> &str;

    /// Called when the engine rejected the last action for this seat.
    fn on_rejected(&mut self, _view: &TurnView, _error: &ActionError) {}
}
