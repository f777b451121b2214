//! Calculator engine: owns the state and tells subscribers when it changes
//!
//! Visual feedback: any frontend (terminal, web view, test driver) reads
//! `state()` once and then re-renders from the subscriber callback.

use std::fmt;

use super::operations::{Digit, Input, Operator};
use super::state::CalculatorState;

/// Handle returned by [`CalculatorEngine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&CalculatorState)>;

/// The calculator: one state, mutated only through the keypad operations
pub struct CalculatorEngine {
    state: CalculatorState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(CalculatorState::new())
    }

    /// Creates an engine resuming from a given state
    #[must_use]
    pub fn with_state(state: CalculatorState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the equation trace
    #[must_use]
    pub fn equation(&self) -> &str {
        self.state.equation()
    }

    /// Returns whether this operator's button should be highlighted
    #[must_use]
    pub fn is_operator_active(&self, op: Operator) -> bool {
        self.state.is_operator_active(op)
    }

    /// Returns the highlighted operator, if any
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| self.state.is_operator_active(*op))
    }

    /// Registers a callback run after every state change
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&CalculatorState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        tracing::trace!(?id, "subscriber added");
        id
    }

    /// Removes a subscriber; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Returns the number of active subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Enters a digit
    pub fn input_digit(&mut self, digit: Digit) -> &CalculatorState {
        self.dispatch(Input::Digit(digit))
    }

    /// Enters a decimal point
    pub fn input_decimal(&mut self) -> &CalculatorState {
        self.dispatch(Input::Decimal)
    }

    /// Chooses an operator
    pub fn perform_operation(&mut self, op: Operator) -> &CalculatorState {
        self.dispatch(Input::Operator(op))
    }

    /// Finishes the pending operation
    pub fn handle_equals(&mut self) -> &CalculatorState {
        self.dispatch(Input::Equals)
    }

    /// Drops the last displayed character
    pub fn handle_backspace(&mut self) -> &CalculatorState {
        self.dispatch(Input::Backspace)
    }

    /// Resets to the initial state
    pub fn clear_display(&mut self) -> &CalculatorState {
        self.dispatch(Input::Clear)
    }

    /// Applies one input and returns the resulting state
    ///
    /// Subscribers run only when the state actually changed.
    pub fn dispatch(&mut self, input: Input) -> &CalculatorState {
        let next = self.state.clone().apply(input);
        if next == self.state {
            tracing::trace!(?input, "no-op input");
            return &self.state;
        }

        tracing::debug!(
            ?input,
            display = next.display(),
            equation = next.equation(),
            "state transition"
        );
        self.state = next;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
        &self.state
    }
}
