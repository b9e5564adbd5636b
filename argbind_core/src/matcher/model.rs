use crate::model::{Prefix, TokenClass};

/// What the driver loop does after a state has run on a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Consume the token and move to the next one.
    Advance,
    /// Run the (newly selected) state on the same token.
    Retry,
    /// Terminate parsing.
    // Reserved for an end-of-options marker; no state emits it yet.
    #[allow(dead_code)]
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum State {
    Init,
    Unnamed,
    Dash(DashState),
}

impl From<TokenClass> for State {
    fn from(value: TokenClass) -> Self {
        match value {
            TokenClass::Named(prefix) => State::Dash(DashState::new(prefix)),
            TokenClass::Positional => State::Unnamed,
        }
    }
}

/// The dash state, possibly holding the name of a `--name value` pair across two tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DashState {
    prefix: Prefix,
    pending_name: Option<String>,
}

impl DashState {
    pub(crate) fn new(prefix: Prefix) -> Self {
        Self {
            prefix,
            pending_name: None,
        }
    }

    pub(crate) fn is_awaiting_value(&self) -> bool {
        self.pending_name.is_some()
    }

    pub(crate) fn await_value(self, name: impl Into<String>) -> Self {
        Self {
            prefix: self.prefix,
            pending_name: Some(name.into()),
        }
    }

    pub(crate) fn take_pending_name(&mut self) -> Option<String> {
        self.pending_name.take()
    }

    /// Remove this state's prefix from a token.
    pub(crate) fn strip_prefix<'t>(&self, token: &'t str) -> &'t str {
        token.strip_prefix(self.prefix.as_str()).unwrap_or(token)
    }
}
