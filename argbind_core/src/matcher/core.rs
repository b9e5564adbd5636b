#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::error::ParseError;
use crate::matcher::model::*;
use crate::store::ParameterStore;
use crate::tokens::{classify, split_key_value, strip_quotes};

/// Drives the token states over a sequence of tokens, filling a [`ParameterStore`].
#[derive(Debug)]
pub(crate) struct TokenMatcher {
    option_parsing: bool,
    state: State,
    store: ParameterStore,
}

impl TokenMatcher {
    pub(crate) fn new(option_parsing: bool) -> Self {
        Self {
            option_parsing,
            state: State::Init,
            store: ParameterStore::default(),
        }
    }

    /// Run the driver loop over all the tokens, then close the matcher.
    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<ParameterStore, ParseError> {
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index].trim();

            match self.feed(token)? {
                Transition::Advance => index += 1,
                Transition::Retry => {
                    // Do nothing: the newly selected state sees the same token.
                }
                Transition::Stop => break,
            }
        }

        Ok(self.close())
    }

    /// Run the current state on a single (trimmed) token.
    pub(crate) fn feed(&mut self, token: &str) -> Result<Transition, ParseError> {
        let state = std::mem::replace(&mut self.state, State::Init);

        let (next_state, transition) = match state {
            State::Init => (State::from(classify(token)), Transition::Retry),
            State::Unnamed => {
                self.store.add_positional(strip_quotes(token));
                (State::Init, Transition::Advance)
            }
            State::Dash(dash) => self.match_dash(dash, token)?,
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{token}' moves the matcher to {next_state:?} ({transition:?}).");
        }

        self.state = next_state;
        Ok(transition)
    }

    fn match_dash(
        &mut self,
        mut dash: DashState,
        token: &str,
    ) -> Result<(State, Transition), ParseError> {
        // Second half of a `--name value` pair.
        if let Some(name) = dash.take_pending_name() {
            self.store.add_named(name, strip_quotes(token))?;
            return Ok((State::Init, Transition::Advance));
        }

        if let Some((key, value)) = split_key_value(token) {
            self.store
                .add_named(dash.strip_prefix(key), strip_quotes(value))?;
            Ok((State::Init, Transition::Advance))
        } else if self.option_parsing {
            self.store.add_option(token);
            Ok((State::Init, Transition::Advance))
        } else {
            let name = dash.strip_prefix(token).to_string();
            Ok((State::Dash(dash.await_value(name)), Transition::Advance))
        }
    }

    /// Finish matching.
    /// A name still waiting for its value is dropped.
    pub(crate) fn close(self) -> ParameterStore {
        match &self.state {
            State::Dash(dash) if dash.is_awaiting_value() => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Discarding the trailing {dash:?}: no value was supplied.");
                }
            }
            _ => {
                // Do nothing.
            }
        }

        self.store
    }
}
