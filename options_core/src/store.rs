use crate::action::OptionsAction;
use crate::error::OptionsError;
use crate::reducer::reduce;
use crate::state::OptionsState;

/// Owns the one live [`OptionsState`]. Consumers get it by reference or via
/// the [`crate::MainLoop`] that wraps it; there is no global instance.
#[derive(Debug, Default)]
pub struct OptionsStore {
    state: OptionsState,
    revision: u64,
}

impl OptionsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: OptionsState) -> Self {
        Self { state, revision: 0 }
    }

    pub fn from_json(raw: &str) -> Result<Self, OptionsError> {
        let state = serde_json::from_str(raw).map_err(OptionsError::DecodeState)?;
        Ok(Self::with_state(state))
    }

    pub fn state(&self) -> &OptionsState {
        &self.state
    }

    /// Number of actions applied since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one action. The next state is built off to the side and
    /// swapped in whole.
    pub fn dispatch(&mut self, action: OptionsAction) -> &OptionsState {
        let name = action.name();
        self.state = reduce(&self.state, action);
        self.revision += 1;
        tracing::debug!(action = name, revision = self.revision, "options updated");
        &self.state
    }

    pub fn dispatch_json(&mut self, raw: &str) -> Result<&OptionsState, OptionsError> {
        let action: OptionsAction = serde_json::from_str(raw).map_err(OptionsError::DecodeAction)?;
        Ok(self.dispatch(action))
    }

    pub fn to_json(&self) -> Result<String, OptionsError> {
        serde_json::to_string(&self.state).map_err(OptionsError::Encode)
    }

    pub fn to_json_pretty(&self) -> Result<String, OptionsError> {
        serde_json::to_string_pretty(&self.state).map_err(OptionsError::Encode)
    }
}
