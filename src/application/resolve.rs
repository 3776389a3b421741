//! Choosing the action for a service invocation.

use crate::domain::error::DispatchError;
use crate::domain::registry::{ActionDef, ServiceDef};

/// Action picked for one invocation plus the arguments it receives.
#[derive(Debug, Clone)]
pub struct ResolvedAction<'r> {
    pub name: &'static str,
    pub action: &'r ActionDef,
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Resolution<'r> {
    Action(ResolvedAction<'r>),
    /// No action token and no default; the caller prints service help.
    ShowHelp,
}

/// Resolve the action from the positional tokens that follow the service
/// name.
///
/// A known action name in first position wins and the remaining tokens become
/// its arguments. Otherwise a service with a default action receives every
/// token, including the one that was not an action name.
pub fn resolve<'r>(
    service: &'r ServiceDef,
    tokens: &[String],
) -> Result<Resolution<'r>, DispatchError> {
    let candidate = tokens
        .first()
        .map(String::as_str)
        .filter(|token| !token.is_empty());

    if let Some(action) = candidate.and_then(|name| service.action(name)) {
        return Ok(Resolution::Action(ResolvedAction {
            name: action.name,
            action,
            args: tokens[1..].to_vec(),
        }));
    }

    if let Some(action) = service.default() {
        return Ok(Resolution::Action(ResolvedAction {
            name: action.name,
            action,
            args: tokens.to_vec(),
        }));
    }

    match candidate {
        Some(name) => Err(DispatchError::unknown_action(service.name, name)),
        None => Ok(Resolution::ShowHelp),
    }
}
