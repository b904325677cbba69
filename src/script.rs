//! Compact action scripts for headless replay.
//!
//! A script is a comma-separated list of tokens: `N` plays cell `N`,
//! `@N` jumps to step `N`, `~` toggles the move-list order. `N` is plain
//! decimal digits with no sign. Whitespace around tokens is ignored, so
//! `4, 0, 8, @1, 2, ~` is valid.

use crate::games::tictactoe::{GameAction, GameEngine, JumpError, MoveOutcome};
use derive_more::{Display, Error, From};
use tracing::{info, instrument, warn};

/// Error parsing or running a script.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ScriptError {
    /// A token is neither a cell, a jump nor `~`.
    #[display("Invalid token {token:?} at position {index}")]
    #[from(ignore)]
    InvalidToken {
        /// The offending token.
        token: String,
        /// Zero-based token position in the script.
        index: usize,
    },
    /// A jump named a step that is not in history.
    #[display("{_0}")]
    Jump(JumpError),
}

/// Parses a script into actions.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<GameAction>, ScriptError> {
    script
        .split(',')
        .map(str::trim)
        .enumerate()
        .filter(|(_, token)| !token.is_empty())
        .map(|(index, token)| parse_token(token).ok_or_else(|| ScriptError::InvalidToken {
            token: token.to_string(),
            index,
        }))
        .collect()
}

fn parse_token(token: &str) -> Option<GameAction> {
    if token == "~" {
        return Some(GameAction::ToggleOrder);
    }
    if let Some(step) = token.strip_prefix('@') {
        return parse_number(step).map(|step| GameAction::JumpTo { step });
    }
    parse_number(token).map(|cell| GameAction::Play { cell })
}

/// Digits only: `usize::from_str` alone would also take a leading `+`.
fn parse_number(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Applies `actions` in order, stopping at the first failed jump.
///
/// Ignored moves are logged and skipped.
#[instrument(skip(engine, actions), fields(count = actions.len()))]
pub fn run_script(engine: &mut GameEngine, actions: &[GameAction]) -> Result<(), ScriptError> {
    for action in actions {
        match engine.apply(*action)? {
            Some(MoveOutcome::Ignored(reason)) => warn!(%action, %reason, "Scripted move ignored"),
            Some(outcome) => info!(%action, %outcome, "Scripted move played"),
            None => info!(%action, "Scripted action applied"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_token_kinds() {
        let actions = parse_script("4, 0,@1 ,~,8").unwrap();
        assert_eq!(
            actions,
            vec![
                GameAction::Play { cell: 4 },
                GameAction::Play { cell: 0 },
                GameAction::JumpTo { step: 1 },
                GameAction::ToggleOrder,
                GameAction::Play { cell: 8 },
            ]
        );
    }

    #[test]
    fn test_empty_script_is_empty() {
        assert_eq!(parse_script("").unwrap(), vec![]);
        assert_eq!(parse_script(" , ").unwrap(), vec![]);
    }

    #[test]
    fn test_invalid_token_reports_position() {
        let err = parse_script("4,x,2").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidToken {
                token: "x".to_string(),
                index: 1
            }
        );
        assert!(parse_script("@").is_err());
        assert!(parse_script("-1").is_err());
    }

    #[test]
    fn test_signed_numbers_are_rejected() {
        assert_eq!(
            parse_script("+4"),
            Err(ScriptError::InvalidToken {
                token: "+4".to_string(),
                index: 0
            })
        );
        assert!(parse_script("0,@+1").is_err());
        assert!(parse_script("@ 1").is_err());
    }

    #[test]
    fn test_run_script_stops_on_bad_jump() {
        let mut engine = GameEngine::new();
        let actions = parse_script("4,@5,0").unwrap();
        let err = run_script(&mut engine, &actions).unwrap_err();
        assert_eq!(err, ScriptError::Jump(JumpError { step: 5, len: 2 }));
        assert_eq!(engine.history().len(), 2);
    }
}
