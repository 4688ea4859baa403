//! Invocation validation.
//!
//! Runs before any handler, so a malformed invocation has no effect on
//! state.

use crate::error::{ContractError, ContractResult};
use crate::operation::Operation;

/// Check that `args` has exactly the operation's arity.
pub fn validate_arguments(operation: Operation, args: &[String]) -> ContractResult<()> {
    if args.len() != operation.arity() {
        return Err(ContractError::ArgumentCount {
            operation,
            expected: operation.arity(),
            got: args.len(),
        });
    }
    Ok(())
}
