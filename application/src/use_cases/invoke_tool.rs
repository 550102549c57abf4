//! Invoke tool use case
//!
//! Thin wrapper around [`ToolRegistry::invoke`] that adds logging. Failures
//! stay data: the use case returns the [`InvocationResult`] as is.

use std::sync::Arc;
use toolforge_domain::{InvocationResult, ToolCall, ToolRegistry};
use tracing::{debug, info, warn};

/// Use case for invoking a registered tool.
#[derive(Debug, Clone)]
pub struct InvokeToolUseCase {
    registry: Arc<ToolRegistry>,
}

impl InvokeToolUseCase {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(&self, call: &ToolCall) -> InvocationResult {
        debug!(
            tool = %call.tool_name,
            positional = call.positional.len(),
            named = call.named.len(),
            "Invoking tool"
        );

        let result = self.registry.invoke(call);
        match &result {
            InvocationResult::Ok(_) => info!(tool = %call.tool_name, "Tool invocation succeeded"),
            InvocationResult::Fail(failure) => warn!(
                tool = %call.tool_name,
                kind = %failure.kind,
                details = ?failure.details,
                "Tool invocation failed"
            ),
        }
        result
    }
}
