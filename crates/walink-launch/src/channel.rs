use tracing::debug;
use walink_core::{MethodCall, MethodResponse, Operation};

use crate::dispatcher::Dispatcher;
use crate::opener::Opener;

impl<O: Opener> Dispatcher<O> {
    /// Answers a method call from the application layer. Unknown methods are
    /// reported as not implemented and never reach the opener.
    pub fn handle_call(&self, call: &MethodCall) -> MethodResponse {
        match Operation::from_call(call) {
            Ok(Operation::LaunchWhatsApp(request)) => MethodResponse::Success {
                result: self.dispatch_request(&request),
            },
            Err(err) => {
                debug!(method = %err.method, "method not implemented");
                err.into()
            }
        }
    }
}
