use std::sync::Arc;

use crate::error::Result;
use crate::request::Request;
use crate::service::{ExecutionResult, Operation, Response, Service};

/// Ordered multi-stage callback every dispatch hook implements.
///
/// Every stage defaults to pass-through, so a hook overrides only the
/// stages it cares about. Stage values are threaded hook to hook: each
/// hook receives the value the previous hook returned and may substitute
/// it or hand it back unchanged. Returning `Err` aborts the remaining
/// stages for the request; `finished` still runs.
///
/// Hooks are shared singletons invoked concurrently across requests, so
/// per-request state must flow through parameters, never instance fields.
pub trait DispatchHook: Send + Sync {
    /// Called before routing begins. May rewrite the request in place.
    fn init(&self, _request: &mut Request) -> Result<()> {
        Ok(())
    }

    /// Called once per request after a service has been resolved.
    fn service_dispatched(&self, _request: &Request, service: Service) -> Result<Service> {
        Ok(service)
    }

    /// Called after an operation within the service has been resolved.
    fn operation_dispatched(&self, _request: &Request, operation: Operation) -> Result<Operation> {
        Ok(operation)
    }

    /// Called after the operation has executed.
    fn operation_executed(
        &self,
        _request: &Request,
        _operation: &Operation,
        result: ExecutionResult,
    ) -> Result<ExecutionResult> {
        Ok(result)
    }

    /// Called once the wire-level response has been built.
    fn response_dispatched(
        &self,
        _request: &Request,
        _operation: &Operation,
        _result: &ExecutionResult,
        response: Response,
    ) -> Result<Response> {
        Ok(response)
    }

    /// Cleanup notification. Always invoked, even after an abort; must not
    /// itself abort.
    fn finished(&self, _request: &Request) {}
}

/// Ordered chain of dispatch hooks.
///
/// Hooks run in registration order at every stage; each hook's return
/// value feeds the next hook. The first error stops the stage.
#[derive(Clone, Default)]
pub struct HookChain {
    hooks: Vec<Arc<dyn DispatchHook>>,
}

impl HookChain {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register(&mut self, hook: Arc<dyn DispatchHook>) {
        self.hooks.push(hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn init(&self, request: &mut Request) -> Result<()> {
        for hook in &self.hooks {
            hook.init(request)?;
        }
        Ok(())
    }

    pub fn service_dispatched(&self, request: &Request, mut service: Service) -> Result<Service> {
        for hook in &self.hooks {
            service = hook.service_dispatched(request, service)?;
        }
        Ok(service)
    }

    pub fn operation_dispatched(
        &self,
        request: &Request,
        mut operation: Operation,
    ) -> Result<Operation> {
        for hook in &self.hooks {
            operation = hook.operation_dispatched(request, operation)?;
        }
        Ok(operation)
    }

    pub fn operation_executed(
        &self,
        request: &Request,
        operation: &Operation,
        mut result: ExecutionResult,
    ) -> Result<ExecutionResult> {
        for hook in &self.hooks {
            result = hook.operation_executed(request, operation, result)?;
        }
        Ok(result)
    }

    pub fn response_dispatched(
        &self,
        request: &Request,
        operation: &Operation,
        result: &ExecutionResult,
        mut response: Response,
    ) -> Result<Response> {
        for hook in &self.hooks {
            response = hook.response_dispatched(request, operation, result, response)?;
        }
        Ok(response)
    }

    pub fn finished(&self, request: &Request) {
        for hook in &self.hooks {
            hook.finished(request);
        }
    }
}
