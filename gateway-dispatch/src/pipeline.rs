use crate::error::Result;
use crate::hook::HookChain;
use crate::request::Request;
use crate::service::{ExecutionResult, Operation, Response, Service};

/// Routing and execution boundary the pipeline drives.
///
/// Implementations own service registration, operation lookup, and the
/// protocol-specific encoding of results; the pipeline only sequences them
/// and interleaves the hook chain.
pub trait Router: Send + Sync {
    fn resolve_service(&self, request: &Request) -> Result<Service>;

    fn resolve_operation(&self, request: &Request, service: &Service) -> Result<Operation>;

    fn execute(
        &self,
        request: &Request,
        service: &Service,
        operation: &Operation,
    ) -> Result<ExecutionResult>;

    fn respond(
        &self,
        request: &Request,
        operation: &Operation,
        result: &ExecutionResult,
    ) -> Result<Response>;
}

/// Drives one request through routing and the hook chain.
///
/// Stage order: `init` → resolve service → `service_dispatched` → resolve
/// operation → `operation_dispatched` → execute → `operation_executed` →
/// respond → `response_dispatched`. The first failure aborts the remaining
/// stages; `finished` runs on every exit path.
#[derive(Clone, Default)]
pub struct Pipeline {
    chain: HookChain,
}

impl Pipeline {
    pub fn new(chain: HookChain) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &HookChain {
        &self.chain
    }

    pub fn dispatch(&self, router: &dyn Router, mut request: Request) -> Result<Response> {
        let outcome = self.run_stages(router, &mut request);
        self.chain.finished(&request);
        outcome
    }

    fn run_stages(&self, router: &dyn Router, request: &mut Request) -> Result<Response> {
        self.chain.init(request)?;

        let service = router.resolve_service(request)?;
        let service = self.chain.service_dispatched(request, service)?;

        let operation = router.resolve_operation(request, &service)?;
        let operation = self.chain.operation_dispatched(request, operation)?;

        let result = router.execute(request, &service, &operation)?;
        let result = self.chain.operation_executed(request, &operation, result)?;

        let response = router.respond(request, &operation, &result)?;
        self.chain.response_dispatched(request, &operation, &result, response)
    }
}
