//! gRPC Server implementation for calculator
//!
//! Converts wire messages into domain inputs, delegates to the domain
//! `Service`, and maps every domain error to `INVALID_ARGUMENT`.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use calculator_sdk::proto::Operation as WireOperation;
use calculator_sdk::{CalculatorService, OperateRequest, OperateResponse};

use crate::domain::{DomainError, Operation, Service};

/// Convert the raw wire enum value into a domain operation.
///
/// # Errors
/// `DomainError::UnsupportedOperation` for `OPERATION_UNSPECIFIED` (named by
/// its proto identifier) and for numbers outside the enum (named by value).
pub fn operation_from_wire(raw: i32) -> Result<Operation, DomainError> {
    match WireOperation::try_from(raw) {
        Ok(WireOperation::Add) => Ok(Operation::Add),
        Ok(WireOperation::Subtract) => Ok(Operation::Subtract),
        Ok(WireOperation::Multiply) => Ok(Operation::Multiply),
        Ok(WireOperation::Divide) => Ok(Operation::Divide),
        Ok(WireOperation::Unspecified) => Err(DomainError::unsupported(
            WireOperation::Unspecified.as_str_name(),
        )),
        Err(_) => Err(DomainError::unsupported(raw.to_string())),
    }
}

impl From<DomainError> for Status {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::DivisionByZero | DomainError::UnsupportedOperation(_) => {
                Status::invalid_argument(err.to_string())
            }
        }
    }
}

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct CalculatorServiceImpl {
    service: Arc<Service>,
}

impl CalculatorServiceImpl {
    /// Create a new `CalculatorService` implementation with the given `Service`.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl CalculatorService for CalculatorServiceImpl {
    async fn operate(
        &self,
        request: Request<OperateRequest>,
    ) -> Result<Response<OperateResponse>, Status> {
        let req = request.into_inner();
        tracing::debug!(
            operand_a = req.operand_a,
            operand_b = req.operand_b,
            operation = req.operation,
            "received calculator request"
        );

        let op = operation_from_wire(req.operation).inspect_err(|e| {
            tracing::debug!(error = %e, "rejecting calculator request");
        })?;

        let result = self
            .service
            .operate(req.operand_a, req.operand_b, op)
            .inspect_err(|e| tracing::debug!(error = %e, "rejecting calculator request"))?;

        Ok(Response::new(OperateResponse { result }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc() -> CalculatorServiceImpl {
        CalculatorServiceImpl::new(Arc::new(Service::new()))
    }

    fn request(a: f64, b: f64, operation: WireOperation) -> Request<OperateRequest> {
        Request::new(OperateRequest {
            operand_a: a,
            operand_b: b,
            operation: operation.into(),
        })
    }

    #[test]
    fn test_wire_conversion() {
        assert_eq!(operation_from_wire(1), Ok(Operation::Add));
        assert_eq!(operation_from_wire(2), Ok(Operation::Subtract));
        assert_eq!(operation_from_wire(3), Ok(Operation::Multiply));
        assert_eq!(operation_from_wire(4), Ok(Operation::Divide));
        assert_eq!(
            operation_from_wire(0),
            Err(DomainError::UnsupportedOperation(
                "OPERATION_UNSPECIFIED".to_owned()
            ))
        );
        assert_eq!(
            operation_from_wire(42),
            Err(DomainError::UnsupportedOperation("42".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_operate_divides() {
        let resp = svc()
            .operate(request(10.0, 5.0, WireOperation::Divide))
            .await
            .unwrap();
        assert!((resp.into_inner().result - 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_division_by_zero_is_invalid_argument() {
        let status = svc()
            .operate(request(10.0, 0.0, WireOperation::Divide))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "division by zero");
    }

    #[tokio::test]
    async fn test_unspecified_is_invalid_argument() {
        let status = svc()
            .operate(request(10.0, 5.0, WireOperation::Unspecified))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(
            status.message(),
            "unsupported operation: OPERATION_UNSPECIFIED"
        );
    }

    #[tokio::test]
    async fn test_unknown_enum_value_is_invalid_argument() {
        let status = svc()
            .operate(Request::new(OperateRequest {
                operand_a: 1.0,
                operand_b: 2.0,
                operation: 99,
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert!(status.message().contains("99"));
    }
}
