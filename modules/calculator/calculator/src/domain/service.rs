//! Domain service for calculator

use std::fmt;

use tracing::debug;

use super::error::DomainError;

/// Supported binary operations.
///
/// Unspecified or unknown wire values are rejected while converting the
/// request and never become a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        };
        f.write_str(name)
    }
}

/// Stateless service evaluating one operation per call.
#[derive(Clone, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply `op` to `a` and `b`.
    ///
    /// Overflow, NaN and infinities follow IEEE 754 and are returned as-is.
    ///
    /// # Errors
    /// `DomainError::DivisionByZero` when dividing by `0.0` or `-0.0`.
    pub fn operate(&self, a: f64, b: f64, op: Operation) -> Result<f64, DomainError> {
        debug!(a, b, %op, "performing operation");

        let result = match op {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                a / b
            }
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_concrete_cases() {
        let service = Service::new();
        let cases = [
            (10.0, 5.0, Operation::Add, 15.0),
            (10.0, 5.0, Operation::Subtract, 5.0),
            (10.0, 5.0, Operation::Multiply, 50.0),
            (10.0, 5.0, Operation::Divide, 2.0),
            (-5.0, 3.0, Operation::Add, -2.0),
            (-5.0, 3.0, Operation::Multiply, -15.0),
        ];
        for (a, b, op, expected) in cases {
            approx(service.operate(a, b, op).unwrap(), expected);
        }
    }

    #[test]
    fn test_matches_float_expressions() {
        let service = Service::new();
        let operands = [
            (0.1, 0.2),
            (-1e300, 3.5),
            (123_456.789, -0.001),
            (7.0, 7.0),
            (-0.5, -2.25),
        ];
        for (a, b) in operands {
            approx(service.operate(a, b, Operation::Add).unwrap(), a + b);
            approx(service.operate(a, b, Operation::Subtract).unwrap(), a - b);
            approx(service.operate(a, b, Operation::Multiply).unwrap(), a * b);
            approx(service.operate(a, b, Operation::Divide).unwrap(), a / b);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        let service = Service::new();
        assert_eq!(
            service.operate(10.0, 0.0, Operation::Divide),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(
            service.operate(10.0, -0.0, Operation::Divide),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(DomainError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_zero_operand_is_fine_elsewhere() {
        let service = Service::new();
        approx(service.operate(0.0, 0.0, Operation::Add).unwrap(), 0.0);
        approx(service.operate(0.0, 4.0, Operation::Divide).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_values_propagate() {
        let service = Service::new();

        let overflow = service.operate(f64::MAX, 2.0, Operation::Multiply).unwrap();
        assert!(overflow.is_infinite() && overflow.is_sign_positive());

        let nan = service.operate(f64::NAN, 1.0, Operation::Add).unwrap();
        assert!(nan.is_nan());

        let inf = service
            .operate(f64::INFINITY, f64::INFINITY, Operation::Subtract)
            .unwrap();
        assert!(inf.is_nan());
    }
}
