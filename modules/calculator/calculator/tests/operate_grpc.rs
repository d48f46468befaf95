#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests: real hub on an ephemeral port, SDK client over HTTP/2.

use std::sync::Arc;
use std::time::Duration;

use calculator::CalculatorModule;
use calculator_sdk::{CalculatorClientV1, CalculatorError, CalculatorGrpcClient, Operation};
use grpc_hub::{GrpcHub, GrpcServiceModule, ReadySignal, collect_installers};
use tokio_util::sync::CancellationToken;

struct Running {
    endpoint: String,
    cancel: CancellationToken,
    task: tokio::task::JoinHandle<anyhow::Result<()>>,
}

async fn start_server() -> Running {
    let hub = Arc::new(GrpcHub::default());
    hub.set_listen_addr_tcp("127.0.0.1:0".parse().unwrap());

    let module = CalculatorModule::new();
    let modules: [&dyn GrpcServiceModule; 1] = [&module];
    let installers = collect_installers(&modules);

    let cancel = CancellationToken::new();
    let (ready, rx) = ReadySignal::pair();
    let task = {
        let hub = hub.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { hub.run_with_installers(installers, cancel, ready).await })
    };

    tokio::time::timeout(Duration::from_secs(2), rx)
        .await
        .expect("ready signal should fire")
        .expect("ready channel should complete");

    Running {
        endpoint: hub.bound_endpoint().expect("bound endpoint"),
        cancel,
        task,
    }
}

struct Case {
    name: &'static str,
    a: f64,
    b: f64,
    op: Operation,
    expected: Result<f64, ()>,
}

fn row(name: &'static str, a: f64, b: f64, op: Operation, expected: Result<f64, ()>) -> Case {
    Case {
        name,
        a,
        b,
        op,
        expected,
    }
}

#[tokio::test]
async fn operate_table_over_grpc() {
    use Operation::{Add, Divide, Multiply, Subtract, Unspecified};

    let server = start_server().await;
    let client = CalculatorGrpcClient::connect(server.endpoint.clone())
        .await
        .expect("client should connect");

    let cases = [
        row("Add", 10.0, 5.0, Add, Ok(15.0)),
        row("Subtract", 10.0, 5.0, Subtract, Ok(5.0)),
        row("Multiply", 10.0, 5.0, Multiply, Ok(50.0)),
        row("Divide", 10.0, 5.0, Divide, Ok(2.0)),
        row("Divide by Zero", 10.0, 0.0, Divide, Err(())),
        row("Unsupported Operation", 10.0, 5.0, Unspecified, Err(())),
        row("Add Negative", -5.0, 3.0, Add, Ok(-2.0)),
        row("Multiply Negative", -5.0, 3.0, Multiply, Ok(-15.0)),
    ];

    for case in cases {
        let outcome = client.operate(case.a, case.b, case.op).await;
        match (case.expected, outcome) {
            (Ok(expected), Ok(actual)) => assert!(
                (actual - expected).abs() < 1e-9,
                "{}: expected {expected}, got {actual}",
                case.name
            ),
            (Err(()), Err(err)) => assert!(
                err.is_invalid_argument(),
                "{}: expected InvalidArgument, got {err}",
                case.name
            ),
            (expected, outcome) => panic!(
                "{}: expected {expected:?}, got {outcome:?}",
                case.name
            ),
        }
    }

    server.cancel.cancel();
    server.task.await.unwrap().unwrap();
}

#[tokio::test]
async fn error_messages_reach_the_client() {
    let server = start_server().await;
    let client = CalculatorGrpcClient::connect(server.endpoint.clone())
        .await
        .unwrap();

    let err = client
        .operate(1.0, 0.0, Operation::Divide)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CalculatorError::InvalidArgument("division by zero".to_owned())
    );

    let err = client
        .operate(1.0, 2.0, Operation::Unspecified)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CalculatorError::InvalidArgument("unsupported operation: OPERATION_UNSPECIFIED".to_owned())
    );

    server.cancel.cancel();
    server.task.await.unwrap().unwrap();
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let server = start_server().await;
    let client = CalculatorGrpcClient::connect(server.endpoint.clone())
        .await
        .unwrap();

    let calls = (0..32).map(|i| {
        let client = client.clone();
        tokio::spawn(async move {
            let a = f64::from(i);
            let result = client.operate(a, 2.0, Operation::Multiply).await.unwrap();
            (a, result)
        })
    });

    for call in calls.collect::<Vec<_>>() {
        let (a, result) = call.await.unwrap();
        assert!((result - a * 2.0).abs() < 1e-9);
    }

    server.cancel.cancel();
    server.task.await.unwrap().unwrap();
}
