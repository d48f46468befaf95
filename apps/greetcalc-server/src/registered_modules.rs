// Every service module served by this binary. Add new modules here.

use calculator::CalculatorModule;
use greeter::GreeterModule;
use grpc_hub::{GrpcServiceModule, ModuleInstallers, collect_installers};

pub fn installers() -> Vec<ModuleInstallers> {
    let calculator = CalculatorModule::new();
    let greeter = GreeterModule::new();
    let modules: [&dyn GrpcServiceModule; 2] = [&greeter, &calculator];
    collect_installers(&modules)
}
