use biokin::reactors::integrator::IntegrationMethod;
use biokin::task::{SimulationTask, init_logger};
use log::info;
use std::process::ExitCode;

fn print_usage() {
    eprintln!("usage: biokin <task.json>   run a simulation task, print the outcome as JSON");
    eprintln!("       biokin --methods     list integration methods");
}

fn print_methods() {
    for method in IntegrationMethod::catalog() {
        println!(
            "{:<16} order {}, {} stage(s), aliases: {}",
            method.name,
            method.order,
            method.stages,
            method.aliases.join(", ")
        );
    }
}

fn main() -> ExitCode {
    let Some(arg) = std::env::args().nth(1) else {
        print_usage();
        return ExitCode::FAILURE;
    };
    if arg == "--methods" {
        print_methods();
        return ExitCode::SUCCESS;
    }

    let task = match SimulationTask::from_file(&arg) {
        Ok(task) => task,
        Err(e) => {
            eprintln!("{}: {}", arg, e);
            return ExitCode::FAILURE;
        }
    };
    let logger = task.log_level().and_then(init_logger);
    if let Err(e) = logger {
        eprintln!("logging disabled: {}", e);
    }

    let outcome = match task.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("simulation failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("{} samples simulated", outcome.series.len());
    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialise outcome: {}", e);
            ExitCode::FAILURE
        }
    }
}
