mod cli; // Declare the cli module

use std::process::ExitCode;

use clap::Parser;
use log::info;
use strata_core::Application;

use cli::{CliArgs, Commands, ConfigCommand, MiddlewareCommand};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Handle simple ping command
    if args.ping {
        println!("pong");
        return ExitCode::SUCCESS;
    }

    println!("Initializing application...");
    let mut app = Application::for_project(&args.project);

    // --- Statically Register Middleware Packages ---
    println!("Registering static middleware packages...");
    if let Err(e) = app.register_middleware_package(strata_middleware_access_log::package()) {
        eprintln!("Fatal: Failed to register {}: {}", strata_middleware_access_log::PACKAGE_NAME, e);
        return ExitCode::FAILURE;
    }
    println!("  - Registered: {}", strata_middleware_access_log::PACKAGE_NAME);
    // --- End Static Registration ---

    if let Err(e) = app.init() {
        eprintln!("Failed to initialize application: {}", e);
        return ExitCode::FAILURE;
    }
    for (key, value) in args.overrides {
        info!("Overriding configuration key '{}'", key);
        app.set_config(&key, value);
    }

    let code = match args.command {
        Some(Commands::Config { command: ConfigCommand::Get { key } }) => config_get(&app, &key),
        Some(Commands::Middleware { command: MiddlewareCommand::List {} }) => {
            run_then(&mut app, list_middleware)
        }
        Some(Commands::Routes) => run_then(&mut app, list_routes),
        Some(Commands::Run) | None => run_then(&mut app, |app| {
            let routes = app.router().map(|router| router.routes().len()).unwrap_or(0);
            println!(
                "Application running: {} route(s), {} active middleware(s)",
                routes,
                app.middlewares().len()
            );
        }),
    };

    println!("Shutting down application...");
    code
}

fn run_then(app: &mut Application, report: impl FnOnce(&Application)) -> ExitCode {
    if let Err(e) = app.run() {
        eprintln!("Application error: {}", e);
        return ExitCode::FAILURE;
    }
    report(app);
    ExitCode::SUCCESS
}

fn config_get(app: &Application, key: &str) -> ExitCode {
    match app.get_config(key) {
        Some(value) => {
            match serde_json::to_string_pretty(value) {
                Ok(rendered) => println!("{}", rendered),
                Err(_) => println!("{}", value),
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Configuration key '{}' not found", key);
            ExitCode::FAILURE
        }
    }
}

fn list_middleware(app: &Application) {
    println!("Listing middleware packages:");
    let Some(registry) = app.middleware_registry() else {
        println!("  No middleware registry.");
        return;
    };
    if registry.catalog().is_empty() {
        println!("  No packages known.");
        return;
    }

    for package in registry.catalog().packages() {
        let status = if registry.middlewares().contains_key(&package.name) {
            "Active"
        } else if registry.skipped().iter().any(|skipped| skipped.package == package.name) {
            "Skipped (no entry point)"
        } else {
            "Not a middleware"
        };
        let version = package
            .version
            .as_ref()
            .map(|version| version.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("  - Name: {}, Version: {}, Status: {}", package.name, version, status);
    }
}

fn list_routes(app: &Application) {
    let routes = app.router().map(|router| router.routes()).unwrap_or(&[]);
    println!("Listing routes ({}):", routes.len());
    for route in routes {
        println!("  {}", route);
    }
}
