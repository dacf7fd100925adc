use gitgate::{AuditLogger, Config, Gateway, SubcommandRequest};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const USAGE: &str = "usage: gitgate [--yes] [--json] <subcommand> [args...]";

#[tokio::main]
async fn main() -> ExitCode {
    let mut assume_yes = false;
    let mut json_output = false;
    let mut words = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--yes" | "-y" => assume_yes = true,
            "--json" => json_output = true,
            _ => words.push(arg),
        }
    }

    let Some(subcommand) = words.first().cloned() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };
    let args = words[1..].join(" ");
    let request = SubcommandRequest::new(subcommand, args);

    // Missing config just means defaults: no root override, confirm writes
    let config = Config::load().unwrap_or_else(|_| Config::default_config());

    let mut gateway = Gateway::new(config.clone());
    if config.behavior.log_commands {
        match AuditLogger::new() {
            Ok(logger) => gateway = gateway.with_audit(logger),
            Err(e) => eprintln!("warning: audit log unavailable: {}", e),
        }
    }

    let confirmation = match gateway.confirm(&request) {
        Ok(confirmation) => confirmation,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(confirmation) = confirmation {
        if !assume_yes && !prompt_approval(&confirmation) {
            eprintln!("Aborted.");
            return ExitCode::FAILURE;
        }
    }

    let result = match gateway.execute(&request).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to encode result: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
        if let Some(error) = &result.error {
            eprintln!("{}", error);
        }
    }

    if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(result.exit_code.unwrap_or(1).clamp(1, 255) as u8)
    }
}

fn prompt_approval(confirmation: &gitgate::ConfirmationRequest) -> bool {
    eprintln!("{}", confirmation.message);
    for field in &confirmation.info {
        eprintln!("  {}: {}", field.name, field.value);
    }
    eprint!("Proceed? [y/N] ");
    let _ = io::stderr().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
