use clap::Parser;
use std::process;
use survey_processor::cli::{args::Args, commands};
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel all operations when Ctrl+C is received
            cancellation_token.cancel();
        };

        // Run the main command with cancellation support
        tokio::select! {
            result = commands::run(command, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(survey_processor::Error::processing_interrupted(
                    "Processing interrupted by user".to_string()
                ))
            }
        }
    });

    match result {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Survey Processor - Directional Survey Trajectory Parser");
    println!("=======================================================");
    println!();
    println!("Parse industry-standard wellbore survey reports into validated,");
    println!("strongly-typed trajectory records.");
    println!();
    println!("USAGE:");
    println!("    survey-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a single survey report and print the trajectory");
    println!("    validate    Parse every report under a directory and print statistics");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a report with the tab-delimited (strict) layout:");
    println!("    survey-processor parse --input plan.txt");
    println!();
    println!("    # Parse a free-text (lenient) report as JSON:");
    println!("    survey-processor parse --input plan.txt --profile lenient --format json");
    println!();
    println!("    # Sweep a directory of reports:");
    println!("    survey-processor validate --input ./plans --continue-on-error");
    println!();
    println!("For detailed help on any command, use:");
    println!("    survey-processor <COMMAND> --help");
}
