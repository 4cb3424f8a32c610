//! `hdi`: typed front end for the macOS disk-image utility

use std::process::ExitCode;

use clap::Parser;

use hdiutil::HdiutilError;
use hdiutil::cli::Cli;
use hdiutil::output::json;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let as_json = cli.json;
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            if as_json {
                let code = e
                    .downcast_ref::<HdiutilError>()
                    .map_or("error", HdiutilError::code);
                match json::format_error(&e.to_string(), code) {
                    Ok(text) => println!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
