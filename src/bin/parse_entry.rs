//! Utility to parse a single log entry from the command line
//!
//! Usage: parse_entry "<text>" [YYYY-MM-DD]

use fitlog::config::Config;
use fitlog::tools::parse::parse_log_entry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let Some(text) = args.next() else {
        eprintln!("Usage: parse_entry \"<text>\" [YYYY-MM-DD]");
        std::process::exit(2);
    };
    let date = args.next();

    let response = parse_log_entry(&Config::local_only(), &text, date.as_deref(), false)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if let Some(message) = &response.message {
        eprintln!("{}", message);
    }

    Ok(())
}
