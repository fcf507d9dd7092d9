use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::console::Console;

use super::RemoteArgs;

pub fn run(category: Option<&str>, seed: Option<u64>, remote: &RemoteArgs) -> Result<(), String> {
    let category = super::parse_category(category)?;
    let mut console = Console::new(seed, remote.config())?.with_category(category);

    println!("  {} Arcana Reading Session", "Starting".bold());
    println!("  Topic: {category} | {}", console.remote_status());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
