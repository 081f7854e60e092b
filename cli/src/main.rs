//! Terminal host for the todo UI core.
//!
//! Wires a ureq transport into the controller and binds stdin commands to
//! the controller's actions, printing a fresh view snapshot after every
//! state-affecting action. The native-checkbox analogue: `toggle` flips
//! the displayed state provisionally via the request, and a failed update
//! leaves the printed list at its prior (reverted) state.

mod render;
mod transport;

use std::io::{self, BufRead, Write};

use todoui_core::{Controller, Submit, API_URL};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::render::{format_alert, format_view};
use crate::transport::UreqTransport;

const HELP: &str = "commands: list | add <user-id> <title…> | toggle <id> | rm <id> | quit";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let base_url = std::env::var("TODO_API_URL").unwrap_or_else(|_| API_URL.to_string());
    info!(%base_url, "starting todo UI");

    let mut controller = Controller::new(&base_url, UreqTransport::new());
    let mut stdout = io::stdout();

    match controller.startup() {
        Ok(()) => stdout.write_all(format_view(&controller.view()).as_bytes())?,
        // Startup failure leaves the UI unrendered but interactive.
        Err(err) => stdout.write_all(format_alert(&err.to_string()).as_bytes())?,
    }

    println!("{HELP}");

    let stdin = io::stdin();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => continue,
        };

        match command {
            "list" => {
                stdout.write_all(format_view(&controller.view()).as_bytes())?;
            }
            "add" => {
                let user_id = parts.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
                let title = parts.collect::<Vec<_>>().join(" ");
                match controller.submit(user_id, &title) {
                    // Invalid submissions are silently ignored, matching
                    // the form's behavior.
                    Ok(Submit::Ignored) => {}
                    Ok(Submit::Created(_)) => {
                        stdout.write_all(format_view(&controller.view()).as_bytes())?;
                    }
                    Err(err) => {
                        stdout.write_all(format_alert(&err.to_string()).as_bytes())?;
                        stdout.write_all(format_view(&controller.view()).as_bytes())?;
                    }
                }
            }
            "toggle" => {
                let Some(id) = parts.next().and_then(|s| s.parse::<u64>().ok()) else {
                    println!("{HELP}");
                    continue;
                };
                let Some(completed) = controller.store().todos().iter().find(|t| t.id == id).map(|t| t.completed)
                else {
                    println!("no todo with id {id}");
                    continue;
                };
                match controller.toggle(id, !completed) {
                    Ok(()) => stdout.write_all(format_view(&controller.view()).as_bytes())?,
                    Err(err) => {
                        stdout.write_all(format_alert(&err.to_string()).as_bytes())?;
                        println!("checkbox reverted");
                        stdout.write_all(format_view(&controller.view()).as_bytes())?;
                    }
                }
            }
            "rm" => {
                let Some(id) = parts.next().and_then(|s| s.parse::<u64>().ok()) else {
                    println!("{HELP}");
                    continue;
                };
                match controller.remove(id) {
                    Ok(()) => stdout.write_all(format_view(&controller.view()).as_bytes())?,
                    Err(err) => {
                        stdout.write_all(format_alert(&err.to_string()).as_bytes())?;
                        stdout.write_all(format_view(&controller.view()).as_bytes())?;
                    }
                }
            }
            "quit" | "exit" => break,
            _ => println!("{HELP}"),
        }
    }

    Ok(())
}
