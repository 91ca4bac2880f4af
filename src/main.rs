//! Console harness for the partial-navigation extension.
//!
//! Stands in for a host editor: scroll requests are printed in their
//! wire shape, the input box is a line read from stdin, and status
//! messages go to stdout. Useful for exercising the activation
//! lifecycle end to end; it is not an editor.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;
use log::info;
use serde_json::json;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use partial_navigation::commands::CommandRegistry;
use partial_navigation::core::settings::RATIO_KEY;
use partial_navigation::extension::{self, EditorHost};
use partial_navigation::host::{
    ConfigScope, ConfigStore, HostWindow, InputBoxRequest, MemoryConfigStore, ScrollDirection,
    ScrollRequest, Viewport,
};

#[derive(Parser)]
#[command(name = "partial-navigation", about = "Console harness for the partial-navigation extension")]
struct Args {
    /// Seed value for the stored scroll ratio
    #[arg(short, long)]
    ratio: Option<f64>,
}

/// Console stand-in for the host editor.
struct ConsoleHost;

impl Viewport for ConsoleHost {
    fn scroll(&self, request: ScrollRequest) {
        match serde_json::to_string(&request) {
            Ok(wire) => println!("editorScroll <- {wire}"),
            Err(err) => eprintln!("unserializable scroll request: {err}"),
        }
    }
}

#[async_trait]
impl HostWindow for ConsoleHost {
    async fn show_input_box(&self, request: InputBoxRequest<'_>) -> Option<String> {
        println!("{} [{}]:", request.prompt, request.value);
        let mut line = String::new();
        // Blocking read is fine here; the harness is strictly sequential.
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None, // EOF = box dismissed
            Ok(_) => {
                let text = line.trim_end_matches(['\r', '\n']).to_string();
                if let Some(message) = (request.validate_input)(&text) {
                    println!("! {message}");
                }
                Some(text)
            }
        }
    }

    fn set_status_message(&self, message: &str, _duration: Duration) {
        println!("[status] {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("partial-navigation.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let store = Arc::new(MemoryConfigStore::new());
    if let Some(ratio) = args.ratio {
        store.update(RATIO_KEY, json!(ratio), ConfigScope::Global)?;
    }

    let editor = Arc::new(ConsoleHost);
    let registry = CommandRegistry::new();
    let extension = extension::activate(
        &registry,
        EditorHost { config: store, viewport: editor.clone(), window: editor },
    )?;
    info!("extension active");

    println!("commands: up, down, scroll, quit");
    let up_command = extension::scroll_command_id(ScrollDirection::Up);
    let down_command = extension::scroll_command_id(ScrollDirection::Down);
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "up" => registry.execute(&up_command).await?,
            "down" => registry.execute(&down_command).await?,
            "scroll" => registry.execute(extension::SET_RATIO_COMMAND).await?,
            other => println!("unknown command '{other}'"),
        }
    }

    extension.deactivate();
    Ok(())
}
