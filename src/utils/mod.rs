use crossterm::event::{read, Event};

pub mod external_prog;
pub mod pip;
pub mod report;
pub mod verify;

pub fn dump_file(name: &str, ext: &str) -> String {
    format!("{}_{}.{}", name, chrono::Local::now().to_rfc3339(), ext)
}

/// Section header in the style of the original batch scripts.
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(80));
    println!("  {}", title);
    println!("{}\n", "=".repeat(80));
}

/// Block until the user presses a key, like `pause` in a batch file.
pub fn pause_for_ack() -> anyhow::Result<()> {
    println!("Press any key to exit...");

    crossterm::terminal::enable_raw_mode()?;
    let result = loop {
        match read() {
            Ok(Event::Key(_)) => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e.into()),
        }
    };
    crossterm::terminal::disable_raw_mode()?;

    result
}
