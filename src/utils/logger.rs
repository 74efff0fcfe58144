use chrono::Local;
use colored::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub struct Logger;

impl Logger {
    fn get_logs_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("logs")
    }

    fn get_log_file_name() -> PathBuf {
        let date = Local::now().format("%Y-%m-%d").to_string();
        Self::get_logs_dir().join(format!("bot-{}.log", date))
    }

    fn write_to_file(message: &str) {
        if let Err(_) = (|| -> std::io::Result<()> {
            let logs_dir = Self::get_logs_dir();
            if !logs_dir.exists() {
                fs::create_dir_all(&logs_dir)?;
            }
            let timestamp = Local::now().to_rfc3339();
            let log_entry = format!("[{}] {}\n", timestamp, message);

            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(Self::get_log_file_name())?;
            file.write_all(log_entry.as_bytes())?;
            Ok(())
        })() {
            // Silently fail to avoid infinite loops
        }
    }

    pub fn header(title: &str) {
        println!("\n{}", "━".repeat(70).cyan());
        println!("{}", format!("  {}", title).cyan().bold());
        println!("{}\n", "━".repeat(70).cyan());
        Self::write_to_file(&format!("HEADER: {}", title));
    }

    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
        Self::write_to_file(&format!("INFO: {}", message));
    }

    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
        Self::write_to_file(&format!("SUCCESS: {}", message));
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
        Self::write_to_file(&format!("WARNING: {}", message));
    }

    pub fn error(message: &str) {
        println!("{} {}", "✗".red(), message);
        Self::write_to_file(&format!("ERROR: {}", message));
    }

    /// Progress line for the play-report loop.
    pub fn task_progress(task_name: &str, remaining_secs: u64) {
        let timestamp = Local::now().format("%H:%M:%S").to_string();
        println!(
            "{} {} {}",
            format!("[{}]", timestamp).bright_black(),
            format!("⏳ [{}] in progress...", task_name).cyan(),
            format!("{}s remaining", remaining_secs).yellow()
        );
        Self::write_to_file(&format!(
            "PROGRESS: {} - {}s remaining",
            task_name, remaining_secs
        ));
    }

    pub fn separator() {
        println!("{}", "─".repeat(70).bright_black());
    }
}
