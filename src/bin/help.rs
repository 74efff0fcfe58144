//! Command overview for the reward bot binaries.

use colored::*;

fn main() {
    println!("\n{}", "━".repeat(60).cyan());
    println!("{}", "  🎁 PAN REWARD BOT - COMMANDS".cyan().bold());
    println!("{}\n", "━".repeat(60).cyan());

    println!("{}", "Flows:".yellow().bold());
    println!("   {}                 game-task claim loop", "cargo run".green());
    println!("   {}   daily check-in", "cargo run --bin checkin".green());
    println!();

    println!("{}", "Credentials (env var first, file fallback):".yellow().bold());
    println!("   PAN_COOKIE or cookie_pan.txt        task-claim cookie");
    println!("   GEMAI_USERNAME + GEMAI_PASSWORD     check-in login");
    println!("   GEMAI_COOKIE + GEMAI_USER_ID        pre-captured check-in session");
    println!("   config.json                         check-in fallback file");
    println!();

    println!(
        "{}",
        "Exit codes: 0 = success or nothing to do, 1 = failure (alerts the scheduler)"
            .bright_black()
    );
    println!();
}
