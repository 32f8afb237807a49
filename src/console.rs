//! Pretty terminal output with colors and badges.

use colored::Colorize;

use crate::config::Environment;

// === Startup ===

pub fn print_banner() {
    println!();
    println!("{}", "╔═══════════════════════════════════════════════════════════╗".cyan());
    println!("{}", "║                                                           ║".cyan());
    println!("║     {}                                  ║", "🍪 SessionMint v0.1.0".bold().white());
    println!("║     {}              ║", "Signed session cookies for user identity".dimmed());
    println!("{}", "║                                                           ║".cyan());
    println!("{}", "╚═══════════════════════════════════════════════════════════╝".cyan());
    println!();
}

pub fn print_startup(addr: &str, environment: Environment) {
    println!("{} {}", "✓".green().bold(), "Server ready".white().bold());
    println!("  {} {}", "→".dimmed(), format!("http://{}", addr).cyan().underline());
    let env = match environment {
        Environment::Production => "production (Secure cookies)".green(),
        Environment::Development => "development (insecure cookies)".yellow(),
    };
    println!("  {} {}", "env:".dimmed(), env);
    println!();
    println!("{}", "Endpoints:".white().bold());
    println!("  {} {}  {}", "POST".yellow(), "/session".white(), "Sign in, set auth-token".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/session".white(), "Current session".dimmed());
    println!("  {} {}  {}", "DEL ".red(), "/session".white(), "Sign out".dimmed());
    println!("  {} {}  {}", "GET ".green(), "/metrics".white(), "Telemetry".dimmed());
    println!("  {} {}   {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    println!();
}

// === Badges ===

fn badge(text: &str, fg: colored::Color, bg: colored::Color) -> colored::ColoredString {
    format!(" {} ", text).color(fg).on_color(bg).bold()
}

// === Session Events ===

pub fn log_issue(user_id: &str, exp: i64) {
    println!(
        "{} {} {} {}",
        badge("LOGIN", colored::Color::Black, colored::Color::Green),
        "user:".dimmed(), user_id.white(),
        format!("exp:{}", exp).dimmed()
    );
}

pub fn log_verify(user_id: &str) {
    println!(
        "{} {} {} {}",
        badge("OK", colored::Color::Black, colored::Color::Blue),
        "user:".dimmed(), user_id.white(),
        "✓".green().bold()
    );
}

pub fn log_reject(reason: &str) {
    println!("{} {}", badge("DENY", colored::Color::White, colored::Color::Red), reason.red());
}

pub fn log_logout() {
    println!(
        "{} {}",
        badge("LOGOUT", colored::Color::Black, colored::Color::Yellow),
        "auth-token cleared".yellow()
    );
}
