use colored::Colorize;
use tarot_core::standard_spreads;

pub fn run() -> Result<(), String> {
    for spread in standard_spreads() {
        println!("  {}", spread.menu_label().bold());
        for (i, position) in spread.positions().iter().enumerate() {
            let position = position.trim();
            let text = if position.is_empty() {
                "the situation".to_string()
            } else {
                format!("{position} the situation")
            };
            println!("    {:>2}. {text}", i + 1);
        }
        println!();
    }
    Ok(())
}
