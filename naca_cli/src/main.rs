//! # Chordline CLI
//!
//! Thin terminal wrapper around `naca_core::generate`.
//!
//! ```text
//! naca_cli [DESIGNATOR] [POINTS] [--linear] [--open] [--save]
//! ```
//!
//! Missing positional arguments are prompted for on stdin.

use std::io::{self, BufRead, Write};

use naca_core::file_io::dat_file_name;
use naca_core::{generate, ProfileOptions, Spacing};

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    prompt_line(prompt, &default.to_string())
        .parse()
        .unwrap_or(default)
}

fn main() {
    let mut positional = Vec::new();
    let mut options = ProfileOptions::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--linear" => options = options.with_spacing(Spacing::Linear),
            "--open" => options = options.open_trailing_edge(),
            "--save" => options = options.with_file_output(),
            "-h" | "--help" => {
                println!("Usage: naca_cli [DESIGNATOR] [POINTS] [--linear] [--open] [--save]");
                return;
            }
            _ => positional.push(arg),
        }
    }

    println!("Chordline CLI - NACA 4-Digit Airfoil Generator");
    println!("==============================================");
    println!();

    let designator = match positional.first() {
        Some(code) => code.clone(),
        None => prompt_line("Enter NACA designator [2412]: ", "2412"),
    };
    let point_count = match positional.get(1) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: point count '{}' is not a non-negative integer", raw);
                std::process::exit(2);
            }
        },
        None => prompt_usize("Enter points per surface [50]: ", 50),
    };

    match generate(&designator, point_count, &options) {
        Ok(coords) => {
            let naca = coords.designator();
            println!();
            println!("═══════════════════════════════════════");
            println!("  {}", naca);
            println!("═══════════════════════════════════════");
            println!("  Max camber:     {:.2} c", naca.max_camber());
            println!("  Camber at:      {:.1} c", naca.camber_position());
            println!("  Max thickness:  {:.2} c", naca.max_thickness());
            println!("  Spacing:        {}", options.spacing.display_name());
            println!(
                "  Trailing edge:  {}",
                if options.closed_trailing_edge { "closed" } else { "open" }
            );
            println!("  Points:         {}", coords.len());
            println!();
            println!("{:>10}  {:>10}", "x", "y");
            for point in coords.points() {
                println!("{:>10.6}  {:>10.6}", point.x, point.y);
            }
            if options.write_to_file {
                println!();
                println!("Saved to: {}", dat_file_name(naca));
            }

            println!();
            println!("JSON Output:");
            match coords.to_json_pretty() {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error: {}", e),
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
