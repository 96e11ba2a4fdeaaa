use std::io::{self, BufRead, Write};

use colored::Colorize;
use haikugen::config::GeneratorConfig;
use haikugen::memory::Memory;
use haikugen::orchestrator::Orchestrator;
use haikugen::session::{HaikuSession, SAMPLE_THEMES};

const INFO_TEXT: &str = "Type a word or theme and press Enter to receive a haiku. \
With no GEMINI_API_KEY configured, haikus come from a small local pool.";

fn main() {
    let config = GeneratorConfig::from_env();
    let remote_configured = config.api_key.is_some();
    let mut orchestrator = Orchestrator::new(config);

    println!("{}", "Haiku Generator".bold());
    if remote_configured {
        println!("{}", "remote generation: gemini".dimmed());
    } else {
        println!(
            "{}",
            "remote generation: off (no GEMINI_API_KEY), using local pool".dimmed()
        );
    }
    print_samples();
    println!(
        "{}",
        "Commands: sample <n>, samples, info, log, quit".dimmed()
    );
    println!();

    let stdin = io::stdin();
    loop {
        print!("theme> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break; // EOF
        }
        let line = line.trim().to_string();

        match line.as_str() {
            "quit" | "exit" => break,
            "samples" => print_samples(),
            "info" => {
                orchestrator.toggle_info();
                if orchestrator.session.info_visible {
                    println!("{}", INFO_TEXT.italic());
                }
            }
            "log" => {
                for (label, content) in orchestrator.memory.read_all() {
                    println!("[{}] {}", label, content);
                }
            }
            _ if line.starts_with("sample") => {
                let picked = line["sample".len()..]
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| orchestrator.select_sample(index));
                match picked {
                    Some(word) => println!("theme set to \"{}\", press Enter to generate", word),
                    None => println!("{}", "pick a sample between 1 and 8".yellow()),
                }
            }
            // Enter on an empty line submits the current theme, the
            // way picking a sample word then clicking Generate works.
            "" => {
                let theme = orchestrator.session.theme.clone();
                run_attempt(&mut orchestrator, &theme);
            }
            _ => run_attempt(&mut orchestrator, &line),
        }
    }
}

fn run_attempt(orchestrator: &mut Orchestrator, raw: &str) {
    if orchestrator.session.is_busy() {
        return;
    }
    println!("{}", "Generating haiku...".dimmed());
    orchestrator.submit(raw);
    render(&orchestrator.session);
}

fn render(session: &HaikuSession) {
    if let Some(error) = &session.error {
        println!("{}", error.red());
    }
    if let Some(haiku) = &session.haiku {
        println!();
        for line in haiku.lines() {
            println!("  {}", line.cyan());
        }
        println!();
    }
}

fn print_samples() {
    let words = SAMPLE_THEMES
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{}:{}", i + 1, word))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{} {}", "Samples:".dimmed(), words.yellow());
}
