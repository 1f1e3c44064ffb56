/// Preview — interactive shell for trying templates against word lists.
///
/// Usage: preview [--lists <path.ron>] [--seed <n>]
///
/// Commands:
///   make <template>             — resolve a template and print the sentence
///   list <key> <v1,v2,...>      — register a word list (derives an_<key>/<key>s)
///   actions                     — count registered actions
///   seed <n>                    — reset the RNG seed
///   help                        — list commands
///   quit                        — exit

use std::io::{self, BufRead, Write};

use sentencer::core::engine::Sentencer;
use sentencer::schema::list::ListSpec;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut lists_path = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lists" if i + 1 < args.len() => {
                i += 1;
                lists_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut builder = Sentencer::builder().seed(seed);
    if let Some(ref path) = lists_path {
        builder = builder.lists_from_ron(path);
    }
    let mut engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to load lists: {}", e);
            std::process::exit(1);
        }
    };

    println!("sentencer preview — type 'help' for commands");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "make" => {
                if rest.is_empty() {
                    println!("usage: make <template>");
                } else {
                    println!("{}", engine.make(rest));
                }
            }
            "list" => match rest.split_once(' ') {
                Some((key, values)) if !values.trim().is_empty() => {
                    let values: Vec<String> = values
                        .split(',')
                        .map(|v| v.trim().to_string())
                        .filter(|v| !v.is_empty())
                        .collect();
                    let spec = ListSpec::new(key, values)
                        .articlize(format!("an_{}", key))
                        .pluralize(format!("{}s", key));
                    engine.configure(
                        sentencer::core::engine::EngineOptions::new().list(spec),
                    );
                    println!(
                        "registered {}, an_{}, {}s",
                        key, key, key
                    );
                }
                _ => println!("usage: list <key> <v1,v2,...>"),
            },
            "actions" => {
                println!("{} actions registered", engine.registry().len());
            }
            "seed" => match rest.parse::<u64>() {
                Ok(n) => {
                    engine.set_seed(n);
                    println!("seed set to {}", n);
                }
                Err(_) => println!("usage: seed <n>"),
            },
            "help" => print_commands(),
            "quit" | "exit" => break,
            _ => println!("unknown command '{}' — try 'help'", command),
        }
    }
}

fn print_usage() {
    println!("Usage: preview [--lists <path.ron>] [--seed <n>]");
}

fn print_commands() {
    println!("  make <template>         resolve a template, e.g. make I saw {{{{ an_animal }}}}.");
    println!("  list <key> <v1,v2,...>  register a word list plus derived actions");
    println!("  actions                 count registered actions");
    println!("  seed <n>                reset the RNG seed");
    println!("  help                    this list");
    println!("  quit                    exit");
}
