//! CLI tool to inspect tokens, parse trees, and symbol tables for
//! arithmetic source files.

use std::fs;
use std::process::ExitCode;

use arithlang::symtab::{
    HashedSymbolTable, LineDirection, Metadata, OrderedSymbolTable, SymbolTable, TreeSymbolTable,
    UnorderedSymbolTable,
};
use arithlang::{TokenKind, parse, tokenize};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: arithlang <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens   Print the token sequence of each file");
        eprintln!("  ast      Parse each file and print the expression tree");
        eprintln!("  symbols  Index each file's identifiers in all four table variants");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  arithlang tokens expr.txt");
        eprintln!("  arithlang ast expr.txt");
        eprintln!("  arithlang symbols expr.txt");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => print_tokens(&content),
            "ast" => match parse(&tokenize(&content)) {
                Ok(expr) => println!("{expr}"),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "symbols" => print_symbols(&content),
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_tokens(content: &str) {
    for token in tokenize(content) {
        println!(
            "{} {:?} @ {}:{}",
            token.kind, token.text, token.span.line, token.span.column
        );
    }
}

/// Insert a demo metadata record for each distinct identifier into
/// all four table variants, then print what each variant returns.
fn print_symbols(content: &str) {
    let mut ordered = OrderedSymbolTable::new();
    let mut unordered = UnorderedSymbolTable::new();
    let mut tree = TreeSymbolTable::new();
    let mut hashed = HashedSymbolTable::new(10);

    let mut names: Vec<String> = Vec::new();
    for token in tokenize(content) {
        if token.kind != TokenKind::Identifier || names.contains(&token.text) {
            continue;
        }
        let counter = u32::try_from(names.len()).unwrap_or(u32::MAX) + 1;
        let meta = Metadata {
            counter,
            variable_name: token.text.clone(),
            object_address: format!("0x{counter:04x}"),
            type_name: "int".to_string(),
            dimension: None,
            line_direction: LineDirection::Horizontal,
            line_reference: None,
        };
        ordered.insert(&token.text, meta.clone());
        unordered.insert(&token.text, meta.clone());
        tree.insert(&token.text, meta.clone());
        hashed.insert(&token.text, meta);
        names.push(token.text);
    }

    for name in &names {
        for (variant, meta) in [
            ("ordered", ordered.lookup(name)),
            ("unordered", unordered.lookup(name)),
            ("tree", tree.lookup(name)),
            ("hashed", hashed.lookup(name)),
        ] {
            match meta {
                Some(m) => println!(
                    "{name}: {variant} -> counter={} address={} type={}",
                    m.counter, m.object_address, m.type_name
                ),
                None => println!("{name}: {variant} -> <missing>"),
            }
        }
    }
}
