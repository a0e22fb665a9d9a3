use std::io::{self, Write};

use rusqlite::Connection;

use crate::model::{OrderDraft, Person};

/// Explicit session state for the ordering flow: the roster as loaded at
/// startup (read-only from here on) and the in-memory draft list, synced
/// to the local store on `continue`.
pub struct OrderContext {
    pub conn: Connection,
    pub people: Vec<Person>,
    pub drafts: Vec<OrderDraft>,
}

impl OrderContext {
    pub fn new(conn: Connection, people: Vec<Person>, drafts: Vec<OrderDraft>) -> Self {
        Self {
            conn,
            people,
            drafts,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Find a person by name query. Prints an error if not found or
    /// ambiguous.
    pub fn find_person(&self, args: &str) -> Option<Person> {
        let query = args.trim();
        if query.is_empty() {
            println!("Uso: <comando> <nombre>");
            return None;
        }

        let lower = query.to_lowercase();
        let matches: Vec<&Person> = self
            .people
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&lower))
            .collect();

        match matches.len() {
            0 => {
                println!("No se encontró a nadie con '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                // Check for exact match
                if let Some(exact) = matches.iter().find(|p| p.name.eq_ignore_ascii_case(query)) {
                    return Some((*exact).clone());
                }
                println!("Hay varias coincidencias:");
                for p in &matches {
                    println!("  {}", p.name);
                }
                println!("Por favor sé más específico.");
                None
            }
        }
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::ComedorError) {
        println!("Error: {}", e);
    }
}
