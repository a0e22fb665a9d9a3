pub mod context;
pub mod order_commands;

use std::path::Path;

use rusqlite::Connection;

use crate::db::{draft_repo, schema};
use crate::directory::DirectoryConfig;
use crate::ops::roster_ops;
use context::OrderContext;

/// Run the interactive ordering flow.
pub fn run(db_path: &Path) {
    println!("Talleres Esperanza - Pedido de Almuerzo");
    println!("Escribe 'help' para ver los comandos, 'exit' para salir.");
    println!();

    let conn = match Connection::open(db_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error al abrir el almacén local: {}", e);
            return;
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Error al inicializar el almacén local: {}", e);
        return;
    }

    // Blocking fetch: nothing is interactive until the roster is in.
    println!("Cargando personas...");
    let config = DirectoryConfig::from_env();
    let people = roster_ops::load_roster(config.as_ref());

    let drafts = match draft_repo::load(&conn) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error al cargar los pedidos guardados: {}", e);
            return;
        }
    };

    let mut ctx = OrderContext::new(conn, people, drafts);
    println!();
    order_commands::list(&ctx);

    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut OrderContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "list" | "ls" | "people" => order_commands::list(ctx),
            "order" => order_commands::order(ctx, args),
            "none" => order_commands::no_meal(ctx, args),
            "reset" => order_commands::reset(ctx, args),
            "progress" => order_commands::progress(ctx),
            "summary" => order_commands::summary(ctx),
            "continue" => order_commands::continue_to_summary(ctx),
            "clear" => order_commands::clear(ctx),

            _ => println!("Comando desconocido: {}. Escribe 'help' para ver los comandos.", command),
        }
    }
}

/// Parse input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(
        r#"
COMANDOS:

  list                Lista a todos con el estado de su pedido
  order <nombre>      Elige las opciones de almuerzo de una persona
  none <nombre>       Marca a una persona como "sin almuerzo"
  reset <nombre>      Quita el pedido de una persona (vuelve a pendiente)
  progress            Muestra el progreso de los pedidos
  summary             Muestra el resumen (solo cuando está completo)
  continue            Guarda los pedidos y continúa al resumen
  clear               Descarta todos los pedidos
  help                Muestra esta ayuda
  exit / quit / q     Salir
"#
    );
}
