use std::path::PathBuf;

fn main() {
    pretty_env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("comedor - lunch order drafting for Talleres Esperanza");
                println!();
                println!("Usage: comedor [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>   Local store path (default: .data/comedor.db)");
                println!("  -h, --help          Show this help");
                println!();
                println!("Environment:");
                println!("  COMEDOR_API_URL     Base URL of the people directory backend");
                println!("  COMEDOR_API_KEY     API key for the directory backend");
                println!();
                println!("Without a configured backend a fixed sample roster is used.");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = db_path.unwrap_or_else(|| {
        let dir = PathBuf::from(".data");
        if !dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&dir) {
                eprintln!("Error: failed to create .data directory: {}", e);
                std::process::exit(1);
            }
        }
        dir.join("comedor.db")
    });

    comedor::cli::run(&db_path);
}
