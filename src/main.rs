use std::{env, fs, path::Path};

use lua_strings::{OPERATIONS, StringsConfig, preload_with};
use mlua::Lua;
use tracing_subscriber::EnvFilter;

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    if verbose {
        args.retain(|arg| arg != "--verbose");
    }
    init_logging(verbose);

    let config = match extract_config(&mut args) {
        Some(config) => config,
        None => std::process::exit(2),
    };

    if args.len() < 2 {
        print_help();
        return;
    }

    if is_lua_file(&args[1]) {
        run_file(&args[1], &config);
        return;
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
        }
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: lua-strings run <script.lua>");
                std::process::exit(2);
            }
            run_file(&args[2], &config);
        }
        "ops" => {
            list_operations(&config);
        }
        other => {
            eprintln!("Error: unknown command `{}`", other);
            print_help();
            std::process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lua_strings=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        "\
lua-strings

Runs Lua scripts with the `strings` module preloaded.

Usage:
  lua-strings <script.lua>
  lua-strings run <script.lua>
  lua-strings ops

Flags:
  --config <file.json>   Read module settings (module_name, global)
  --verbose              Log module registration and callback faults
  -h, --help             Show this help message

Logging:
  RUST_LOG=lua_strings=trace lua-strings run demo.lua
"
    );
}

fn extract_config(args: &mut Vec<String>) -> Option<StringsConfig> {
    let mut config = StringsConfig::default();
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" {
            if i + 1 >= args.len() {
                eprintln!("Usage: lua-strings <script.lua> --config <file.json>");
                return None;
            }
            let path = args.remove(i + 1);
            args.remove(i);
            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(err) => {
                    eprintln!("Error: cannot read config `{}`: {}", path, err);
                    return None;
                }
            };
            match StringsConfig::from_json(&source) {
                Ok(parsed) => config = parsed,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return None;
                }
            }
            continue;
        }
        i += 1;
    }
    Some(config)
}

fn is_lua_file(path: &str) -> bool {
    Path::new(path).extension().and_then(|ext| ext.to_str()) == Some("lua")
}

fn run_file(path: &str, config: &StringsConfig) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Error reading {}: {}", path, err);
            std::process::exit(1);
        }
    };

    let lua = Lua::new();
    if let Err(err) = preload_with(&lua, config) {
        eprintln!("Error: failed to register `{}`: {}", config.module_name, err);
        std::process::exit(1);
    }

    let chunk_name = format!("@{}", path);
    if let Err(err) = lua.load(source.as_str()).set_name(chunk_name).exec() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn list_operations(config: &StringsConfig) {
    for op in OPERATIONS {
        println!("{}.{}", config.module_name, op.signature());
    }
}
