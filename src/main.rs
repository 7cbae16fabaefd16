use sh308::flags::Flags;
use sh308::highlight::Highlighter;
use sh308::shell::Shell;
use std::io::{self, IsTerminal};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let flags = match Flags::parse(&args) {
        Ok(flags) => flags,
        Err(e) => {
            // Rejected startup arguments still exit with status 0.
            eprintln!("{}", e);
            return;
        }
    };

    sh308::logging::init();

    let stdin = io::stdin();
    let highlighter = Highlighter::new(io::stderr().is_terminal());
    let mut shell = Shell::new(flags, stdin.lock(), io::stdout(), io::stderr())
        .with_highlighter(highlighter);
    match shell.run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("sh308: {}", e);
            process::exit(1);
        }
    }
}
