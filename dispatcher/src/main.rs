use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use model::{Config, Highway};

use dispatcher::{cli::Cli, command, dispatch, init_tracing};

fn load_config(path: Option<&std::path::Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    match fs::read_to_string(path).and_then(|contents| {
        serde_json::from_str(&contents).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load config, using defaults");
            Config::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref());
    let mut highway = Highway::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    let mut buf: Vec<u8> = Vec::new();

    loop {
        buf.clear();
        let bytes_read = match reader.read_until(b'\n', &mut buf) {
            Ok(n) => n,
            Err(err) => {
                tracing::error!(%err, "failed reading from standard input");
                return ExitCode::FAILURE;
            }
        };
        if bytes_read == 0 {
            return ExitCode::SUCCESS;
        }
        if buf.len() > config.max_line_length {
            tracing::error!(
                len = buf.len(),
                limit = config.max_line_length,
                "input line exceeds the maximum accepted length"
            );
            return ExitCode::FAILURE;
        }

        while matches!(buf.last(), Some(b'\n') | Some(b'\r')) {
            buf.pop();
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match command::parse(line) {
            Ok(command) => {
                let reply = dispatch::execute(&mut highway, command);
                if writeln!(writer, "{reply}").is_err() {
                    tracing::error!("failed writing to standard output");
                    return ExitCode::FAILURE;
                }
            }
            Err(err) => {
                tracing::warn!(%err, line, "command syntax error");
                eprintln!("Command syntax error");
            }
        }
    }
}
