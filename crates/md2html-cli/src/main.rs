use anyhow::{Context, Result, bail};
use md2html_config::Config;
use md2html_engine::render_reply;
use std::{
    env, fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Convert(Input),
    InitConfig,
    Help,
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [_] => Some(Command::Convert(Input::Stdin)),
        [_, arg] => match arg.as_str() {
            "-" => Some(Command::Convert(Input::Stdin)),
            "-h" | "--help" => Some(Command::Help),
            "--init-config" => Some(Command::InitConfig),
            flag if flag.starts_with("--") => None,
            path => Some(Command::Convert(Input::File(PathBuf::from(path)))),
        },
        _ => None,
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [FILE | -]\n       {program} --init-config\n\n\
         Converts chat Markdown from FILE (or stdin) to HTML on stdout.\n\
         Config file: {}",
        Config::config_path().display()
    )
}

fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn read_input(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
        Input::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
    }
}

/// Writes each fragment on its own, separated by a blank line.
fn write_fragments(out: &mut impl Write, fragments: &[String]) -> io::Result<()> {
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{fragment}")?;
        if !fragment.ends_with('\n') {
            writeln!(out)?;
        }
    }
    out.flush()
}

fn init_config() -> Result<()> {
    let config_path = Config::config_path();
    init_config_at(&config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Writes the default config to `config_path`, refusing to overwrite.
fn init_config_at(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        bail!("Config file already exists at {}", config_path.display());
    }
    Config::default()
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("md2html", String::as_str);

    let Some(command) = parse_args(&args) else {
        eprintln!("{}", usage(program));
        process::exit(1);
    };

    let input = match command {
        Command::Help => {
            println!("{}", usage(program));
            return Ok(());
        }
        Command::InitConfig => return init_config(),
        Command::Convert(input) => input,
    };

    let config = Config::load()
        .context("Failed to load config file")?
        .unwrap_or_default();

    init_logging(config.debug);
    log::debug!("Config path: {}", Config::config_path().display());
    log::debug!("Using config: {config:?}");

    let content = read_input(&input)?;
    let fragments = render_reply(&content, config.max_content_len);
    log::info!(
        "Converted {} chars into {} fragment(s)",
        content.chars().count(),
        fragments.len()
    );

    let stdout = io::stdout();
    write_fragments(&mut stdout.lock(), &fragments).context("Failed to write output")?;

    Ok(())
}
