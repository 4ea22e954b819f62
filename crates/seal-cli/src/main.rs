//! `seal-demo`: run one self-edit generation step on an ARC task

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use seal_core::{ChatTemplate, DemoSettings, SelfEditDemo};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("seal-demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("SEAL self-edit demo: turn an ARC task into a self-edit configuration")
        .arg(
            Arg::new("task")
                .long("task")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("ARC task JSON file [default: sample_task.json]"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("TOML settings file; flags override its values"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .help("Random seed for a reproducible simulated choice"),
        )
        .arg(
            Arg::new("preset")
                .long("preset")
                .value_parser(value_parser!(u8).range(1..=3))
                .help("Always use this preset (1-3) instead of simulating"),
        )
        .arg(
            Arg::new("preview-chars")
                .long("preview-chars")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Prompt characters shown in the preview [default: 500]"),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .value_parser(["llama3", "plain"])
                .help("Chat template used to frame the prompt [default: llama3]"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print only the generated configuration as JSON"),
        )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Settings from `--config` (or defaults), then flag overrides
fn settings_from(matches: &ArgMatches) -> Result<DemoSettings> {
    let mut settings = match matches.get_one::<PathBuf>("config") {
        Some(path) => DemoSettings::load(path)?,
        None => DemoSettings::new(),
    };

    if let Some(path) = matches.get_one::<PathBuf>("task") {
        settings = settings.with_task_path(path.clone());
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        settings = settings.with_seed(seed);
    }
    if let Some(&preset) = matches.get_one::<u8>("preset") {
        settings = settings.with_preset(usize::from(preset));
    }
    if let Some(&chars) = matches.get_one::<usize>("preview-chars") {
        settings = settings.with_preview_chars(chars);
    }
    if let Some(name) = matches.get_one::<String>("template") {
        let template: ChatTemplate = name.parse()?;
        settings = settings.with_template(template);
    }

    Ok(settings)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let settings = settings_from(matches)?;
    tracing::debug!(?settings, "resolved settings");

    let generator = settings.generator().context("invalid settings")?;
    let mut demo = SelfEditDemo::new(settings, generator);

    if matches.get_flag("json") {
        let outcome = demo.generate()?;
        let json = outcome
            .config
            .to_pretty_json()
            .context("failed to serialize configuration")?;
        println!("{json}");
    } else {
        let stdout = io::stdout();
        demo.run(&mut stdout.lock())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let matches = cli().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
