use anyhow::{bail, Context};
use quadga::config::ConfigManager;
use quadga::engines::generation::ConsoleProgressCallback;
use quadga::report::{render_table, RunReport};
use quadga::EvolutionEngine;
use std::env;
use std::path::PathBuf;

const USAGE: &str = "usage: quadga [CONFIG] [--seed N] [--json OUT] [--describe]";

struct Args {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    json_path: Option<PathBuf>,
    describe: bool,
}

enum Command {
    Run(Args),
    Help,
}

fn parse_args<I: IntoIterator<Item = String>>(raw: I) -> anyhow::Result<Command> {
    let mut args = Args {
        config_path: None,
        seed: None,
        json_path: None,
        describe: false,
    };

    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().context(USAGE)?;
                args.seed = Some(value.parse().with_context(|| format!("invalid seed '{}'", value))?);
            }
            "--json" => args.json_path = Some(iter.next().context(USAGE)?.into()),
            "--describe" => args.describe = true,
            "-h" | "--help" => return Ok(Command::Help),
            path if args.config_path.is_none() => args.config_path = Some(path.into()),
            other => bail!("unexpected argument '{}'\n{}", other, USAGE),
        }
    }

    Ok(Command::Run(args))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = match parse_args(env::args().skip(1))? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let manager = ConfigManager::new();
    match &args.config_path {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => manager.load_from_env()?,
    }
    if let Some(seed) = args.seed {
        manager.update(|c| c.evolution.seed = Some(seed))?;
    }
    let config = manager.get()?;

    if args.describe {
        println!("{}", serde_json::to_string_pretty(&config.manifests())?);
        return Ok(());
    }

    let engine = EvolutionEngine::new(config.evolution.clone())?;
    let result = engine.run(ConsoleProgressCallback::new(engine.config().generations))?;
    let report = RunReport::build(&result, &config.report);

    println!();
    print!("{}", render_table(&report.table));
    println!(
        "Best solution found: a = {}, b = {}, c = {} (fitness {:.6})",
        result.best_solution.genome.a,
        result.best_solution.genome.b,
        result.best_solution.genome.c,
        result.best_solution.fitness
    );

    if let Some(path) = &args.json_path {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "result": &result,
            "report": &report,
        }))?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote run result to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_help_is_not_an_error() {
        assert!(matches!(parse(&["--help"]), Ok(Command::Help)));
        assert!(matches!(parse(&["run.toml", "-h"]), Ok(Command::Help)));
    }

    #[test]
    fn test_run_arguments() {
        match parse(&["run.toml", "--seed", "7", "--json", "out.json", "--describe"]) {
            Ok(Command::Run(args)) => {
                assert_eq!(args.config_path, Some(PathBuf::from("run.toml")));
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.json_path, Some(PathBuf::from("out.json")));
                assert!(args.describe);
            }
            _ => panic!("expected a run command"),
        }
    }

    #[test]
    fn test_bad_arguments_are_errors() {
        assert!(parse(&["--seed", "many"]).is_err());
        assert!(parse(&["--json"]).is_err());
        assert!(parse(&["a.toml", "b.toml"]).is_err());
    }
}
