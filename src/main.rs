use anyhow::Result;
use clap::{CommandFactory, Parser};

use linefix::cli::{Cli, Commands, ConfigCmd};
use linefix::collapse::CollapseMode;
use linefix::fixer::{self, FixOptions};
use linefix::line::{self, LineEdit};
use linefix::report::Console;
use linefix::{completions, config, scan, targets};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => cmd_fix(Vec::new(), false),
        Some(Commands::Fix {
            paths,
            until_stable,
        }) => cmd_fix(paths, until_stable),
        Some(Commands::Scan { root, name }) => cmd_scan(root.as_deref(), name.as_deref()),
        Some(Commands::ReplaceLine {
            files,
            line: line_no,
            replacement,
            drop_continuation,
        }) => {
            let edit = LineEdit {
                line: line_no,
                replacement,
                drop_continuation,
            };
            line::run_replace_line(&files, &edit, &mut Console::stdout())
        }
        Some(Commands::Config { cmd }) => cmd_config(cmd),
        Some(Commands::Completions { shell }) => completions::generate(&shell, &mut Cli::command()),
    }
}

fn cmd_fix(paths: Vec<String>, until_stable: bool) -> Result<()> {
    let paths = if paths.is_empty() {
        let cfg = config::load_or_default()?;
        if cfg.targets.is_empty() {
            eprintln!("warning: no targets configured; falling back to the built-in list.");
            targets::default_targets()
        } else {
            cfg.targets
        }
    } else {
        paths
    };
    let opts = FixOptions {
        collapse: if until_stable {
            CollapseMode::UntilStable
        } else {
            CollapseMode::SinglePass
        },
        ..FixOptions::default()
    };
    fixer::fix_paths(&paths, &opts, &mut Console::stdout())?;
    Ok(())
}

fn cmd_scan(root_flag: Option<&str>, name_flag: Option<&str>) -> Result<()> {
    let cfg = config::load_or_default()?;
    let root = targets::host_path(root_flag.unwrap_or(&cfg.scan_root));
    let file_name = name_flag.unwrap_or(&cfg.page_file);
    scan::run_scan(
        &scan::ScanArgs {
            root: &root,
            file_name,
            skip_dirs: &cfg.skip_dirs,
        },
        &mut Console::stdout(),
    )?;
    Ok(())
}

fn cmd_config(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Get { key } => {
            let cfg = config::load_or_default()?;
            println!("{}", cfg.get(&key)?);
        }
        ConfigCmd::Set { key, value } => {
            let mut cfg = config::load_or_default()?;
            cfg.set(&key, &value)?;
            config::save(&cfg)?;
            println!("ok");
        }
    }
    Ok(())
}
