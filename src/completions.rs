use anyhow::{bail, Result};
use clap::Command;
use clap_complete::Shell;
use std::io::{self, Write};

pub fn generate(shell_name: &str, cmd: &mut Command) -> Result<()> {
    let script = render(shell_name, cmd)?;
    io::stdout().write_all(script.as_bytes())?;
    Ok(())
}

pub fn render(shell_name: &str, cmd: &mut Command) -> Result<String> {
    let shell = match shell_name {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        other => bail!("Unsupported shell: {other}"),
    };

    let mut buffer = Vec::new();
    clap_complete::generate(shell, cmd, "linefix", &mut buffer);
    let script = String::from_utf8(buffer)?;
    Ok(match shell {
        Shell::Bash | Shell::Zsh => inject_config_keys(shell, script),
        _ => script,
    })
}

const CONFIG_KEYS: &str = "targets scan_root page_file skip_dirs";

fn inject_config_keys(shell: Shell, script: String) -> String {
    match shell {
        Shell::Zsh => script.replace(":key:_default", &format!(":key:({CONFIG_KEYS})")),
        Shell::Bash => {
            script.replace("opts=\"-h --help <KEY>\"", &format!("opts=\"-h --help {CONFIG_KEYS}\""))
        }
        _ => script,
    }
}
