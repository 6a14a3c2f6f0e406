use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "pathpick";

/// Generate shell completion scripts on stdout
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());

    // Hints go to stderr so the script can be piped straight into a file
    match shell {
        Shell::Bash => eprintln!("# eval \"$({} completion bash)\"", BIN_NAME),
        Shell::Zsh => eprintln!(
            "# {} completion zsh > ~/.local/share/zsh/site-functions/_{}",
            BIN_NAME, BIN_NAME
        ),
        Shell::Fish => eprintln!(
            "# {} completion fish > ~/.config/fish/completions/{}.fish",
            BIN_NAME, BIN_NAME
        ),
        Shell::PowerShell => {
            eprintln!("# Invoke-Expression (& {} completion powershell)", BIN_NAME)
        },
        _ => {},
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_generation() {
        let shells = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

        for shell in shells {
            let mut cmd = Cli::command();
            let mut output = Vec::new();
            generate(shell, &mut cmd, BIN_NAME, &mut output);

            assert!(
                !output.is_empty(),
                "No completion script generated for {:?}",
                shell
            );
        }
    }
}
