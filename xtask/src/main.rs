//! Build helpers: `cargo xtask man <DIR>` and `cargo xtask completions <SHELL> <DIR>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

const BIN_NAME: &str = "seo-score";

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for seo-score")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Output directory
        #[arg(default_value = "target/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
        Task::Completions { shell, out_dir } => generate_completions(shell, &out_dir),
    }
}

fn generate_man(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let cmd = seo_score::command();
    write_man_page(&cmd, BIN_NAME, out_dir)?;
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        let name = format!("{BIN_NAME}-{}", sub.get_name());
        let sub = sub.clone().name(name.clone());
        write_man_page(&sub, &name, out_dir)?;
    }
    Ok(())
}

fn write_man_page(cmd: &clap::Command, name: &str, out_dir: &Path) -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .render(&mut buffer)
        .with_context(|| format!("failed to render man page for {name}"))?;

    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn generate_completions(shell: Shell, out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut cmd = seo_score::command();
    let path = clap_complete::generate_to(shell, &mut cmd, BIN_NAME, out_dir)
        .with_context(|| format!("failed to generate {shell} completions"))?;
    println!("wrote {}", path.display());
    Ok(())
}
