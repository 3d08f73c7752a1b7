//! Build automation tasks for the IR blaster.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

const FIRMWARE: &str = "ir-blaster";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the IR blaster firmware", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, firmware for both boards, docs
    CheckAll,
    /// Run the host test suite
    Test,
    /// Build the firmware
    Build {
        #[arg(long, default_value = "pico1")]
        board: Board,
        /// Override IR_BURST_COUNT for this build (e.g. 100 or 200)
        #[arg(long)]
        burst_count: Option<u16>,
    },
    /// Build UF2 firmware file for flashing to Pico
    Uf2 {
        #[arg(long, default_value = "pico1")]
        board: Board,
        #[arg(long)]
        burst_count: Option<u16>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    Pico1,
    Pico2,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pico1 => write!(f, "pico1"),
            Board::Pico2 => write!(f, "pico2"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pico1 => "thumbv6m-none-eabi",
            Board::Pico2 => "thumbv8m.main-none-eabihf",
        }
    }

    fn features(self) -> String {
        format!("{self},arm,defmt")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Test => run_host_tests(),
        Commands::Build { board, burst_count } => build_firmware(board, burst_count, false),
        Commands::Uf2 { board, burst_count } => build_uf2(board, burst_count),
    }
}

fn check_all() -> ExitCode {
    println!("{}", "==> Running host tests...".cyan());
    if run_host_tests() != ExitCode::SUCCESS {
        return ExitCode::FAILURE;
    }

    for board in [Board::Pico1, Board::Pico2] {
        println!("\n{}", format!("==> Building firmware ({board})...").cyan());
        if build_firmware(board, None, false) != ExitCode::SUCCESS {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Building documentation...".cyan());
    let board = Board::Pico1;
    if !run_command(Command::new("cargo").current_dir(workspace_root()).args([
        "doc",
        "--lib",
        "--target",
        board.target(),
        "--no-deps",
        "--features",
        &board.features(),
        "--no-default-features",
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn run_host_tests() -> ExitCode {
    let mut test_cmd = Command::new("cargo");
    test_cmd.current_dir(workspace_root()).arg("test");

    match host_target() {
        Some(target) => {
            println!("  {}", format!("Using host target: {target}").bright_black());
            test_cmd.arg("--target").arg(target);
        }
        None => {
            println!(
                "{}",
                "  Unable to detect host target; relying on cargo default.".bright_black()
            );
        }
    }

    test_cmd.args(["--no-default-features", "--features", "host"]);

    if run_command(&mut test_cmd) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_firmware(board: Board, burst_count: Option<u16>, release: bool) -> ExitCode {
    let target = board.target();
    let features = board.features();
    println!(
        "{}",
        format!("Building {FIRMWARE} with features: {features}").cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(workspace_root()).args([
        "build",
        "--bin",
        FIRMWARE,
        "--target",
        target,
        "--features",
        &features,
        "--no-default-features",
    ]);
    if release {
        cmd.arg("--release");
    }
    if let Some(burst_count) = burst_count {
        println!("  IR_BURST_COUNT: {}", burst_count.bright_black());
        cmd.env("IR_BURST_COUNT", burst_count.to_string());
    }

    if run_command(&mut cmd) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_uf2(board: Board, burst_count: Option<u16>) -> ExitCode {
    let target = board.target();
    println!("{}", format!("Building UF2 for {board}").cyan());
    println!("  Target: {}", target.bright_black());

    // Build in release mode for UF2
    if build_firmware(board, burst_count, true) != ExitCode::SUCCESS {
        return ExitCode::FAILURE;
    }

    let elf_path = format!("target/{target}/release/{FIRMWARE}");
    let uf2_path = format!("{FIRMWARE}-{board}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(workspace_root())
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

fn workspace_root() -> std::path::PathBuf {
    // xtask runs via the `cargo xtask` alias from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("host: "))
        .map(|host| host.trim().to_string())
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
