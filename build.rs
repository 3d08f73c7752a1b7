use std::{
    env, fs,
    path::{Path, PathBuf},
};

const DEFAULT_BURST_COUNT: &str = "200";

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv8m") {
        // Pico 2 (RP2350)
        copy_memory_x("memory-pico2.x", &out_dir);
        link_args(&["--nmagic", "-Tlink.x", "-Tdefmt.x"]);
    } else if target.starts_with("thumbv6m") {
        // Pico 1 (RP2040) also needs the second-stage bootloader section
        copy_memory_x("memory-pico1.x", &out_dir);
        link_args(&["--nmagic", "-Tlink.x", "-Tlink-rp.x", "-Tdefmt.x"]);
    }

    // 2) Load optional env files (still supported for convenience)
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");
    load_home_env(".env");

    // 3) Burst repeat count, validated here so a typo fails the build with a clear message
    let burst_count = env_or_default("IR_BURST_COUNT", DEFAULT_BURST_COUNT);
    match burst_count.parse::<u16>() {
        Ok(0) => println!("cargo:warning=IR_BURST_COUNT is 0; button presses will send nothing"),
        Ok(_) => {}
        Err(err) => panic!("IR_BURST_COUNT={burst_count:?} is not a valid u16: {err}"),
    }

    // 4) Expose as compile-time constants
    println!("cargo:rustc-env=IR_BURST_COUNT={burst_count}");

    println!("cargo:rerun-if-env-changed=IR_BURST_COUNT");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=build.rs");
}

fn copy_memory_x(file: &str, out_dir: &Path) {
    let memory_x = fs::read_to_string(file).unwrap_or_else(|err| panic!("Failed to read {file}: {err}"));
    let dest = out_dir.join("memory.x");
    fs::write(&dest, memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={file}");
}

fn link_args(args: &[&str]) {
    for arg in args {
        println!("cargo:rustc-link-arg-bins={arg}");
    }
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let path = home.join(file);
    let _ = dotenvy::from_path(&path);
}

fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
