#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use showdown_cli::{HumanIo, run_with_io};

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    /// What the human seat was shown.
    pub prompts: String,
}

/// Writer whose contents stay readable after it has been boxed away.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn run(args: &[&str]) -> CliResult {
    run_with_input(args, "")
}

/// Runs the CLI in-process with `input` piped to the human seat.
pub fn run_with_input(args: &[&str], input: &str) -> CliResult {
    let prompts = SharedBuf::default();
    let terminal = HumanIo {
        input: Box::new(Cursor::new(input.as_bytes().to_vec())),
        output: Box::new(prompts.clone()),
    };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("showdown").chain(args.iter().copied());
    let exit_code = run_with_io(argv, &mut out, &mut err, terminal);

    let prompts = String::from_utf8(prompts.0.lock().unwrap().clone()).unwrap();
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
        prompts,
    }
}

/// Final standings as `(name, source, stack)`, in printed order.
pub fn standings(stdout: &str) -> Vec<(String, String, u32)> {
    stdout
        .split("=== FINAL STANDINGS ===")
        .nth(1)
        .unwrap_or("")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            // "1. Player_2 (calling): $10150"
            let (_, rest) = line.split_once(". ").unwrap();
            let (name, rest) = rest.split_once(" (").unwrap();
            let (source, stack) = rest.split_once("): $").unwrap();
            (name.to_string(), source.to_string(), stack.parse().unwrap())
        })
        .collect()
}

/// Sets environment variables for the guard's lifetime, restoring the
/// previous values on drop. Callers must hold the `serial` lock.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard {
            restores: Vec::new(),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.restores.push((key.to_string(), std::env::var(key).ok()));
        unsafe {
            std::env::set_var(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.restores.push((key.to_string(), std::env::var(key).ok()));
        unsafe {
            std::env::remove_var(key);
        }
    }

    /// Clears every `SHOWDOWN_*` variable.
    pub fn clean() -> Self {
        let mut guard = Self::new();
        let keys: Vec<String> = std::env::vars()
            .map(|(k, _)| k)
            .filter(|k| k.starts_with("SHOWDOWN_"))
            .collect();
        for key in keys {
            guard.remove(&key);
        }
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}
