//! Prints an Argon2id PHC string for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `cargo run --bin hash-password -- <password>`, or pipe the password
//! on stdin to keep it out of shell history.

use std::io::{self, BufRead};
use std::process::ExitCode;

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand_core::OsRng;

fn env_u32(key: &str, default: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn read_password() -> io::Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn hash(password: &str) -> Result<String, String> {
    // Budget VPS friendly defaults: 4MB memory, 3 iterations, 1 lane
    let params = Params::new(
        env_u32("ARGON2_MEMORY_KIB", 4 * 1024),
        env_u32("ARGON2_ITERATIONS", 3),
        env_u32("ARGON2_PARALLELISM", 1),
        None,
    )
    .map_err(|e| format!("invalid Argon2 parameters: {e}"))?;

    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| format!("hashing failed: {e}"))
}

fn main() -> ExitCode {
    let password = match read_password() {
        Ok(p) if !p.is_empty() => p,
        Ok(_) => {
            eprintln!("usage: hash-password <password>  (or pass it on stdin)");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("could not read password: {e}");
            return ExitCode::FAILURE;
        }
    };

    match hash(&password) {
        Ok(phc) => {
            println!("{phc}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
