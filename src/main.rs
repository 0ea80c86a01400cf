/**
 * Hash Generator - Main entry point
 *
 * Small command-line utility that computes a salted bcrypt hash of a
 * plaintext string and prints it to standard output. Used to produce
 * password hashes by hand, e.g. when seeding an administrator account.
 */

use std::process;

mod config;  // Plaintext and work factor resolution
mod hasher;  // bcrypt hashing and verification

/**
 * Main application entry point
 *
 * Resolves the plaintext and work factor from command-line arguments,
 * environment variables, or the built-in defaults, then computes the
 * hash on a blocking worker and prints the result:
 * - success: a label line plus the hash string on stdout, exit code 0
 * - failure: an error message on stderr, exit code 1
 */
#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = match config::HashConfig::from_env_and_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    match hasher::hash_password_async(config.plaintext.clone(), config.cost).await {
        Ok(hashed) => {
            println!("Password hash for '{}':", config.plaintext);
            println!("{}", hashed);
        }
        Err(e) => {
            eprintln!("Error hashing password: {}", e);
            process::exit(1);
        }
    }
}
