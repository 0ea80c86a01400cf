//! Utility to check a password against a bcrypt hash.
//! Usage: cargo run --bin verify_hash <password> <hash>

use bcrypt::verify;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: cargo run --bin verify_hash <password> <hash>");
        std::process::exit(1);
    }

    let password = &args[1];
    let hashed = &args[2];

    match verify(password, hashed) {
        Ok(true) => {
            println!("Password matches hash");
        }
        Ok(false) => {
            println!("Password does NOT match hash");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error verifying password: {}", e);
            std::process::exit(1);
        }
    }
}
