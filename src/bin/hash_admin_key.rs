// src/bin/hash_admin_key.rs

//! Prints the Argon2 hash to put in `ADMIN_KEY_HASH`.
//!
//! Usage: `hash_admin_key <key>`

use cuestionario::utils::hash::hash_secret;

fn main() {
    let Some(key) = std::env::args().nth(1) else {
        eprintln!("usage: hash_admin_key <key>");
        std::process::exit(2);
    };

    match hash_secret(&key) {
        Ok(hash) => println!("{}", hash),
        Err(e) => {
            eprintln!("Failed to hash key: {}", e);
            std::process::exit(1);
        }
    }
}
