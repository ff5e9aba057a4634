// SHA3run - Free and Open Source Software Statement
//
// This project, sha3run, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/help/mod.rs
// Version: 1.0.1
//
// This file holds the usage text printed when the command line is malformed.
//
// Tree Location:
// - src/help/mod.rs (usage text)
// - Depends on: none

/// Short usage text, printed to stdout on argument errors
pub fn usage_text() -> String {
    [
        "To call: #Threads #Thread",
        "(ex: sha3run 8 2 - means 8 threads total and run 2 thread)",
        "",
        "OPTIONS:",
        "  --length <LEN>          Candidate length in characters [default: 5]",
        "  --target <HEX>          Target digest, 64 hex characters",
        "  --bench-samples <COUNT> Benchmark sample count [default: 1000000]",
        "  -t, --threads <COUNT>   CPU threads inside this instance, 0 = auto [default: 1]",
    ]
    .join("\n")
}

/// Print usage text
pub fn display_usage() {
    println!("{}", usage_text());
}

// Changelog:
// - v1.0.1: Listed the optional flags below the positional usage line.
// - v1.0.0: Initial usage text.
