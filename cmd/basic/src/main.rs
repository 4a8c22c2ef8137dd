//! Basic basekit example
//!
//! Parses `key = value` lines (from a file given as the first argument, or a
//! built-in sample) with the string helpers and reports failures through the
//! coded `Result`.
//!
//! # Environment Variables
//!
//! - `BASEKIT_FLUSH_EPRINT=1` - Flush log output immediately
//! - `BASEKIT_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)

use basekit::strings::{consume_prefix, equals_ignore_case, join, split, string_replace, tokenize, trim};
use basekit::{errorf, kdebug, kinfo, kwarn, or_return, Error, Result, ResultError, ResultExt};

const SAMPLE: &str = "\
# sample settings
name = basekit demo
Workers = 4
mode=FAST
tags = a, b,, c
bogus line
";

struct Setting {
    key: String,
    value: String,
}

fn parse_line(lineno: usize, line: &str) -> Result<Option<Setting>> {
    let mut rest = line;
    if consume_prefix(&mut rest, "#") || trim(rest).is_empty() {
        return Ok(None);
    }
    let parts = split(rest, "=");
    if parts.len() != 2 {
        return errorf!("line {}: expected key = value, got '{}'", lineno, trim(line)).into();
    }
    Ok(Some(Setting {
        key: trim(&parts[0]).to_ascii_lowercase(),
        value: trim(&parts[1]),
    }))
}

fn parse_all(text: &str) -> (Vec<Setting>, Vec<ResultError>) {
    let mut settings = Vec::new();
    let mut errors = Vec::new();
    for (i, line) in split(text, "\n").iter().enumerate() {
        match parse_line(i + 1, line) {
            Ok(Some(setting)) => settings.push(setting),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }
    (settings, errors)
}

fn workers(settings: &[Setting]) -> Result<u32> {
    let setting = settings
        .iter()
        .find(|s| s.key == "workers")
        .ok_or_else(|| Error::new().append("no workers setting").finish())?;
    let n = or_return!(setting
        .value
        .parse::<u32>()
        .map_err(|e| Error::new().append("workers: ").append(e).finish()));
    Ok(n)
}

fn load(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(ResultError::from)
            .with_context(|| format!("reading {}", path)),
        None => Ok(SAMPLE.to_string()),
    }
}

fn main() {
    println!("=== basekit Basic Example ===\n");

    let path = std::env::args().nth(1);
    let text = match load(path.as_deref()).context("loading settings") {
        Ok(text) => text,
        Err(err) => {
            kwarn!("{} (errno {})", err, err.code().value());
            std::process::exit(1);
        }
    };

    let (settings, errors) = parse_all(&text);
    kinfo!("{} setting(s), {} error(s)", settings.len(), errors.len());

    for s in &settings {
        kdebug!("{} -> '{}'", s.key, s.value);
        println!("{:>10} = {}", s.key, s.value);
        if s.key == "tags" {
            println!("{:>10}   split:    [{}]", "", join(split(&s.value, ","), "|"));
            println!("{:>10}   tokenize: [{}]", "", join(tokenize(&s.value, ", "), "|"));
        }
        if s.key == "mode" && equals_ignore_case(&s.value, "fast") {
            println!("{:>10}   (fast mode)", "");
        }
    }

    for err in &errors {
        println!("error: {}", err);
    }

    match workers(&settings) {
        Ok(n) => println!("\nworkers: {}", n),
        Err(err) => println!("\nworkers: {}", err),
    }

    println!("\n{}", string_replace("=== Example Complete ===", "=", "-", true));
}
