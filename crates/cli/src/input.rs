//! Console input helpers. Invalid input re-prompts; optional prompts treat
//! an empty line as "keep the current value".

use std::io::{self, Write};

use chrono::NaiveDate;
use prodtrack_core::TaskStatus;

/// Print a prompt and read one trimmed line.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Read a non-empty string, re-prompting until one is given.
pub fn read_nonempty(label: &str) -> io::Result<String> {
    loop {
        let value = prompt(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("! Cannot be empty.");
    }
}

/// Read a value with a `FromStr` type, re-prompting on parse failure.
pub fn read_parsed<T: std::str::FromStr>(label: &str) -> io::Result<T> {
    loop {
        match prompt(label)?.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("! Invalid value."),
        }
    }
}

/// Read a task status from its numeric menu encoding.
pub fn read_status(label: &str) -> io::Result<TaskStatus> {
    loop {
        let index: u8 = read_parsed(label)?;
        match TaskStatus::from_index(index) {
            Some(status) => return Ok(status),
            None => println!("! Value must be between 0 and 2."),
        }
    }
}

/// Read a `yyyy-mm-dd` date, re-prompting on parse failure.
pub fn read_date(label: &str) -> io::Result<NaiveDate> {
    loop {
        match NaiveDate::parse_from_str(&prompt(label)?, "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => println!("! Invalid date format."),
        }
    }
}

/// Read an optional string; empty input means `None`.
pub fn read_optional(label: &str) -> io::Result<Option<String>> {
    let value = prompt(label)?;
    Ok((!value.is_empty()).then_some(value))
}

/// Read an optional parsed value; empty or unparsable input means `None`.
pub fn read_optional_parsed<T: std::str::FromStr>(label: &str) -> io::Result<Option<T>> {
    Ok(prompt(label)?.parse().ok())
}

/// Read an optional status index; empty or out-of-range input means `None`.
pub fn read_optional_status(label: &str) -> io::Result<Option<TaskStatus>> {
    let index: Option<u8> = read_optional_parsed(label)?;
    Ok(index.and_then(TaskStatus::from_index))
}

/// Read an optional `yyyy-mm-dd` date; empty or invalid input means `None`.
pub fn read_optional_date(label: &str) -> io::Result<Option<NaiveDate>> {
    Ok(NaiveDate::parse_from_str(&prompt(label)?, "%Y-%m-%d").ok())
}
