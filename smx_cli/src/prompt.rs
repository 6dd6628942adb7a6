use std::io::{self, Write};

use sm_schema::{ChartType, Difficulty};

pub fn chart_type() -> anyhow::Result<ChartType> {
    let tags: Vec<&str> = ChartType::ALL.iter().map(|t| t.tag()).collect();
    let message = format!("Enter chart type ({}): ", tags.join(", "));
    loop {
        match read_line(&message)?.parse::<ChartType>() {
            Ok(t) => return Ok(t),
            Err(e) => eprintln!("{e}"),
        }
    }
}

pub fn difficulty() -> anyhow::Result<Difficulty> {
    let tags: Vec<&str> = Difficulty::ALL.iter().map(|d| d.tag()).collect();
    let message = format!("Enter chart difficulty ({}): ", tags.join(", "));
    loop {
        match read_line(&message)?.parse::<Difficulty>() {
            Ok(d) => return Ok(d),
            Err(e) => eprintln!("{e}"),
        }
    }
}

pub fn number(message: &str) -> anyhow::Result<usize> {
    loop {
        match read_line(message)?.parse::<usize>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("enter a non-negative measure number"),
        }
    }
}

fn read_line(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        anyhow::bail!("stdin closed while waiting for input");
    }
    Ok(line.trim().to_string())
}
