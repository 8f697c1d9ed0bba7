use std::{
    io::{self, BufRead, Write},
    sync::mpsc::{self, Sender},
    thread,
};

use crate::{eval::eval, parse::*};

use clap::Parser;
use log::LevelFilter;

const PROMPT: &str = "-> ";

/// Is it Prime?
#[derive(Parser)]
#[command(version, about)]
struct CLI {
    /// log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value_t = String::from("warn"))]
    log_level: String,
}

pub fn run() -> anyhow::Result<()> {
    let cli = CLI::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(LevelFilter::Warn))
        .init();

    show_intro(&mut io::stdout())?;

    let (done_tx, done_rx) = mpsc::channel();
    let input = thread::spawn(move || {
        read_user_input(io::stdin().lock(), io::stdout().lock(), done_tx)
    });

    // blocks until the input thread has read its last line
    done_rx.recv()?;

    input
        .join()
        .map_err(|_| anyhow::anyhow!("input thread panicked"))??;

    println!("Goodbye.");
    Ok(())
}

pub fn show_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Is it Prime?")?;
    writeln!(out, "------------")?;
    writeln!(
        out,
        "Enter a whole number, and we'll tell you if it is a prime number or not. Enter q to quit."
    )?;
    show_prompt(out)
}

pub fn show_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}

/// Answers lines from `input` until a quit token or the end of the stream,
/// then fires `done`.
///
/// The prompt for the first line is expected to be on screen already
/// (see [`show_intro`]).
pub fn read_user_input<R: BufRead, W: Write>(
    input: R,
    output: W,
    done: Sender<()>,
) -> anyhow::Result<()> {
    let result = answer_lines(input, output);

    // receiver may already be gone, nobody left to tell
    let _ = done.send(());
    result
}

fn answer_lines<R: BufRead, W: Write>(mut input: R, mut output: W) -> anyhow::Result<()> {
    log::info!("waiting for input");

    let mut buf = vec![];
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            log::info!("end of input");
            return Ok(());
        }

        // bytes that are not utf8 can never form a whole number
        let line = String::from_utf8_lossy(&buf);
        let (reply, done) = check_line(&line);
        if done {
            log::info!("quit requested");
            return Ok(());
        }

        writeln!(output, "{}", reply)?;
        show_prompt(&mut output)?;
    }
}

/// One dispatch step: the text to print for `line` and whether the loop is over.
pub fn check_line(line: &str) -> (String, bool) {
    match parse(line) {
        Ok(Cmd::Quit) => (String::new(), true),
        Ok(Cmd::Check(n)) => {
            let verdict = eval(n);
            log::debug!("{} -> prime: {}", n, verdict.is_prime);
            (verdict.to_string(), false)
        }
        Err(e) => {
            log::debug!("rejected {:?}: {:?}", line.trim(), e);
            (e.to_string(), false)
        }
    }
}
