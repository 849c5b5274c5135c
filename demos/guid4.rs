//! Simple command that prints one or '-n count' random GUID strings

use std::{env, io, io::Write, process::ExitCode};

use guid4::Format;

fn main() -> io::Result<ExitCode> {
    let (count, format) = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-f N|D|P|B|X]",
                    program.as_deref().unwrap_or("guid4")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..count {
        writeln!(buf, "{}", guid4::guid4().format(format))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(usize, Format), String> {
    let mut count = None;
    let mut format = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            "-f" => {
                if format.is_some() {
                    return Err("option 'f' given more than once".to_owned());
                }
                let Some(f_arg) = args.next() else {
                    return Err("argument to option 'f' missing".to_owned());
                };
                match f_arg.parse::<Format>() {
                    Ok(f) => format.replace(f),
                    Err(e) => return Err(e.to_string()),
                };
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok((count.unwrap_or(1), format.unwrap_or_default()))
}
