use model::{Distance, Fuel};
use thiserror::Error;

/// One parsed, not-yet-validated instruction from an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStation { distance: Distance, fuels: Vec<Fuel> },
    RemoveStation { distance: Distance },
    AddCar { distance: Distance, fuel: Fuel },
    RemoveCar { distance: Distance, fuel: Fuel },
    PlanPath { a: Distance, b: Distance },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("blank line")]
    Blank,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command}: expected {expected}, got {got} argument(s)")]
    WrongArity {
        command: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("not a valid non-negative integer: {0:?}")]
    InvalidNumber(String),
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let keyword = tokens.next().ok_or(ParseError::Blank)?;
    let args: Vec<&str> = tokens.collect();

    match keyword {
        "aggiungi-stazione" => parse_add_station(&args),
        "demolisci-stazione" => {
            let [d] = exact::<1>("demolisci-stazione", &args)?;
            Ok(Command::RemoveStation { distance: number(d)? })
        }
        "aggiungi-auto" => {
            let [d, f] = exact::<2>("aggiungi-auto", &args)?;
            Ok(Command::AddCar {
                distance: number(d)?,
                fuel: number(f)?,
            })
        }
        "rottama-auto" => {
            let [d, f] = exact::<2>("rottama-auto", &args)?;
            Ok(Command::RemoveCar {
                distance: number(d)?,
                fuel: number(f)?,
            })
        }
        "pianifica-percorso" => {
            let [a, b] = exact::<2>("pianifica-percorso", &args)?;
            Ok(Command::PlanPath {
                a: number(a)?,
                b: number(b)?,
            })
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_add_station(args: &[&str]) -> Result<Command, ParseError> {
    if args.len() < 2 {
        return Err(ParseError::WrongArity {
            command: "aggiungi-stazione",
            expected: "at least 2",
            got: args.len(),
        });
    }
    let distance = number(args[0])?;
    let car_count: usize = number::<u32>(args[1])? as usize;
    let rest = &args[2..];
    if rest.len() != car_count {
        return Err(ParseError::WrongArity {
            command: "aggiungi-stazione",
            expected: "n matching the declared car count",
            got: rest.len(),
        });
    }
    let fuels = rest
        .iter()
        .map(|tok| number(tok))
        .collect::<Result<Vec<Fuel>, _>>()?;
    Ok(Command::AddStation { distance, fuels })
}

fn exact<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    args.try_into().map_err(|_| ParseError::WrongArity {
        command,
        expected: const_arity_label(N),
        got: args.len(),
    })
}

fn const_arity_label(n: usize) -> &'static str {
    match n {
        1 => "1",
        2 => "2",
        _ => "a fixed number of",
    }
}

fn number<T: std::str::FromStr>(token: &str) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}
