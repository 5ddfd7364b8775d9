//! Shell command parsing
//!
//! A line is a verb followed by an optional argument. Everything after the
//! verb is the argument, so vertex names may contain spaces.

use anyhow::{anyhow, bail, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new traversal from vertices with this name
    Node(String),
    In(String),
    Out(String),
    Both(String),
    Take(usize),
    Unique,
    Except(String),
    /// Evaluate the current traversal and print its results
    Exec,
    /// List databases in the data directory
    List,
    /// Open a database, replacing the current graph
    Load(String),
    /// Save the current graph
    Save,
    /// Dump the whole graph
    Print,
    Help,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        let required = |what: &str| -> Result<String> {
            if arg.is_empty() {
                Err(anyhow!("usage: {} <{}>", verb, what))
            } else {
                Ok(arg.to_string())
            }
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "node" | "v" => Command::Node(required("name")?),
            "in" => Command::In(required("relationship")?),
            "out" => Command::Out(required("relationship")?),
            "both" => Command::Both(required("relationship")?),
            "take" | "limit" => {
                let n = required("n")?;
                let n = n
                    .parse()
                    .map_err(|_| anyhow!("take expects a non-negative integer, got {:?}", n))?;
                Command::Take(n)
            }
            "unique" => Command::Unique,
            "except" => Command::Except(required("id")?),
            "exec" | "values" => Command::Exec,
            "list" => Command::List,
            "load" | "open" => Command::Load(required("database")?),
            "save" => Command::Save,
            "print" => Command::Print,
            "help" | "?" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "" => bail!("empty command"),
            other => bail!("unknown command {:?} (try `help`)", other),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  node <name>      Start a traversal from vertices named <name>
  in <rel>         Follow incoming <rel> edges
  out <rel>        Follow outgoing <rel> edges
  both <rel>       Follow <rel> edges in either direction
  take <n>         Keep the first <n> results
  unique           Drop repeated vertices
  except <id>      Drop the vertex with id <id>
  exec             Run the traversal and print the results
  list             List databases in the data directory
  load <db>        Open a database
  save             Save the current graph
  print            Print the whole graph as JSON
  help             Show this message
  exit             Leave the shell";
