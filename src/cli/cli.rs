//! Interactive CLI over the point ledger.
//!
//! Reads one command per line, e.g. `register alice`, `update alice -3`,
//! `board`. Admin commands take `--password` or prompt for it.
use super::*;
use crate::*;
use colored::Colorize;
use std::io::Write;

pub struct CLI<S> {
    book: Book<S>,
    gate: Gate,
}

impl From<Settings> for CLI<Disk> {
    fn from(settings: Settings) -> Self {
        Self::new(settings.book(), settings.gate())
    }
}

impl<S> CLI<S>
where
    S: Store,
{
    pub fn new(book: Book<S>, gate: Gate) -> Self {
        Self { book, gate }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        log::info!("entering points ledger");
        let ref mut stdout = std::io::stdout();
        loop {
            print!("> ");
            stdout.flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input, stdout) {
                    Err(e) => eprintln!("{}", e),
                    Ok(_) => continue,
                },
            }
        }
        Ok(())
    }

    pub fn handle(&self, input: &str, out: &mut impl Write) -> anyhow::Result<()> {
        match Query::read(input)? {
            Query::Register { user } => match self.book.register(&user)? {
                true => writeln!(out, "registered {}", user)?,
                false => writeln!(out, "{} already exists", user)?,
            },
            Query::Points { user } => match self.book.get(&user)? {
                Some(points) => writeln!(out, "{} has {} points", user, points)?,
                None => writeln!(out, "{} is not registered", user)?,
            },
            Query::Roster => {
                let ledger = self.book.load()?;
                match ledger.is_empty() {
                    true => writeln!(out, "no players registered yet")?,
                    false => write!(out, "{}", ledger)?,
                }
            }
            Query::Board => {
                let board = self.book.leaderboard()?;
                for row in board.iter() {
                    let line = row.to_string();
                    match row.highlight() {
                        Highlight::Top => writeln!(out, "{}", line.yellow().bold())?,
                        Highlight::Negative => writeln!(out, "{}", line.red())?,
                        Highlight::None => writeln!(out, "{}", line)?,
                    }
                }
                writeln!(out, "last updated {}", self.book.stamp()?)?;
            }
            Query::Stamp => writeln!(out, "{}", self.book.stamp()?)?,
            Query::Update {
                user,
                delta,
                password,
            } => {
                self.authorize(password)?;
                match self.book.update(&user, delta)? {
                    Some(points) => writeln!(out, "{} {:+}, now {} points", user, delta, points)?,
                    None => writeln!(out, "{} is not registered, nothing changed", user)?,
                }
            }
            Query::Set {
                user,
                value,
                password,
            } => {
                self.authorize(password)?;
                match self.book.set(&user, value)? {
                    Some(points) => writeln!(out, "{} now has {} points", user, points)?,
                    None => writeln!(out, "{} is not registered, nothing changed", user)?,
                }
            }
            Query::Import { file, password } => {
                self.authorize(password)?;
                let ref document = std::fs::read_to_string(&file)?;
                let ledger = self.book.import(document)?;
                writeln!(out, "imported {} players from {}", ledger.len(), file.display())?;
            }
            Query::Export { file, password } => {
                self.authorize(password)?;
                std::fs::write(&file, self.book.export()?)?;
                writeln!(out, "exported ledger to {}", file.display())?;
            }
            Query::Digest { password } => writeln!(out, "{}", digest(&password))?,
        }
        Ok(())
    }

    fn authorize(&self, password: Option<String>) -> anyhow::Result<()> {
        let password = match password {
            Some(password) => password,
            None => dialoguer::Password::new()
                .with_prompt("admin password")
                .interact()?,
        };
        match self.gate.admits(&password) {
            true => Ok(()),
            false => Err(anyhow::anyhow!("wrong admin password")),
        }
    }
}
