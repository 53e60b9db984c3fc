//! The interactive command loop.

use std::io;

use ramfs_core::FileStore;
use tracing::{debug, info, warn};

use crate::command::{parse_args, Command};
use crate::console::{read_line, Console};

/// Printed before each command line.
pub const PROMPT: &str = "ramfs> ";

/// Printed once when the loop starts.
pub const BANNER: &str = "\n\
========================================\n\
\x20           ramfs shell\n\
========================================\n\
\n\
Type 'help' for available commands.\n\
\n";

const HELP: &str = "\n\
Available commands:\n\
\x20 help              - Show this help message\n\
\x20 clear             - Clear the screen\n\
\x20 echo <text>       - Print text to console\n\
\x20 ls                - List all files\n\
\x20 cat <filename>    - Display file contents\n\
\x20 edit <file> <txt> - Create/edit a file\n\
\x20 rm <filename>     - Delete a file\n\
\x20 stat              - Show table and heap usage\n\
\n";

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Command shell over a [`FileStore`].
///
/// The shell owns its store. Every command writes its reply to the
/// console passed in; errors from the store are reported there and never
/// end the loop. Only console I/O errors propagate.
pub struct Shell<S> {
    store: S,
    echo: bool,
}

impl<S: FileStore> Shell<S> {
    /// A shell over `store` with input echo off.
    pub fn new(store: S) -> Self {
        Self { store, echo: false }
    }

    /// Echo typed input back to the console, for raw terminals that do
    /// not echo on their own.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Borrow the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consume the shell, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Print the banner, then prompt and execute lines until input ends.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> io::Result<()> {
        console.write_str(BANNER)?;
        loop {
            console.write_str(PROMPT)?;
            console.flush()?;
            let Some(line) = read_line(console, self.echo)? else {
                break;
            };
            self.execute(&line, console)?;
        }
        console.write_str("\n")?;
        console.flush()?;
        info!("end of input, shell exiting");
        Ok(())
    }

    /// Parse and execute one command line.
    pub fn execute<C: Console + ?Sized>(&mut self, line: &str, console: &mut C) -> io::Result<()> {
        let args = parse_args(line);
        let command = match Command::parse(&args) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(usage) => return console.write_str(&format!("{usage}\n")),
        };
        debug!(?command, "executing command");

        match command {
            Command::Help => console.write_str(HELP),
            Command::Clear => console.write_str(CLEAR_SCREEN),
            Command::Echo(text) => console.write_str(&format!("{text}\n")),
            Command::Ls => self.list(console),
            Command::Cat(name) => match self.store.read(name) {
                Some(content) => {
                    console.write_bytes(content)?;
                    console.write_str("\n")
                }
                None => not_found(console, name),
            },
            Command::Edit { name, content } => match self.store.write(name, content.as_bytes()) {
                Ok(()) => console.write_str(&format!("File '{name}' saved.\n")),
                Err(err) => {
                    warn!(name, error = %err, "edit failed");
                    console.write_str(&format!("Error: Could not save file: {err}.\n"))
                }
            },
            Command::Rm(name) => match self.store.delete(name) {
                Ok(()) => console.write_str(&format!("File '{name}' deleted.\n")),
                Err(_) => not_found(console, name),
            },
            Command::Stat => self.stat(console),
            Command::Unknown(word) => console.write_str(&format!(
                "Unknown command: {word}\nType 'help' for available commands.\n"
            )),
        }
    }

    fn list<C: Console + ?Sized>(&self, console: &mut C) -> io::Result<()> {
        if self.store.count() == 0 {
            return console.write_str("No files.\n");
        }
        let mut out = String::from("Files:\n");
        self.store
            .list(&mut |name, size| out.push_str(&format!("  {name} ({size} bytes)\n")));
        console.write_str(&out)
    }

    fn stat<C: Console + ?Sized>(&self, console: &mut C) -> io::Result<()> {
        let s = self.store.stats();
        console.write_str(&format!(
            "Slots: {}/{} used ({} free)\n\
             Content: {} bytes\n\
             Heap: {}/{} bytes used ({} free)\n\
             Allocated: {} bytes\n\
             Rollbacks: {}\n",
            s.files,
            s.capacity,
            s.free_slots(),
            s.content_bytes,
            s.heap_used,
            s.heap_capacity,
            s.heap_remaining(),
            s.allocated_bytes,
            s.rollbacks,
        ))
    }
}

fn not_found<C: Console + ?Sized>(console: &mut C, name: &str) -> io::Result<()> {
    console.write_str(&format!("Error: File '{name}' not found.\n"))
}
