use crate::error::Result;
use std::io::{stdin, stdout, Write};
use std::path::Path;

/// Questions asked of the user while a run is in progress.
pub trait Prompt: Send {
	/// Blocks until the user is ready for the download to start.
	fn wait_for_start(&mut self) -> Result<()>;

	/// Returns `true` when `path` may be overwritten.
	fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

/// Asks on the terminal. Must be used from a multi-threaded runtime.
pub struct StdinPrompt;

fn read_answer() -> Result<String> {
	let mut answer = String::new();
	// Hand the worker's other tasks (and the ctrl-c listener) off while we wait on stdin.
	tokio::task::block_in_place(|| stdin().read_line(&mut answer))?;
	Ok(answer.trim().to_owned())
}

/// An empty answer counts as yes.
pub fn is_yes(answer: &str) -> bool {
	answer.is_empty() || answer.eq_ignore_ascii_case("y")
}

impl Prompt for StdinPrompt {
	fn wait_for_start(&mut self) -> Result<()> {
		let mut out = stdout();
		out.write_all(b"Press enter to continue...")?;
		out.flush()?;
		read_answer()?;
		Ok(())
	}

	fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
		let mut out = stdout();
		writeln!(out, "\nFile \"{}\" already exists", path.display())?;
		out.write_all(b"Overwrite? (Y/n) ")?;
		out.flush()?;
		if is_yes(&read_answer()?) {
			return Ok(true);
		}
		writeln!(out, "Skipping...")?;
		Ok(false)
	}
}
