use crate::app::{Browser, Status};
use crate::input::{Command, ParseError};
use std::io::{self, BufRead, Write};

/// Drive the interactive menu until the user picks Exit or input runs dry.
/// Reads one choice per iteration, dispatches it to the browser, and prints
/// the outcome. Generic over the reader/writer pair so a scripted session can
/// be fed through it.
pub fn run<R, W>(browser: &mut Browser, input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        print_menu(out)?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return finish(out),
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(ParseError::NotANumber(raw)) => {
                // Garbage input gets no message, just a fresh prompt.
                log::debug!("ignoring non-numeric choice {:?}", raw);
                continue;
            }
            Err(ParseError::UnknownChoice(choice)) => {
                log::debug!("ignoring out-of-range choice {}", choice);
                writeln!(out, "Invalid choice!")?;
                continue;
            }
        };

        match command {
            Command::Visit => {
                let url = match prompt_url(input, out, "Enter URL: ")? {
                    Some(url) => url,
                    None => return finish(out),
                };
                let page = browser.visit(&url);
                writeln!(out, "Opened: {}", page)?;
            }
            Command::GoBack => match browser.go_back() {
                Some(page) => writeln!(out, "Current page: {}", page)?,
                None => writeln!(out, "No pages to go back to.")?,
            },
            Command::GoForward => match browser.go_forward() {
                Some(page) => writeln!(out, "Current page: {}", page)?,
                None => writeln!(out, "No pages to go forward to.")?,
            },
            Command::OpenNewTab => {
                let url = match prompt_url(input, out, "Enter URL for new tab: ")? {
                    Some(url) => url,
                    None => return finish(out),
                };
                let page = browser.open_new_tab(&url);
                writeln!(out, "New tab opened with: {}", page)?;
            }
            Command::SwitchTab => match browser.switch_to_next_tab() {
                Some(page) => writeln!(out, "Switched to tab with page: {}", page)?,
                None => writeln!(out, "No other tabs available.")?,
            },
            Command::ShowStatus => print_status(out, &browser.status())?,
            Command::Exit => return finish(out),
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== Browser History Simulation =====")?;
    writeln!(out, "1. Visit new page (current tab)")?;
    writeln!(out, "2. Go Back")?;
    writeln!(out, "3. Go Forward")?;
    writeln!(out, "4. Open New Tab")?;
    writeln!(out, "5. Switch to Next Tab (from queue)")?;
    writeln!(out, "6. Show Status")?;
    writeln!(out, "0. Exit")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

fn print_status<W: Write>(out: &mut W, status: &Status) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== BROWSER STATUS =====")?;
    writeln!(out, "Current page: {}", status.current_page)?;
    writeln!(out, "Back pages : {}", status.back_pages)?;
    writeln!(out, "Forward pages : {}", status.forward_pages)?;
    writeln!(out, "Other open tabs (in queue): {}", status.other_tabs)?;
    writeln!(out, "==========================")
}

fn prompt_url<R, W>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_line(input)
}

/// One line with the trailing newline stripped, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

// End of input behaves like choice 0 so a piped session still exits cleanly.
fn finish<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Exiting...")
}
