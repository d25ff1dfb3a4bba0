use owo_colors::OwoColorize;

pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn info<S: AsRef<str>>(&self, message: S) {
        println!("{}", message.as_ref());
    }

    pub fn success<S: AsRef<str>>(&self, message: S) {
        println!("{}", message.as_ref().green());
    }

    pub fn warn<S: AsRef<str>>(&self, message: S) {
        println!("{}", message.as_ref().yellow());
    }

    pub fn error<S: AsRef<str>>(&self, message: S) {
        eprintln!("{}", message.as_ref().red());
    }

    /// Connection status line: colored dot plus message.
    pub fn status<S: AsRef<str>>(&self, connected: bool, message: S) {
        if connected {
            println!("{} {}", "●".green(), message.as_ref());
        } else {
            println!("{} {}", "●".red(), message.as_ref());
        }
    }

    pub fn blank(&self) {
        println!();
    }
}
