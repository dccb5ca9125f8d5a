/// Interactive terminal front end
///
/// The session reads one command token at a time and dispatches it to the
/// command handlers until the user types `done` or input runs out.

pub mod prompt;
pub mod session;

pub use prompt::Prompter;
pub use session::Session;
