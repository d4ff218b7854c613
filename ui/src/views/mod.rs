mod dashboard;
mod shell;
mod signup;
mod welcome;

pub use dashboard::Dashboard;
pub use shell::AppShell;
pub use signup::Signup;
pub use welcome::Welcome;
