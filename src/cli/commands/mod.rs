//! One module per subcommand. Each exposes an `execute` function.

pub mod completions;
pub mod keygen;
pub mod matrix;
pub mod process;
