mod traits;

pub use traits::CommandExecutor;
