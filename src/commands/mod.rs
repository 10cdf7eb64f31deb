//! Command implementations

pub mod base;
pub mod call;
pub mod info;
pub mod issue;
pub mod repos;
pub mod search;
pub mod tools;

pub use base::{Command, CommandContext};
pub use call::CallCommand;
pub use info::InfoCommand;
pub use issue::IssueCommand;
pub use repos::ReposCommand;
pub use search::SearchCommand;
pub use tools::ToolsCommand;
