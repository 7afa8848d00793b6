pub mod designer;
pub mod flash;
