pub mod adr;
pub mod init;
pub mod list;
pub mod survey;
