mod error;
mod flash;
