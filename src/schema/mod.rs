/// Data definitions shared by the library, tools, and bindings.

pub mod config;
