pub mod impl_console;
#[cfg(test)]
pub mod impl_memory;
pub mod interface;
