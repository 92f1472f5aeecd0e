pub mod memory;

pub use memory::InMemoryMobileRegistry;
