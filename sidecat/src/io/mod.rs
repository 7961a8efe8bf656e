//! Side-effecting operations (filesystem reads, stream writes).

pub mod printer;
