pub mod fs;

// Test module declaration
#[cfg(test)]
mod tests;
