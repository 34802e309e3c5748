// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_reply(size: usize) -> String {
    let base = "## Summary\n\nYour **enrollment** for `CS101` is confirmed.\nSeats are limited.\n\n- Check the schedule\n* Buy the textbook\n\n1. Log in\n2. Open **Courses**\n3. Press `Enroll`\n\n> Deadlines are strict.\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unclosed_delimiters(len: usize) -> String {
    "** ` ".repeat(len)
}
