//! Shell command - print the `jk` integration function

use std::io::{self, Write};

/// Function that changes into the directory printed by `kase query`
pub const SHELL_INTEGRATION: &str = r#"jk() {
    dir=$(\kase query "$@") && cd "$dir"
}
"#;

/// Write the shell integration to `out`
///
/// # Errors
/// Returns an error if writing fails.
pub fn execute(out: &mut impl Write) -> io::Result<()> {
    out.write_all(SHELL_INTEGRATION.as_bytes())
}
