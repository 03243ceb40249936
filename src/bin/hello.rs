// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hello-world demo: fills a greeting buffer and logs it through the
//! facade at a scope raised to debug verbosity.

use modlog::{Backend, Greeter, Level, LogScope, backend};

modlog::log_scope!(LogScope::new("hello").with_min_level(Level::Debug));

fn main() {
    let greeter = Greeter::new();
    let mut buffer = [0u8; 50];
    let written = greeter.fill(&mut buffer);
    let text = std::str::from_utf8(&buffer[..written]).unwrap_or("");

    modlog::log_info!("{greeting} {n}", greeting = text, n = 10);
    modlog::log_debug!("{greeting} {n}", greeting = greeter.message(), n = 11);

    backend().flush();
}
