// SPDX-License-Identifier: MIT OR Apache-2.0

//! Visual smoke test: one line per level through the bound console
//! backend. Run with `cargo test -- --nocapture` to see the output.

use modlog::{Backend, backend};

modlog::log_scope!(
    modlog::LogScope::new("demo").with_min_level(modlog::Level::Debug)
);

#[test]
fn print_one_line_per_level() {
    let greeter = modlog::Greeter::new();
    let mut buffer = [0u8; 16];
    let written = greeter.fill(&mut buffer);
    let greeting = std::str::from_utf8(&buffer[..written]).unwrap_or("");

    modlog::log_debug!("{greeting}, level {n}", greeting = greeting, n = 1);
    modlog::log_info!("{greeting}, level {n}", greeting = greeting, n = 2);
    modlog::log_warn!("{greeting}, level {n}", greeting = greeting, n = 3);
    modlog::log_error!("{greeting}, level {n}", greeting = greeting, n = 4);
    modlog::log_critical!("{greeting}, level {n}", greeting = greeting, n = 5);

    backend().flush();
}
