//SPDX-License-Identifier: MIT OR Apache-2.0

//! Compile-time format string scanner.
//!
//! Transforms a `"literal {key} literal"` format string plus `key=value`
//! arguments into a sequence of `write_literal()`/`write_val()` calls on a
//! formatter variable. Unknown keys, unterminated placeholders, and
//! non-literal format strings are reported as `compile_error!`s.

use proc_macro::{TokenStream, TokenTree};
use std::collections::{HashMap, VecDeque};

/// Consumes tokens up to the next `=`, returning the accumulated key text.
///
/// Returns `None` when the stream is exhausted, which ends key/value
/// parsing. Any punctuation other than `=` yields an empty key, which will
/// fail the placeholder lookup later with a clear error.
fn parse_key(input: &mut VecDeque<TokenTree>) -> Option<String> {
    let mut key = String::new();
    loop {
        match input.pop_front() {
            Some(TokenTree::Punct(p)) => {
                if p.as_char() == '=' {
                    return Some(key);
                }
                return Some(String::new());
            }
            Some(TokenTree::Ident(i)) => key.push_str(&i.to_string()),
            Some(TokenTree::Literal(l)) => key.push_str(&l.to_string()),
            Some(TokenTree::Group(g)) => key.push_str(&g.to_string()),
            None => return None,
        }
    }
}

/// Consumes tokens up to the next top-level `,` (or end of stream),
/// reconstructing the value expression as source text.
///
/// Tokens are re-separated with spaces so adjacent idents (`x as u8`)
/// survive the round trip; spaces between tokens are never significant in
/// an expression.
fn parse_value(input: &mut VecDeque<TokenTree>) -> String {
    let mut value = String::new();
    loop {
        match input.pop_front() {
            Some(TokenTree::Punct(p)) => {
                if p.as_char() == ',' {
                    return value;
                }
                value.push_str(&p.to_string());
            }
            Some(TokenTree::Ident(i)) => {
                value.push_str(&i.to_string());
                value.push(' ');
            }
            Some(TokenTree::Literal(l)) => {
                value.push_str(&l.to_string());
                value.push(' ');
            }
            Some(TokenTree::Group(g)) => value.push_str(&g.to_string()),
            None => return value,
        }
    }
}

/// Collects the `key=value` arguments that follow the format string.
fn build_kvs(input: &mut VecDeque<TokenTree>) -> Result<HashMap<String, String>, TokenStream> {
    let mut kvs = HashMap::new();
    if input.is_empty() {
        return Ok(kvs);
    }
    match input.pop_front() {
        Some(TokenTree::Punct(p)) if p.as_char() == ',' => {}
        _ => {
            return Err(r#"compile_error!("expected ',' after the format string")"#
                .parse()
                .unwrap());
        }
    }
    loop {
        let key = match parse_key(input) {
            Some(k) => k,
            None => return Ok(kvs),
        };
        let value = parse_value(input);
        kvs.insert(key, value);
    }
}

/// Generated formatter calls for one format string.
pub struct FormatPlan {
    pub output: TokenStream,
}

fn error_plan(message: &str) -> FormatPlan {
    FormatPlan {
        output: format!(r#"compile_error!("{}")"#, message).parse().unwrap(),
    }
}

/// Scans the format string and produces `formatter.write_*()` calls.
///
/// `collect` must start with a plain string literal; the remaining tokens
/// are `key=value` pairs. `formatter` names the variable the generated
/// calls are made on. `{{` and `}}` escape literal braces.
pub fn format_impl(collect: &mut VecDeque<TokenTree>, formatter: &str) -> FormatPlan {
    let format_string = match collect.pop_front() {
        Some(TokenTree::Literal(l)) => {
            let text = l.to_string();
            if !text.starts_with('"') || !text.ends_with('"') {
                return error_plan("log macros require a plain string literal format string");
            }
            text[1..text.len() - 1].to_string()
        }
        _ => {
            return error_plan("log macros require a plain string literal format string");
        }
    };

    let kvs = match build_kvs(collect) {
        Ok(kvs) => kvs,
        Err(output) => return FormatPlan { output },
    };

    let mut source = String::new();
    let mut literal = String::new();
    let emit_literal = |source: &mut String, literal: &mut String| {
        if !literal.is_empty() {
            source.push_str(formatter);
            source.push_str(".write_literal(\"");
            source.push_str(literal);
            source.push_str("\");\n");
            literal.clear();
        }
    };

    let chars: Vec<char> = format_string.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '{' if chars.get(i + 1) == Some(&'{') => {
                literal.push('{');
                i += 2;
            }
            '}' if chars.get(i + 1) == Some(&'}') => {
                literal.push('}');
                i += 2;
            }
            '{' => {
                emit_literal(&mut source, &mut literal);
                let mut key = String::new();
                i += 1;
                loop {
                    match chars.get(i) {
                        Some('}') => break,
                        Some(c) => {
                            key.push(*c);
                            i += 1;
                        }
                        None => return error_plan("unterminated '{' in format string"),
                    }
                }
                i += 1;
                let value = match kvs.get(&key) {
                    Some(v) => v,
                    None => {
                        return error_plan(&format!("no value supplied for key {}", key));
                    }
                };
                source.push_str(formatter);
                source.push_str(".write_val(");
                source.push_str(value);
                source.push_str(");\n");
            }
            '}' => return error_plan("unmatched '}' in format string"),
            c => {
                literal.push(c);
                i += 1;
            }
        }
    }
    emit_literal(&mut source, &mut literal);

    FormatPlan {
        output: source.parse().unwrap(),
    }
}
