//! JSON text output for parsed trees.
//!
//! Serializes a [`ValueRef`] back to JSON text, either compact (minimal
//! whitespace) via [`to_json()`] or pretty-printed with 2-space
//! indentation via [`to_json_pretty()`].
//!
//! Object members are emitted in insertion order, matching the order the
//! tree preserves from the source document, so parse → print → parse gives
//! back a structurally identical tree. Traversal is iterative with an
//! explicit work stack; adversarially deep input cannot overflow the call
//! stack here any more than it can in teardown.

use crate::ast::{Value, ValueRef};

pub struct JsonPrinter {
    pretty: bool,
}

/// A unit of pending output: literal text or a value still to be printed
/// at a given indent level.
enum Task<'a> {
    Raw(&'static str),
    Owned(String),
    Value(ValueRef<'a>, usize),
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &ValueRef<'_>) -> String {
        let mut out = String::new();
        let mut stack = vec![Task::Value(*value, 0)];

        while let Some(task) = stack.pop() {
            match task {
                Task::Raw(s) => out.push_str(s),
                Task::Owned(s) => out.push_str(&s),
                Task::Value(v, indent) => self.print_value(v, indent, &mut out, &mut stack),
            }
        }

        out
    }

    fn print_value<'a>(
        &self,
        value: ValueRef<'a>,
        indent: usize,
        out: &mut String,
        stack: &mut Vec<Task<'a>>,
    ) {
        match value.value() {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => out.push_str(&n.to_string()),
            Value::Real(n) => out.push_str(&format_real(*n)),
            Value::String(s) => {
                out.push('"');
                escape_into(s, out);
                out.push('"');
            }
            Value::Array(_) => self.print_array(value, indent, out, stack),
            Value::Object(_) => self.print_object(value, indent, out, stack),
        }
    }

    fn print_array<'a>(
        &self,
        value: ValueRef<'a>,
        indent: usize,
        out: &mut String,
        stack: &mut Vec<Task<'a>>,
    ) {
        let len = value.len().unwrap_or(0);
        if len == 0 {
            out.push_str("[]");
            return;
        }

        out.push('[');
        if self.pretty {
            out.push('\n');
        }

        // Tasks run LIFO, so queue the pieces in reverse.
        if self.pretty {
            stack.push(Task::Owned(format!("\n{}]", self.indent(indent))));
        } else {
            stack.push(Task::Raw("]"));
        }
        let elements: Vec<_> = value.elements().collect();
        for (i, element) in elements.into_iter().enumerate().rev() {
            stack.push(Task::Value(element, indent + 1));
            if self.pretty {
                stack.push(Task::Owned(self.indent(indent + 1)));
            }
            if i > 0 {
                stack.push(Task::Raw(if self.pretty { ",\n" } else { "," }));
            }
        }
    }

    fn print_object<'a>(
        &self,
        value: ValueRef<'a>,
        indent: usize,
        out: &mut String,
        stack: &mut Vec<Task<'a>>,
    ) {
        let len = value.len().unwrap_or(0);
        if len == 0 {
            out.push_str("{}");
            return;
        }

        out.push('{');
        if self.pretty {
            out.push('\n');
        }

        if self.pretty {
            stack.push(Task::Owned(format!("\n{}}}", self.indent(indent))));
        } else {
            stack.push(Task::Raw("}"));
        }
        let entries: Vec<_> = value.entries().collect();
        for (i, (name, member)) in entries.into_iter().enumerate().rev() {
            stack.push(Task::Value(member, indent + 1));

            let mut key = if self.pretty {
                self.indent(indent + 1)
            } else {
                String::new()
            };
            key.push('"');
            escape_into(name, &mut key);
            key.push_str(if self.pretty { "\": " } else { "\":" });
            stack.push(Task::Owned(key));

            if i > 0 {
                stack.push(Task::Raw(if self.pretty { ",\n" } else { "," }));
            }
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Keep the integer/real distinction visible: a whole-valued real is
/// printed with a trailing `.0` so it does not re-parse as an integer.
fn format_real(n: f64) -> String {
    if n == n.trunc() {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

/// Compact serialization of a value and everything under it.
pub fn to_json(value: &ValueRef<'_>) -> String {
    JsonPrinter::new(false).print(value)
}

/// Pretty serialization with 2-space indentation.
pub fn to_json_pretty(value: &ValueRef<'_>) -> String {
    JsonPrinter::new(true).print(value)
}
