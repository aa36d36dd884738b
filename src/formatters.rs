use std::{collections::HashMap, sync::Arc};

use serde_json::Value;

pub type FormatFn = Arc<dyn Fn(&Value) -> String + Send + Sync>;

/// Expands `%x` directives in a logger's first argument, where `x` is a
/// letter with a registered [FormatFn]
#[derive(Clone)]
pub struct Formatters {
    by_letter: HashMap<char, FormatFn>,
}

impl Default for Formatters {
    fn default() -> Self {
        let mut formatters = Self::empty();
        formatters.register('o', compact);
        formatters.register('O', pretty);
        formatters.register('s', plain);
        formatters.register('d', number);
        formatters.register('j', compact);
        formatters
    }
}

impl Formatters {
    pub fn empty() -> Self {
        Self {
            by_letter: HashMap::default(),
        }
    }

    pub fn register<F: Fn(&Value) -> String + Send + Sync + 'static>(
        &mut self,
        letter: char,
        formatter: F,
    ) {
        self.by_letter.insert(letter, Arc::new(formatter));
    }

    pub fn remove(&mut self, letter: char) -> Option<FormatFn> {
        self.by_letter.remove(&letter)
    }

    pub fn get(&self, letter: char) -> Option<&FormatFn> {
        self.by_letter.get(&letter)
    }

    /// Renders `args` into a single message. A non-string first argument is
    /// rendered as if the format string were `%O`. An unregistered directive
    /// is left as written but still claims an argument position, so later
    /// directives read past it. Arguments not consumed by a directive are
    /// appended, separated by spaces.
    pub fn format(&self, args: &[Value]) -> String {
        let (template, remaining) = match args.split_first() {
            None => return String::new(),
            Some((Value::String(template), rest)) => (template.as_str(), rest),
            Some(_) => ("%O", args),
        };

        let mut pending: Vec<&Value> = remaining.iter().collect();
        let mut position = 0;
        let mut message = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                message.push(ch);
                continue;
            }

            let letter = match chars.peek() {
                Some(&letter) if letter == '%' || letter.is_ascii_alphabetic() => letter,
                _ => {
                    message.push(ch);
                    continue;
                }
            };
            chars.next();

            if letter == '%' {
                message.push('%');
                continue;
            }

            let formatter = match self.get(letter) {
                Some(formatter) => formatter,
                None => {
                    position += 1;
                    message.push('%');
                    message.push(letter);
                    continue;
                }
            };

            if position < pending.len() {
                let value = pending.remove(position);
                message.push_str(&formatter(value));
            } else {
                // Nothing left to fill it with
                message.push('%');
                message.push(letter);
            }
        }

        for value in pending {
            message.push(' ');
            message.push_str(&plain(value));
        }

        message
    }
}

fn compact(value: &Value) -> String {
    value.to_string()
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => (*b as u8).to_string(),
        Value::Null => "0".to_string(),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(parsed) => parsed.to_string(),
            Err(_) => "NaN".to_string(),
        },
        _ => "NaN".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn format(args: &[Value]) -> String {
        Formatters::default().format(args)
    }

    #[test]
    fn plain_string_test() {
        assert_eq!(format(&[json!("hello world")]), "hello world");
        assert_eq!(format(&[]), "");
    }

    #[test]
    fn directives_test() {
        assert_eq!(
            format(&[json!("%s is %d years"), json!("Grayskull"), json!(42)]),
            "Grayskull is 42 years"
        );
        assert_eq!(
            format(&[json!("payload %o"), json!({"a": [1, 2]})]),
            r#"payload {"a":[1,2]}"#
        );
        assert_eq!(format(&[json!("%j"), json!("quoted")]), r#""quoted""#);
    }

    #[test]
    fn pretty_directive_test() {
        assert_eq!(
            format(&[json!("%O"), json!({"a": 1})]),
            "{\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn non_string_first_arg_test() {
        assert_eq!(format(&[json!(12345)]), "12345");
        assert_eq!(format(&[json!(null), json!("tail")]), "null tail");
        assert_eq!(format(&[json!([1]), json!(2)]), "[\n  1\n] 2");
    }

    #[test]
    fn escaped_percent_test() {
        assert_eq!(format(&[json!("100%% done"), json!(1)]), "100% done 1");
        assert_eq!(format(&[json!("50% off")]), "50% off");
        assert_eq!(format(&[json!("trailing %")]), "trailing %");
    }

    #[test]
    fn unknown_or_missing_directive_test() {
        assert_eq!(format(&[json!("%z"), json!(1)]), "%z 1");
        assert_eq!(format(&[json!("%s and %s"), json!("one")]), "one and %s");
    }

    #[test]
    fn unknown_directive_claims_position_test() {
        assert_eq!(
            format(&[json!("%z %s"), json!(1), json!(2)]),
            "%z 2 1"
        );
        assert_eq!(
            format(&[json!("%s %z %s"), json!("a"), json!("b"), json!("c")]),
            "a %z c b"
        );
    }

    #[test]
    fn number_directive_test() {
        assert_eq!(format(&[json!("%d"), json!(true)]), "1");
        assert_eq!(format(&[json!("%d"), json!("7")]), "7");
        assert_eq!(format(&[json!("%d"), json!("seven")]), "NaN");
        assert_eq!(format(&[json!("%d"), json!({})]), "NaN");
    }

    #[test]
    fn custom_formatter_test() {
        let mut formatters = Formatters::default();
        formatters.register('h', |value| format!("<{}>", value));
        assert_eq!(formatters.format(&[json!("%h"), json!(1)]), "<1>");

        formatters.remove('s');
        assert_eq!(formatters.format(&[json!("%s"), json!("x")]), "%s x");
    }
}
