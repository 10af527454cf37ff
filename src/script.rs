//! Line-oriented input scripts.
//!
//! One directive per line. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ```text
//! down X Y          mouse down at client (X, Y)
//! move X Y          mouse move
//! up X Y            mouse up
//! key down CODE     key pressed
//! key up CODE       key released
//! wheel DY X Y      zoom by wheel delta DY around client (X, Y)
//! pan DX DY         pan the viewport
//! resize W H        resize the drawing surface
//! tool NAME         command line text, also written `:NAME`
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use canvas::viewport::Point;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown directive `{word}`")]
    UnknownDirective { line: usize, word: String },
    #[error("line {line}: `{directive}` takes {expected} argument(s), got {got}")]
    Arity { line: usize, directive: &'static str, expected: usize, got: usize },
    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber { line: usize, value: String },
    #[error("line {line}: missing command text")]
    EmptyCommand { line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// One parsed directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Pointer { kind: PointerKind, at: Point },
    Key { pressed: bool, code: String },
    Wheel { delta_y: f64, at: Point },
    Pan { delta_x: f64, delta_y: f64 },
    Resize { width: f64, height: f64 },
    Command(String),
}

/// Parse a whole script, stopping at the first bad line.
pub fn parse(source: &str) -> Result<Vec<Input>, ScriptError> {
    let mut inputs = Vec::new();
    for (index, text) in source.lines().enumerate() {
        if let Some(input) = parse_line(index + 1, text)? {
            inputs.push(input);
        }
    }
    Ok(inputs)
}

/// Parse a single line. `Ok(None)` for blanks and comments.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Input>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    if let Some(name) = text.strip_prefix(':') {
        return command(line, name).map(Some);
    }

    let mut words = text.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let input = match word {
        "down" => pointer(line, "down", PointerKind::Down, &args)?,
        "move" => pointer(line, "move", PointerKind::Move, &args)?,
        "up" => pointer(line, "up", PointerKind::Up, &args)?,
        "key" => key(line, &args)?,
        "wheel" => {
            let [delta_y, x, y] = numbers::<3>(line, "wheel", &args)?;
            Input::Wheel { delta_y, at: Point::new(x, y) }
        }
        "pan" => {
            let [delta_x, delta_y] = numbers::<2>(line, "pan", &args)?;
            Input::Pan { delta_x, delta_y }
        }
        "resize" => {
            let [width, height] = numbers::<2>(line, "resize", &args)?;
            Input::Resize { width, height }
        }
        "tool" => {
            let rest = text.get(word.len()..).unwrap_or_default();
            command(line, rest)?
        }
        other => return Err(ScriptError::UnknownDirective { line, word: other.to_owned() }),
    };
    Ok(Some(input))
}

fn command(line: usize, text: &str) -> Result<Input, ScriptError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ScriptError::EmptyCommand { line });
    }
    Ok(Input::Command(text.to_owned()))
}

fn pointer(line: usize, directive: &'static str, kind: PointerKind, args: &[&str]) -> Result<Input, ScriptError> {
    let [x, y] = numbers::<2>(line, directive, args)?;
    Ok(Input::Pointer { kind, at: Point::new(x, y) })
}

fn key(line: usize, args: &[&str]) -> Result<Input, ScriptError> {
    let [direction, code] = args else {
        return Err(ScriptError::Arity { line, directive: "key", expected: 2, got: args.len() });
    };
    let pressed = match *direction {
        "down" => true,
        "up" => false,
        other => return Err(ScriptError::UnknownDirective { line, word: format!("key {other}") }),
    };
    Ok(Input::Key { pressed, code: (*code).to_owned() })
}

fn numbers<const N: usize>(line: usize, directive: &'static str, args: &[&str]) -> Result<[f64; N], ScriptError> {
    if args.len() != N {
        return Err(ScriptError::Arity { line, directive, expected: N, got: args.len() });
    }
    let mut out = [0.0; N];
    for (slot, raw) in out.iter_mut().zip(args) {
        let invalid = || ScriptError::InvalidNumber { line, value: (*raw).to_owned() };
        let value: f64 = raw.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        *slot = value;
    }
    Ok(out)
}
