//! Canonical whitespace for Go declarations
//!
//! Indentation is one tab per source line that leaves brackets open, so
//! `foo(func() {` indents its body once, the way gofmt does. Brackets inside
//! strings, runes, raw strings and comments are ignored. Text inside a raw
//! string or block comment that spans lines is copied through untouched.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    BlockComment,
    RawString,
}

/// Bracket events of one line, in order, outside literals and comments
fn scan_brackets(line: &str, state: &mut ScanState) -> Vec<char> {
    let mut brackets = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match *state {
            ScanState::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    *state = ScanState::Code;
                }
            }
            ScanState::RawString => {
                if c == '`' {
                    *state = ScanState::Code;
                }
            }
            ScanState::Code => match c {
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    *state = ScanState::BlockComment;
                }
                '`' => *state = ScanState::RawString,
                '"' | '\'' => skip_quoted(&mut chars, c),
                '{' | '(' | '[' | '}' | ')' | ']' => brackets.push(c),
                _ => {}
            },
        }
    }

    brackets
}

fn skip_quoted(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, quote: char) {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return;
        }
    }
}

fn is_closer(c: char) -> bool {
    matches!(c, '}' | ')' | ']')
}

/// Re-indent `src` with tabs, strip trailing whitespace and collapse blank runs
///
/// Leading and trailing blank lines are dropped; a non-empty result ends
/// with exactly one newline.
pub fn reindent(src: &str) -> String {
    let mut out = String::new();
    // Unmatched openers contributed by each indenting line
    let mut levels: Vec<usize> = Vec::new();
    let mut state = ScanState::Code;
    let mut pending_blank = false;

    for raw_line in src.lines() {
        if state != ScanState::Code {
            out.push_str(raw_line.trim_end());
            out.push('\n');
            let brackets = scan_brackets(raw_line, &mut state);
            apply_brackets(&mut levels, &brackets);
            continue;
        }

        let line = raw_line.trim();
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }
        if pending_blank {
            out.push('\n');
            pending_blank = false;
        }

        let leading_closers = line.chars().take_while(|c| is_closer(*c)).count();
        let indent = levels.len() - levels_closed_by(&levels, leading_closers);
        for _ in 0..indent {
            out.push('\t');
        }
        out.push_str(line);
        out.push('\n');

        let brackets = scan_brackets(line, &mut state);
        apply_brackets(&mut levels, &brackets);
    }

    out
}

fn levels_closed_by(levels: &[usize], mut closers: usize) -> usize {
    let mut closed = 0;
    for open in levels.iter().rev() {
        if closers >= *open {
            closers -= open;
            closed += 1;
        } else {
            break;
        }
    }
    closed
}

fn apply_brackets(levels: &mut Vec<usize>, brackets: &[char]) {
    let mut opened_here = 0usize;

    for &c in brackets {
        if !is_closer(c) {
            opened_here += 1;
        } else if opened_here > 0 {
            opened_here -= 1;
        } else if let Some(top) = levels.last_mut() {
            *top -= 1;
            if *top == 0 {
                levels.pop();
            }
        }
    }

    if opened_here > 0 {
        levels.push(opened_here);
    }
}
