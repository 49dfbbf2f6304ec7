// Author: Dustin Pilgrim
// License: MIT
//
// Gesture scripts: one event per line.
//
//   # comment
//   right 20 0            drag-delta on a handle
//   top-left -5 -5 ctrl   with modifiers (shift, ctrl)
//   set 10 10 100 50      setGeometry(x, y, w, h)
//   hit 3 40              which handle is under an overlay-local point
//   layout                print handle placements

use sizer_core::{HandleRole, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Drag {
        role: HandleRole,
        dx: f64,
        dy: f64,
        modifiers: Modifiers,
    },
    Set {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Hit {
        x: f64,
        y: f64,
    },
    Layout,
}

/// A parsed step with its 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub number: usize,
    pub step: Step,
}

pub fn parse_script(src: &str) -> Result<Vec<Line>, String> {
    let mut out = Vec::new();

    for (idx, raw) in src.lines().enumerate() {
        let number = idx + 1;
        let text = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        }
        .trim();

        if text.is_empty() {
            continue;
        }

        let step = parse_step(text).map_err(|e| format!("line {number}: {e}"))?;
        out.push(Line { number, step });
    }

    Ok(out)
}

fn parse_step(text: &str) -> Result<Step, String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    match words.as_slice() {
        ["layout"] => Ok(Step::Layout),

        ["set", x, y, w, h] => Ok(Step::Set {
            x: number(x)?,
            y: number(y)?,
            width: number(w)?,
            height: number(h)?,
        }),

        ["set", ..] => Err("set expects x y width height".into()),

        ["hit", x, y] => Ok(Step::Hit {
            x: number(x)?,
            y: number(y)?,
        }),

        ["hit", ..] => Err("hit expects x y".into()),

        [role, dx, dy, mods @ ..] => {
            let role: HandleRole = role.parse().map_err(|e| format!("{e}"))?;
            let mut modifiers = Modifiers::NONE;
            for m in mods {
                match m.to_lowercase().as_str() {
                    "shift" => modifiers.shift = true,
                    "ctrl" | "control" => modifiers.control = true,
                    other => return Err(format!("unknown modifier \"{other}\"")),
                }
            }
            Ok(Step::Drag {
                role,
                dx: number(dx)?,
                dy: number(dy)?,
                modifiers,
            })
        }

        _ => Err(format!("cannot parse \"{text}\"")),
    }
}

fn number(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("invalid number \"{s}\"")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_mixed_script() {
        let src = "\
# grow, then lock the ratio
right 20 0
bottom-right 10 4 ctrl   # trailing comment

set 10 10 100 50
top-left -3 2 shift ctrl
hit 3 -1
layout
";
        let lines = parse_script(src).unwrap();
        assert_eq!(lines.len(), 6);

        assert_eq!(
            lines[0],
            Line {
                number: 2,
                step: Step::Drag {
                    role: HandleRole::Right,
                    dx: 20.0,
                    dy: 0.0,
                    modifiers: Modifiers::NONE,
                },
            }
        );
        assert_eq!(
            lines[1].step,
            Step::Drag {
                role: HandleRole::BottomRight,
                dx: 10.0,
                dy: 4.0,
                modifiers: Modifiers::CONTROL,
            }
        );
        assert_eq!(lines[2].number, 5);
        assert_eq!(
            lines[2].step,
            Step::Set {
                x: 10.0,
                y: 10.0,
                width: 100.0,
                height: 50.0,
            }
        );
        assert_eq!(
            lines[3].step,
            Step::Drag {
                role: HandleRole::TopLeft,
                dx: -3.0,
                dy: 2.0,
                modifiers: Modifiers {
                    shift: true,
                    control: true,
                },
            }
        );
        assert_eq!(lines[4].step, Step::Hit { x: 3.0, y: -1.0 });
        assert_eq!(lines[5].step, Step::Layout);
    }

    #[test]
    fn errors_carry_the_line_number() {
        let err = parse_script("right 1 1\n\nmiddle 2 2\n").unwrap_err();
        assert!(err.starts_with("line 3:"), "{err}");

        let err = parse_script("left 1 nope").unwrap_err();
        assert_eq!(err, "line 1: invalid number \"nope\"");

        let err = parse_script("left 1 1 alt").unwrap_err();
        assert_eq!(err, "line 1: unknown modifier \"alt\"");

        assert!(parse_script("set 1 2 3").is_err());
        assert!(parse_script("bottom 5").is_err());
        assert!(parse_script("hit 5").is_err());
    }

    #[test]
    fn empty_script_is_fine() {
        assert!(parse_script("# nothing\n   \n").unwrap().is_empty());
    }
}
