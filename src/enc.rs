//! Run Length Encoded (RLE) pattern files
//!
//! See <https://conwaylife.com/wiki/Run_Length_Encoded>. Decoded patterns are
//! anchored with their top-left corner at the origin.

use crate::{Board, Pos2};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

const MAX_LINE_LEN: usize = 70;
/// Upper limit on live cells in a decoded pattern
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("line {line}: unexpected tag `{tag}`")]
    UnknownTag { line: usize, tag: char },
    #[error("line {line}: run count `{run}` is out of range")]
    InvalidRun { line: usize, run: String },
    #[error("line {line}: pattern has more than {limit} live cells")]
    TooManyCells { line: usize, limit: usize },
    #[error("pattern is not terminated by `!`")]
    Unterminated,
}

pub trait PatternCodec {
    fn encode(&self, board: &Board) -> String;
    fn decode(&self, value: &str) -> Result<Board, PatternError>;
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: i32, c: char) {
        let append = match run {
            0 => return,
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.push_run(1, '!');
        self.sequence
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunLengthEncoded {
    name: Option<String>,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    fn encode_header(&self, board: &Board) -> String {
        let mut header = String::new();
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        let (w, h) = board
            .bounds()
            .map(|b| (b.width(), b.height()))
            .unwrap_or_default();
        header.push_str(&format!("x = {}, y = {}, rule = B3/S23", w, h));
        header
    }

    fn encode_cells(&self, board: &Board) -> String {
        let mut seq = RunEncoder::new(MAX_LINE_LEN);
        let Some(bounds) = board.bounds() else {
            return seq.end();
        };
        let tl = bounds.min;

        let mut last = tl - Pos2 { x: 1, y: 0 };
        let mut alive_run = 0;
        for pos in board.sorted_cells() {
            // extend the current run of live cells
            if last.y == pos.y && (last.x + 1) == pos.x {
                alive_run += 1;
                last = pos;
                continue;
            }

            let lines_run = pos.y - last.y;
            let dead_run = match lines_run {
                0 => pos.x - last.x - 1,
                _ => pos.x - tl.x,
            };
            // NOTE: order matters!
            seq.push_run(alive_run, 'o');
            seq.push_run(lines_run, '$');
            seq.push_run(dead_run, 'b');

            alive_run = 1;
            last = pos;
        }

        seq.push_run(alive_run, 'o');
        seq.end()
    }
}

fn run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d*)(\S)").expect("valid run regex"))
}

impl PatternCodec for RunLengthEncoded {
    fn encode(&self, board: &Board) -> String {
        format!("{}\n{}\n", self.encode_header(board), self.encode_cells(board))
    }

    fn decode(&self, value: &str) -> Result<Board, PatternError> {
        let mut alive = Vec::new();
        let mut cursor = Pos2::zero();
        for (i, line) in value.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('x') {
                continue;
            }

            for (_, [run_str, tag]) in run_regex().captures_iter(line).map(|x| x.extract()) {
                let invalid_run = || PatternError::InvalidRun {
                    line: line_no,
                    run: run_str.to_owned(),
                };
                let run = if run_str.is_empty() {
                    1
                } else {
                    run_str.parse::<i32>().map_err(|_| invalid_run())?
                };
                match tag {
                    "!" => {
                        tracing::debug!(alive = alive.len(), "decoded rle pattern");
                        return Ok(Board::from_cells(alive));
                    }
                    "o" => {
                        let end = cursor.x.checked_add(run).ok_or_else(invalid_run)?;
                        if alive.len() + run as usize > MAX_PATTERN_CELLS {
                            return Err(PatternError::TooManyCells {
                                line: line_no,
                                limit: MAX_PATTERN_CELLS,
                            });
                        }
                        alive.extend((cursor.x..end).map(|x| Pos2 { x, y: cursor.y }));
                        cursor.x = end;
                    }
                    "b" => cursor.x = cursor.x.checked_add(run).ok_or_else(invalid_run)?,
                    "$" => {
                        cursor.x = 0;
                        cursor.y = cursor.y.checked_add(run).ok_or_else(invalid_run)?;
                    }
                    other => {
                        return Err(PatternError::UnknownTag {
                            line: line_no,
                            tag: other.chars().next().unwrap_or_default(),
                        });
                    }
                }
            }
        }

        Err(PatternError::Unterminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider() -> Board {
        Board::from_cells([
            Pos2::new(1, 0),
            Pos2::new(2, 1),
            Pos2::new(0, 2),
            Pos2::new(1, 2),
            Pos2::new(2, 2),
        ])
    }

    #[test]
    fn encodes_glider() {
        let encoded = RunLengthEncoded::default()
            .set_name("Glider")
            .encode(&glider());

        assert_eq!(encoded, "#N Glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n");
    }

    #[test]
    fn encodes_empty_board() {
        let encoded = RunLengthEncoded::default().encode(&Board::empty());

        assert_eq!(encoded, "x = 0, y = 0, rule = B3/S23\n!\n");
    }

    #[test]
    fn decodes_with_comments_and_header() {
        let text = "#N Glider\n#C a comment\nx = 3, y = 3, rule = B3/S23\nbo$2b\no$3o!\n";
        let board = RunLengthEncoded::default().decode(text).unwrap();

        assert_eq!(board, glider());
    }

    #[test]
    fn decode_anchors_at_origin() {
        let shifted = glider().translate(Pos2::new(-40, 17));
        let codec = RunLengthEncoded::default();
        let decoded = codec.decode(&codec.encode(&shifted)).unwrap();

        assert_eq!(decoded, glider());
    }

    #[test]
    fn long_rows_wrap() {
        let row = Board::from_cells((0..200).step_by(2).map(|x| Pos2::new(x, 0)));
        let encoded = RunLengthEncoded::default().encode(&row);

        assert!(encoded.lines().all(|l| l.len() <= MAX_LINE_LEN));
        assert_eq!(RunLengthEncoded::default().decode(&encoded).unwrap(), row);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = RunLengthEncoded::default().decode("x = 1, y = 1\n2oz!").unwrap_err();

        assert_eq!(err, PatternError::UnknownTag { line: 2, tag: 'z' });
    }

    #[test]
    fn rejects_huge_run() {
        let err = RunLengthEncoded::default()
            .decode("99999999999o!")
            .unwrap_err();

        assert!(matches!(err, PatternError::InvalidRun { line: 1, .. }));
    }

    #[test]
    fn rejects_cursor_past_row_end() {
        let err = RunLengthEncoded::default()
            .decode("2147483647b2o!")
            .unwrap_err();

        assert_eq!(
            err,
            PatternError::InvalidRun {
                line: 1,
                run: "2".to_owned()
            }
        );
    }

    #[test]
    fn rejects_cursor_past_last_row() {
        let err = RunLengthEncoded::default()
            .decode("2147483647$2$o!")
            .unwrap_err();

        assert_eq!(
            err,
            PatternError::InvalidRun {
                line: 1,
                run: "2".to_owned()
            }
        );
    }

    #[test]
    fn rejects_oversized_pattern() {
        let err = RunLengthEncoded::default()
            .decode("2000000000o!")
            .unwrap_err();

        assert_eq!(
            err,
            PatternError::TooManyCells {
                line: 1,
                limit: MAX_PATTERN_CELLS
            }
        );
    }

    #[test]
    fn accepts_runs_near_the_edge() {
        let board = RunLengthEncoded::default()
            .decode("2147483645b2o$2147483646$o!")
            .unwrap();

        assert_eq!(
            board.sorted_cells(),
            vec![
                Pos2::new(2147483645, 0),
                Pos2::new(2147483646, 0),
                Pos2::new(0, 2147483647),
            ]
        );
    }

    #[test]
    fn rejects_missing_terminator() {
        let err = RunLengthEncoded::default().decode("3o$").unwrap_err();

        assert_eq!(err, PatternError::Unterminated);
    }
}
