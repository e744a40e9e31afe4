//! Program images: the bytes a host pokes into memory before running the cpu.
//!
//! One segment per line, an address followed by the bytes stored from there on, all hex:
//!
//! ```text
//! ; jsr $4242, then lda #$64
//! FFFC: 20 42 42
//! 4242: A9 64
//! ```

use crate::bus::Memory;
use crate::error::ProgramError;
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::{char, space0, space1},
    combinator::{all_consuming, map_res},
    multi::separated_list1,
    sequence::{delimited, separated_pair, terminated},
    IResult,
};
use std::{fs, path::Path, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub addr: u16,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    segments: Vec<Segment>,
}

fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn addr(i: &str) -> IResult<&str, u16> {
    map_res(take_while_m_n(1, 4, is_hex), |s| u16::from_str_radix(s, 16))(i)
}

fn byte(i: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 2, is_hex), |s| u8::from_str_radix(s, 16))(i)
}

// ADDR ':' BYTE (' ' BYTE)*
fn segment(i: &str) -> IResult<&str, Segment> {
    let (i, (addr, bytes)) = separated_pair(
        addr,
        delimited(space0, char(':'), space0),
        terminated(separated_list1(space1, byte), space0),
    )(i)?;
    Ok((i, Segment { addr, bytes }))
}

// everything after a comment marker is ignored
fn strip_comment(line: &str) -> &str {
    line.split(|c: char| c == ';' || c == '#').next().unwrap_or("").trim()
}

impl FromStr for Program {
    type Err = ProgramError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        for (n, line) in src.lines().enumerate() {
            let text = strip_comment(line);
            if text.is_empty() {
                continue;
            }
            let (_, seg) = all_consuming(segment)(text).map_err(|_| ProgramError::Syntax {
                line: n + 1,
                text: line.to_string(),
            })?;
            segments.push(seg);
        }
        Ok(Self { segments })
    }
}

impl Program {
    pub fn open<T: AsRef<Path>>(path: T) -> Result<Self, ProgramError> {
        fs::read_to_string(path)?.parse()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Writes every segment in order, so later lines win where they overlap.
    pub fn load_into(&self, mem: &mut Memory) {
        for seg in &self.segments {
            mem.load(seg.addr, &seg.bytes);
        }
        log::debug!(target: "six502", "loaded {} segment(s)", self.segments.len());
    }
}
