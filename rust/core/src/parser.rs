// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! GRDECL deck parser
//!
//! Reads the section-oriented Eclipse grid dialect: a section opens at a
//! start-of-line keyword (SPECGRID, COORD, ZCORN, ACTNUM) and closes at a
//! `/`, either alone on a line or trailing the last data line. Token layout
//! inside a section is free-form; ACTNUM additionally allows run-length
//! `count*value` tokens.
//!
//! Malformed input is rejected with a typed error rather than propagated as
//! NaN into geometry.

use memchr::memchr;
use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res},
    sequence::separated_pair,
    IResult,
};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::deck::{GridDeck, GridDimensions};
use crate::error::{Error, Result};

/// The four deck sections this reader understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    SpecGrid,
    Coord,
    Zcorn,
    Actnum,
}

impl Keyword {
    /// Section keyword as it appears in the file
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::SpecGrid => "SPECGRID",
            Keyword::Coord => "COORD",
            Keyword::Zcorn => "ZCORN",
            Keyword::Actnum => "ACTNUM",
        }
    }

    /// Match a keyword at the start of a line (case-sensitive).
    ///
    /// The keyword must be followed by whitespace, a slash, or end-of-line
    /// so that e.g. `COORDSYS` does not open a COORD section. Returns the
    /// keyword and the remainder of the line after it.
    fn match_line(line: &str) -> Option<(Keyword, &str)> {
        const ALL: [Keyword; 4] = [
            Keyword::SpecGrid,
            Keyword::Coord,
            Keyword::Zcorn,
            Keyword::Actnum,
        ];
        for kw in ALL {
            if let Some(rest) = line.strip_prefix(kw.as_str()) {
                if rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == '/') {
                    return Some((kw, rest));
                }
            }
        }
        None
    }
}

/// A raw section: keyword plus its space-joined body, slash stripped
#[derive(Debug)]
pub struct RawSection<'a> {
    pub keyword: Keyword,
    /// 1-based line number of the keyword line
    pub line: usize,
    /// Content slices in file order; whitespace-split into tokens by callers
    pub body: Vec<&'a str>,
}

/// Scanner that walks the deck text section by section.
///
/// Lines outside any section are ignored, which is how unknown keywords are
/// skipped. A section body accumulates until the terminating slash.
pub struct SectionScanner<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
}

impl<'a> SectionScanner<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.split('\n').enumerate(),
        }
    }

    /// Scan for the next recognized section.
    ///
    /// Returns an error if the input ends while a section is still open.
    pub fn next_section(&mut self) -> Result<Option<RawSection<'a>>> {
        // Find the next keyword line
        let (start, keyword, first) = loop {
            match self.lines.next() {
                Some((idx, line)) => {
                    if let Some((kw, rest)) = Keyword::match_line(line) {
                        break (idx + 1, kw, rest);
                    }
                }
                None => return Ok(None),
            }
        };

        let mut section = RawSection {
            keyword,
            line: start,
            body: Vec::new(),
        };

        // Data may start on the keyword line itself
        if Self::push_content(&mut section.body, first) {
            return Ok(Some(section));
        }

        for (_, line) in self.lines.by_ref() {
            if Self::push_content(&mut section.body, line) {
                return Ok(Some(section));
            }
        }

        Err(Error::parse(
            start,
            format!("section {} is not terminated by '/'", keyword.as_str()),
        ))
    }

    /// Append a content line to the body; returns true when the section's
    /// terminating slash was found on it.
    fn push_content(body: &mut Vec<&'a str>, line: &'a str) -> bool {
        match memchr(b'/', line.as_bytes()) {
            Some(pos) => {
                let data = &line[..pos];
                if !data.trim().is_empty() {
                    body.push(data);
                }
                true
            }
            None => {
                if !line.trim().is_empty() {
                    body.push(line);
                }
                false
            }
        }
    }
}

/// Run-length ACTNUM token: `count*value`
fn run_length(input: &str) -> IResult<&str, (usize, u64)> {
    separated_pair(
        map_res(digit1, |s: &str| s.parse::<usize>()),
        char('*'),
        map_res(digit1, |s: &str| s.parse::<u64>()),
    )(input)
}

/// Plain or run-length ACTNUM token, expanded to (repeat, flag)
fn actnum_token(input: &str) -> IResult<&str, (usize, u64)> {
    alt((
        run_length,
        map(map_res(digit1, |s: &str| s.parse::<u64>()), |v| (1, v)),
    ))(input)
}

/// Tokens of a section body, in file order, `/`-bearing tokens dropped
fn tokens<'a>(body: &'a [&'a str]) -> impl Iterator<Item = &'a str> {
    body.iter()
        .flat_map(|line| line.split_whitespace())
        .filter(|tok| !tok.contains('/'))
}

fn parse_specgrid(section: &RawSection) -> Result<GridDimensions> {
    // First three numeric tokens are nx, ny, nz; trailing flags like `F`
    // are ignored, but a non-numeric token in the first three positions is
    // a malformed deck (e.g. "2 2 F" with nz missing).
    let toks: SmallVec<[&str; 4]> = tokens(&section.body).take(4).collect();
    if toks.len() < 3 {
        return Err(Error::parse(
            section.line,
            format!("SPECGRID declares {} of 3 required dimensions", toks.len()),
        ));
    }

    let mut dims = [0usize; 3];
    for (slot, tok) in dims.iter_mut().zip(&toks) {
        *slot = lexical_core::parse::<u64>(tok.as_bytes()).map_err(|_| Error::MalformedNumber {
            section: "SPECGRID",
            token: tok.to_string(),
        })? as usize;
    }
    Ok(GridDimensions::new(dims[0], dims[1], dims[2]))
}

fn parse_floats(section: &RawSection, name: &'static str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for tok in tokens(&section.body) {
        let v = fast_float::parse::<f64, _>(tok).map_err(|_| Error::MalformedNumber {
            section: name,
            token: tok.to_string(),
        })?;
        values.push(v);
    }
    Ok(values)
}

fn parse_actnum(section: &RawSection) -> Result<Vec<u8>> {
    let mut flags = Vec::new();
    for tok in tokens(&section.body) {
        let (repeat, value) =
            all_consuming(actnum_token)(tok)
                .map(|(_, t)| t)
                .map_err(|_| Error::MalformedNumber {
                    section: "ACTNUM",
                    token: tok.to_string(),
                })?;
        let flag = (value != 0) as u8;
        flags.extend(std::iter::repeat(flag).take(repeat));
    }
    Ok(flags)
}

/// Parse a full GRDECL deck from text.
///
/// Sections may appear in any order; SPECGRID must be present. A missing
/// ACTNUM section defaults to all cells active. Array lengths are checked
/// against the declared dimensions before returning.
pub fn parse_grdecl(content: &str) -> Result<GridDeck> {
    let mut scanner = SectionScanner::new(content);
    let mut seen: FxHashSet<Keyword> = FxHashSet::default();

    let mut dimensions: Option<GridDimensions> = None;
    let mut coord: Option<Vec<f64>> = None;
    let mut zcorn: Option<Vec<f64>> = None;
    let mut actnum: Option<Vec<u8>> = None;

    while let Some(section) = scanner.next_section()? {
        if !seen.insert(section.keyword) {
            return Err(Error::DuplicateSection(section.keyword.as_str()));
        }
        match section.keyword {
            Keyword::SpecGrid => dimensions = Some(parse_specgrid(&section)?),
            Keyword::Coord => coord = Some(parse_floats(&section, "COORD")?),
            Keyword::Zcorn => zcorn = Some(parse_floats(&section, "ZCORN")?),
            Keyword::Actnum => actnum = Some(parse_actnum(&section)?),
        }
    }

    let dimensions = dimensions.ok_or(Error::MissingSection("SPECGRID"))?;
    let coord = coord.ok_or(Error::MissingSection("COORD"))?;
    let zcorn = zcorn.ok_or(Error::MissingSection("ZCORN"))?;
    let actnum = actnum.unwrap_or_else(|| vec![1u8; dimensions.cell_count()]);

    let deck = GridDeck {
        dimensions,
        coord,
        zcorn,
        actnum,
    };
    deck.validate()?;
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal valid 1x1x1 deck: unit cube on vertical pillars
    const UNIT_DECK: &str = "\
SPECGRID
 1 1 1 F /
COORD
 0 0 0  0 0 1
 1 0 0  1 0 1
 0 1 0  0 1 1
 1 1 0  1 1 1
/
ZCORN
 0 0 0 0
 1 1 1 1
/
ACTNUM
 1 /
";

    #[test]
    fn test_scanner_finds_sections() {
        let mut scanner = SectionScanner::new(UNIT_DECK);
        let mut keywords = Vec::new();
        while let Some(section) = scanner.next_section().unwrap() {
            keywords.push(section.keyword);
        }
        assert_eq!(
            keywords,
            vec![
                Keyword::SpecGrid,
                Keyword::Coord,
                Keyword::Zcorn,
                Keyword::Actnum
            ]
        );
    }

    #[test]
    fn test_keyword_boundary() {
        assert!(Keyword::match_line("COORD").is_some());
        assert!(Keyword::match_line("COORD 1 2").is_some());
        assert!(Keyword::match_line("COORDSYS").is_none());
        assert!(Keyword::match_line(" COORD").is_none());
        assert!(Keyword::match_line("coord").is_none());
    }

    #[test]
    fn test_parse_unit_deck() {
        let deck = parse_grdecl(UNIT_DECK).unwrap();
        assert_eq!(deck.dimensions, GridDimensions::new(1, 1, 1));
        assert_eq!(deck.coord.len(), 24);
        assert_eq!(deck.zcorn, vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(deck.actnum, vec![1]);
    }

    #[test]
    fn test_data_before_slash_is_kept() {
        let text = "SPECGRID\n 2 3 4 /\nCOORD\n0 0 0 0 0 1 /\n";
        let mut scanner = SectionScanner::new(text);
        let spec = scanner.next_section().unwrap().unwrap();
        assert_eq!(tokens(&spec.body).collect::<Vec<_>>(), vec!["2", "3", "4"]);
        let coord = scanner.next_section().unwrap().unwrap();
        assert_eq!(tokens(&coord.body).count(), 6);
    }

    #[test]
    fn test_run_length_token() {
        assert_eq!(run_length("48*1"), Ok(("", (48, 1))));
        assert_eq!(actnum_token("7"), Ok(("", (1, 7))));
        assert!(all_consuming(actnum_token)("2*").is_err());
        assert!(all_consuming(actnum_token)("x*1").is_err());
    }

    #[test]
    fn test_actnum_expansion() {
        let section = RawSection {
            keyword: Keyword::Actnum,
            line: 1,
            body: vec!["2*0 3*1"],
        };
        assert_eq!(parse_actnum(&section).unwrap(), vec![0, 0, 1, 1, 1]);

        let section = RawSection {
            keyword: Keyword::Actnum,
            line: 1,
            body: vec!["48*1"],
        };
        assert_eq!(parse_actnum(&section).unwrap(), vec![1u8; 48]);
    }

    #[test]
    fn test_missing_actnum_defaults_to_all_active() {
        let text = UNIT_DECK.replace("ACTNUM\n 1 /\n", "");
        let deck = parse_grdecl(&text).unwrap();
        assert_eq!(deck.actnum, vec![1]);
        assert_eq!(deck.active_cell_count(), 1);
    }

    #[test]
    fn test_missing_specgrid_is_an_error() {
        let text = UNIT_DECK.replacen("SPECGRID\n 1 1 1 F /\n", "", 1);
        assert!(matches!(
            parse_grdecl(&text),
            Err(Error::MissingSection("SPECGRID"))
        ));
    }

    #[test]
    fn test_malformed_specgrid_missing_nz() {
        // "2 2 F" must not silently become nz = NaN
        let text = "SPECGRID\n 2 2 F /\nCOORD\n0 0 0 0 0 1 /\nZCORN\n0 /\n";
        match parse_grdecl(text) {
            Err(Error::MalformedNumber { section, token }) => {
                assert_eq!(section, "SPECGRID");
                assert_eq!(token, "F");
            }
            other => panic!("Expected MalformedNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_coord_value() {
        let text = UNIT_DECK.replacen("1 0 0  1 0 1", "1 0 oops 1 0 1", 1);
        assert!(matches!(
            parse_grdecl(&text),
            Err(Error::MalformedNumber { section: "COORD", .. })
        ));
    }

    #[test]
    fn test_zcorn_length_mismatch() {
        let text = UNIT_DECK.replacen(" 1 1 1 1\n", "", 1);
        assert!(matches!(
            parse_grdecl(&text),
            Err(Error::DimensionMismatch { section: "ZCORN", .. })
        ));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let text = format!("{}ACTNUM\n 1 /\n", UNIT_DECK);
        assert!(matches!(
            parse_grdecl(&text),
            Err(Error::DuplicateSection("ACTNUM"))
        ));
    }

    #[test]
    fn test_unterminated_section() {
        let text = "SPECGRID\n 1 1 1\n";
        assert!(matches!(parse_grdecl(text), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_unknown_keywords_ignored() {
        let text = format!("NOECHO\nMAPUNITS\n METRES /\n{}", UNIT_DECK);
        let deck = parse_grdecl(&text).unwrap();
        assert_eq!(deck.dimensions, GridDimensions::new(1, 1, 1));
    }

    #[test]
    fn test_section_order_tolerant() {
        // ACTNUM ahead of SPECGRID still parses; the default-fill path is
        // the only one that needs dimensions, and it runs after scanning.
        let text = "\
ACTNUM
 1 /
SPECGRID
 1 1 1 /
COORD
 0 0 0 0 0 1  1 0 0 1 0 1  0 1 0 0 1 1  1 1 0 1 1 1 /
ZCORN
 0 0 0 0 1 1 1 1 /
";
        let deck = parse_grdecl(text).unwrap();
        assert_eq!(deck.actnum, vec![1]);
    }

    #[test]
    fn test_scientific_notation_depths() {
        let text = UNIT_DECK.replacen(" 1 1 1 1\n", " 1.0e0 1E0 10.0e-1 0.1e1\n", 1);
        let deck = parse_grdecl(&text).unwrap();
        assert_eq!(deck.zcorn[4..], [1.0, 1.0, 1.0, 1.0]);
    }
}
