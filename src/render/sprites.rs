//! Builtin sprite art.
//!
//! Each sprite is a grid of palette characters plus the intrinsic size (in
//! world pixels) the image reports once loaded. The grid is sampled to
//! whatever size it is drawn at, so it can be much coarser than the image.

use crate::render::assets::SpriteId;
use crate::render::canvas::Rgb;

/// Palette character → colour. `None` is transparent.
pub fn palette(ch: char) -> Option<Option<Rgb>> {
    let color = match ch {
        '.' | ' ' => return Some(None),
        'K' => Rgb(0x24, 0x1c, 0x1c),
        'W' => Rgb(0xfa, 0xfa, 0xf0),
        'Y' => Rgb(0xf8, 0xd0, 0x28),
        'O' => Rgb(0xf0, 0x80, 0x30),
        'R' => Rgb(0xd8, 0x40, 0x30),
        'G' => Rgb(0x73, 0xbf, 0x2e),
        'g' => Rgb(0x55, 0x80, 0x22),
        'L' => Rgb(0x9c, 0xe6, 0x59),
        'T' => Rgb(0xde, 0xd8, 0x95),
        'D' => Rgb(0xc8, 0xa8, 0x58),
        'B' => Rgb(0x70, 0xc5, 0xce),
        'C' => Rgb(0xe9, 0xfc, 0xd9),
        'c' => Rgb(0xa4, 0xd8, 0xc2),
        'b' => Rgb(0x5e, 0xc8, 0x50),
        _ => return None,
    };
    Some(Some(color))
}

/// A sprite as authored: intrinsic size plus palette rows.
#[derive(Debug, Clone)]
pub struct SpriteArt {
    pub width: f64,
    pub height: f64,
    pub rows: Vec<String>,
}

impl SpriteArt {
    fn from_rows(width: f64, height: f64, rows: &[&str]) -> Self {
        Self {
            width,
            height,
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }
}

// ── Bird (34×24) ────────────────────────────────────────────────────

const BIRD_UP: [&str; 6] = [
    "..KKKK...",
    "KWWYYWK..",
    "KWWYKWKK.",
    "KYYYYKOOK",
    ".KYYYKOK.",
    "..KKKK...",
];

const BIRD_MID: [&str; 6] = [
    "..KKKK...",
    ".KYYYWK..",
    "KWWYKWKK.",
    "KYYYYKOOK",
    ".KYYYKOK.",
    "..KKKK...",
];

const BIRD_DOWN: [&str; 6] = [
    "..KKKK...",
    ".KYYYWK..",
    "KYYYKWKK.",
    "KYYYYKOOK",
    "KWWYYKOK.",
    ".KWKKK...",
];

// ── Scenery ─────────────────────────────────────────────────────────

const BACKGROUND: [&str; 12] = [
    "BBBBBBBB",
    "BBBBBBBB",
    "BBBBBBBB",
    "BBBBBBBB",
    "BBBBBBBB",
    "BBBBBBBB",
    "BBBBBBBB",
    "BCCBBBCB",
    "CCCCBCCC",
    "cBccBccB",
    "bbcbbcbb",
    "bbbbbbbb",
];

// Pattern repeats every 8 columns so the strip tiles at half its width.
const GROUND: [&str; 4] = [
    "LLGGLLGGLLGGLLGG",
    "gggggggggggggggg",
    "TTTTTTTTTTTTTTTT",
    "TTDTTTTTTTDTTTTT",
];

// Lip on top; the top pipe of a pair is drawn flipped.
const PIPE: [&str; 16] = [
    "KKKKKKKK",
    "KLLGGGgK",
    "KKKKKKKK",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
    ".KLGGgK.",
];

// ── 3×5 font ────────────────────────────────────────────────────────

fn glyph(ch: char) -> [&'static str; 5] {
    match ch {
        '0' | 'O' => ["###", "#.#", "#.#", "#.#", "###"],
        '1' => [".#.", "##.", ".#.", ".#.", "###"],
        '2' => ["###", "..#", "###", "#..", "###"],
        '3' => ["###", "..#", ".##", "..#", "###"],
        '4' => ["#.#", "#.#", "###", "..#", "..#"],
        '5' => ["###", "#..", "###", "..#", "###"],
        '6' => ["###", "#..", "###", "#.#", "###"],
        '7' => ["###", "..#", ".#.", ".#.", ".#."],
        '8' => ["###", "#.#", "###", "#.#", "###"],
        '9' => ["###", "#.#", "###", "..#", "###"],
        'A' => [".#.", "#.#", "###", "#.#", "#.#"],
        'D' => ["##.", "#.#", "#.#", "#.#", "##."],
        'E' => ["###", "#..", "##.", "#..", "###"],
        'G' => ["###", "#..", "#.#", "#.#", "###"],
        'M' => ["#.#", "###", "###", "#.#", "#.#"],
        'R' => ["##.", "#.#", "##.", "#.#", "#.#"],
        'T' => ["###", ".#.", ".#.", ".#.", ".#."],
        'V' => ["#.#", "#.#", "#.#", "#.#", ".#."],
        'Y' => ["#.#", "#.#", ".#.", ".#.", ".#."],
        _ => ["...", "...", "...", "...", "..."],
    }
}

/// Rows of `text` in the 3×5 font, one blank column between glyphs.
fn text_rows(text: &str, ink: char, paper: char) -> Vec<String> {
    let spacer = paper.to_string();
    (0..5)
        .map(|row| {
            text.chars()
                .map(|ch| {
                    glyph(ch)[row]
                        .chars()
                        .map(|c| if c == '#' { ink } else { paper })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(spacer.as_str())
        })
        .collect()
}

/// Centred text lines on a bordered panel.
fn banner(lines: &[&str], ink: char, paper: char, border: char) -> Vec<String> {
    let blocks: Vec<Vec<String>> = lines.iter().map(|l| text_rows(l, ink, paper)).collect();
    let inner_width = blocks
        .iter()
        .map(|b| b[0].chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let pad_row = |content: &str| -> String {
        let len = content.chars().count();
        let left = (inner_width - len) / 2;
        let right = inner_width - len - left;
        format!(
            "{border}{}{content}{}{border}",
            paper.to_string().repeat(left),
            paper.to_string().repeat(right)
        )
    };

    let mut rows = vec![border.to_string().repeat(inner_width + 2), pad_row("")];
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            rows.push(pad_row(""));
        }
        rows.extend(block.iter().map(|r| pad_row(r.as_str())));
    }
    rows.push(pad_row(""));
    rows.push(border.to_string().repeat(inner_width + 2));
    rows
}

/// Builtin art for every asset.
pub fn builtin(id: SpriteId) -> SpriteArt {
    match id {
        SpriteId::BirdUp => SpriteArt::from_rows(34.0, 24.0, &BIRD_UP),
        SpriteId::BirdMid => SpriteArt::from_rows(34.0, 24.0, &BIRD_MID),
        SpriteId::BirdDown => SpriteArt::from_rows(34.0, 24.0, &BIRD_DOWN),
        SpriteId::Background => SpriteArt::from_rows(320.0, 480.0, &BACKGROUND),
        SpriteId::Ground => SpriteArt::from_rows(320.0, 40.0, &GROUND),
        SpriteId::Pipe => SpriteArt::from_rows(52.0, 320.0, &PIPE),
        SpriteId::Digit(d) => {
            let ch = char::from(b'0' + d.min(9));
            SpriteArt {
                width: 24.0,
                height: 40.0,
                rows: text_rows(&ch.to_string(), 'W', '.'),
            }
        }
        SpriteId::GetReady => SpriteArt {
            width: 184.0,
            height: 120.0,
            rows: banner(&["GET", "READY"], 'O', 'W', 'K'),
        },
        SpriteId::GameOver => SpriteArt {
            width: 195.0,
            height: 45.0,
            rows: banner(&["GAME OVER"], 'O', 'W', 'K'),
        },
    }
}
