use super::error::MalformedBlockError;
use itertools::Itertools;
use serde::{Serialize, Serializer};

/// Aligned training sequences: rows are sequences, columns are positions.
/// Every row has the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    rows: Vec<Vec<char>>,
}

impl Block {
    /// Rejects ragged rows. The error reports block 0; callers holding several
    /// blocks fill in the real index.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, MalformedBlockError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, found)) = rows
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(MalformedBlockError {
                    block: 0,
                    row,
                    expected,
                    found,
                });
            }
        }

        Ok(Self { rows })
    }

    /// ```
    /// use bioalg::libs::blosum::Block;
    /// let block = Block::from_rows(["ABC", "ABD"]).unwrap();
    /// assert_eq!(block.height(), 2);
    /// assert_eq!(block.width(), 3);
    /// assert!(Block::from_rows(["ABC", "AB"]).is_err());
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Result<Self, MalformedBlockError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            rows.into_iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of sequences.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of aligned positions.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Every symbol, row by row.
    pub fn cells(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// The symbols at one position, top to bottom.
    pub fn column(&self, pos: usize) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().map(move |row| row[pos])
    }

    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .join("\n")
    }
}

/// A block serializes as its list of row strings.
impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter().map(|row| row.iter().collect::<String>()))
    }
}

/// Splits raw text into blocks.
///
/// Each whitespace-delimited token becomes one row of symbols; blank lines
/// separate blocks. Several tokens on one line are several rows.
///
/// ```
/// use bioalg::libs::blosum::parse_blocks_from_text;
/// let blocks = parse_blocks_from_text("AAA BBB\nCCC\n\n  DD\nEE\n").unwrap();
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].height(), 3);
/// assert_eq!(blocks[1].width(), 2);
/// ```
pub fn parse_blocks_from_text(raw: &str) -> Result<Vec<Block>, MalformedBlockError> {
    let mut blocks = vec![];

    for (blank, lines) in &raw.lines().chunk_by(|line| line.trim().is_empty()) {
        if blank {
            continue;
        }
        let block = Block::from_rows(lines.flat_map(str::split_whitespace))
            .map_err(|e| MalformedBlockError {
                block: blocks.len(),
                ..e
            })?;
        blocks.push(block);
    }

    tracing::debug!(blocks = blocks.len(), "parsed blocks");

    Ok(blocks)
}

/// Rows joined by newlines, blocks separated by a blank line.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    blocks.iter().map(Block::to_text).join("\n\n")
}

const SAMPLE_ROWS: [&[&str]; 3] = [
    &["ABCDA", "ABCDA", "BBCDA", "AACDA", "CBADA", "AACAA"],
    &["BBC", "BBC", "BCC", "CBC", "BBD"],
    &["AAAA", "DBBB", "BAAA", "ADBA"],
];

/// Three small blocks over the alphabet `ABCD`, handy for demonstrations.
pub fn sample_blocks() -> Vec<Block> {
    SAMPLE_ROWS
        .iter()
        .map(|rows| Block {
            rows: rows.iter().map(|row| row.chars().collect()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_shape() {
        let block = Block::from_rows(["ABCDA", "AACAA"]).unwrap();
        assert_eq!(block.height(), 2);
        assert_eq!(block.width(), 5);
        assert_eq!(block.column(2).collect::<String>(), "CC");
        assert_eq!(block.cells().count(), 10);

        let empty = Block::new(vec![]).unwrap();
        assert_eq!(empty.width(), 0);
        assert_eq!(empty.height(), 0);
    }

    #[test]
    fn test_block_serialize_rows() {
        let block = Block::from_rows(["ÉA", "AC"]).unwrap();
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            serde_json::json!(["ÉA", "AC"])
        );
    }

    #[test]
    fn test_block_ragged() {
        let err = Block::from_rows(["ABC", "ABC", "AB"]).unwrap_err();
        assert_eq!(
            err,
            MalformedBlockError {
                block: 0,
                row: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_parse_blocks() {
        let text = "ABCDA\nABCDA\n\n\nBBC BBC\n  BCC  \n";
        let blocks = parse_blocks_from_text(text).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].rows()[1], vec!['A', 'B', 'C', 'D', 'A']);
        assert_eq!(blocks[1].height(), 3);
        assert_eq!(blocks[1].width(), 3);

        // whitespace-only lines separate blocks too
        let blocks = parse_blocks_from_text("AB\n \t \nCD").unwrap();
        assert_eq!(blocks.len(), 2);

        assert!(parse_blocks_from_text("").unwrap().is_empty());
        assert!(parse_blocks_from_text("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_blocks_malformed() {
        let err = parse_blocks_from_text("AB\nAB\n\nABC\nAB\n").unwrap_err();
        assert_eq!(err.block, 1);
        assert_eq!(err.row, 1);
        assert_eq!(
            err.to_string(),
            "malformed block 2: row 2 has 2 columns, expected 3"
        );
    }

    #[test]
    fn test_blocks_round_trip() {
        let text = blocks_to_text(&sample_blocks());
        assert!(text.starts_with("ABCDA\nABCDA\n"));
        assert!(text.contains("CAA\n\nBBC\n"));

        let blocks = parse_blocks_from_text(&text).unwrap();
        assert_eq!(blocks, sample_blocks());
        assert_eq!(blocks_to_text(&blocks), text);

        // tokens on one line come back one per line
        let blocks = parse_blocks_from_text("AB CD\n\n\n\nEF").unwrap();
        assert_eq!(blocks_to_text(&blocks), "AB\nCD\n\nEF");
    }
}
