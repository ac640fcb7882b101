//! # BPE Vocabulary Text Files
//!
//! The format of CLIP's `bpe_simple_vocab_16e6.txt` and friends:
//! a version header line, then one token per line.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{VSResult, VocabScopeError, tokens::is_text_whitespace, vocab::Vocabulary};

/// Read a BPE vocabulary.
///
/// The first line is a header and is discarded; every remaining line is
/// trimmed of surrounding [`is_text_whitespace`] and kept, in order.
///
/// `\n`, `\r\n`, and a lone `\r` all end a line.
///
/// ## Errors
/// * [`VocabScopeError::MissingHeader`] if the input is empty.
/// * [`VocabScopeError::Io`] on read failures (including invalid UTF-8).
pub fn read_bpe_vocab<R>(mut reader: R) -> VSResult<Vocabulary>
where
    R: BufRead,
{
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines = text.split_terminator('\n');

    match lines.next() {
        Some(header) => log::debug!("vocabulary header: {header:?}"),
        None => return Err(VocabScopeError::MissingHeader),
    }

    Ok(Vocabulary::from_tokens(
        lines.map(|line| line.trim_matches(is_text_whitespace)),
    ))
}

/// Load a BPE vocabulary from a file path.
///
/// See [`read_bpe_vocab`].
pub fn load_bpe_vocab_path<P>(path: P) -> VSResult<Vocabulary>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::info!("loading vocabulary: {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    let vocab = read_bpe_vocab(reader)?;

    log::info!("loaded {} tokens", vocab.len());
    Ok(vocab)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_skips_header() {
        let text = "#version: 0.2\ni n\nt h</w>\n  padded \r\n";
        let vocab = read_bpe_vocab(text.as_bytes()).unwrap();

        assert_eq!(vocab.tokens(), &["i n", "t h</w>", "padded"]);
    }

    #[test]
    fn test_read_line_endings() {
        let vocab = read_bpe_vocab("h\na\rb\n".as_bytes()).unwrap();
        assert_eq!(vocab.tokens(), &["a", "b"]);

        let vocab = read_bpe_vocab("h\rx\r\r\ny\r".as_bytes()).unwrap();
        assert_eq!(vocab.tokens(), &["x", "", "y"]);

        let vocab = read_bpe_vocab("h\n\u{1f}ab\u{1c}\n".as_bytes()).unwrap();
        assert_eq!(vocab.tokens(), &["ab"]);
    }

    #[test]
    fn test_read_header_only() {
        let vocab = read_bpe_vocab("#version: 0.2\n".as_bytes()).unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_read_blank_lines() {
        let vocab = read_bpe_vocab("h\n\na\n".as_bytes()).unwrap();
        assert_eq!(vocab.tokens(), &["", "a"]);
    }

    #[test]
    fn test_read_missing_header() {
        assert!(matches!(
            read_bpe_vocab("".as_bytes()),
            Err(VocabScopeError::MissingHeader)
        ));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let bytes: &[u8] = b"header\n\xff\xfe\n";
        assert!(matches!(read_bpe_vocab(bytes), Err(VocabScopeError::Io(_))));
    }

    #[test]
    fn test_load_path() {
        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("bpe_vocab.txt");
                let mut file = File::create(&path)?;
                writeln!(file, "#version: 0.2")?;
                writeln!(file, "a</w>")?;
                writeln!(file, "日本")?;
                drop(file);

                let vocab = load_bpe_vocab_path(&path).expect("failed to load vocab");
                assert_eq!(vocab.tokens(), &["a</w>", "日本"]);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_bpe_vocab_path("/definitely/not/a/vocab.txt"),
            Err(VocabScopeError::Io(_))
        ));
    }
}
