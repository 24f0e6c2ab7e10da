use std::io::{self, ErrorKind, Read};

use encoding_rs::{CoderResult, Decoder, Encoding};

use crate::normalize::fold_case;
use crate::policy::outcome::ValidationResult;

/// Streaming search over unstructured text.
///
/// Memory stays bounded by the chunk size: each chunk is decoded, folded and
/// searched together with the last `len(word) - 1` folded characters of the
/// previous window, so a match split across a chunk boundary is still seen.
#[derive(Debug, Clone, Copy)]
pub struct PlainTextReader {
    chunk_size: usize,
    encoding: &'static Encoding,
}

impl PlainTextReader {
    /// `chunk_size` is in bytes and is clamped to at least one.
    pub fn new(chunk_size: usize, encoding: &'static Encoding) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            encoding,
        }
    }

    /// Validate a text stream: valid as soon as the word is seen anywhere.
    ///
    /// An empty target word is reported without touching `reader`.
    pub fn validate<R: Read>(&self, reader: R, target_word: &str) -> io::Result<ValidationResult> {
        let needle = fold_case(target_word);
        if needle.is_empty() {
            return Ok(ValidationResult::empty_target_word());
        }

        if self.contains(reader, &needle)? {
            Ok(ValidationResult::found_in_text(target_word))
        } else {
            Ok(ValidationResult::not_found_in_text(target_word))
        }
    }

    /// Search `reader` for an already case-folded, non-empty `needle`.
    /// Stops reading at the first match.
    ///
    /// Bytes are decoded in the configured encoding only; a BOM of that
    /// encoding is dropped, anything else malformed is replaced.
    pub fn contains<R: Read>(&self, mut reader: R, needle: &str) -> io::Result<bool> {
        let overlap = needle.chars().count().saturating_sub(1);
        let mut decoder = self.encoding.new_decoder_with_bom_removal();
        let mut buf = vec![0u8; self.chunk_size];
        let mut decoded = String::new();
        let mut window = String::new();
        let mut chunks = 0usize;
        let mut malformed = false;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            let last = n == 0;

            decoded.clear();
            malformed |= decode_chunk(&mut decoder, &buf[..n], &mut decoded, last);
            chunks += 1;

            window.push_str(&fold_case(&decoded));
            if window.contains(needle) {
                self.warn_if_malformed(malformed);
                tracing::debug!(chunks, "target word found in text");
                return Ok(true);
            }
            keep_tail(&mut window, overlap);

            if last {
                break;
            }
        }

        self.warn_if_malformed(malformed);
        tracing::debug!(chunks, "target word not found in text");
        Ok(false)
    }

    fn warn_if_malformed(&self, malformed: bool) {
        if malformed {
            tracing::warn!(
                encoding = self.encoding.name(),
                "malformed byte sequences replaced while decoding text"
            );
        }
    }
}

/// Decode one chunk, carrying incomplete sequences over to the next call.
/// Returns whether any malformed input was replaced.
fn decode_chunk(decoder: &mut Decoder, mut input: &[u8], out: &mut String, last: bool) -> bool {
    let mut had_errors = false;
    loop {
        let needed = decoder
            .max_utf8_buffer_length(input.len())
            .unwrap_or(input.len() * 3 + 4);
        out.reserve(needed);

        let (result, read, errors) = decoder.decode_to_string(input, out, last);
        had_errors |= errors;
        input = &input[read..];

        match result {
            CoderResult::InputEmpty => return had_errors,
            CoderResult::OutputFull => continue,
        }
    }
}

/// Keep only the last `chars` characters of `s`.
fn keep_tail(s: &mut String, chars: usize) {
    if chars == 0 {
        s.clear();
        return;
    }
    if let Some((idx, _)) = s.char_indices().rev().nth(chars - 1) {
        s.drain(..idx);
    }
}
