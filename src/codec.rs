//! The value codec: splits a user value into one or more on-arena records,
//! derives the sub-keys continuation chunks are stored under, and decodes a
//! stored record back into its structural fields.
//!
//! A record is framed as `[position: u8][chunk_count: u8][payload...]`, with
//! an extra 8-byte deadline field inserted after the header on the first
//! chunk only (`position == 1`).

use crate::constants::{CHUNK_SIZE, CONT_RECORD_HEADER, FIRST_RECORD_HEADER, SLOT_HEADER, SUBKEY_SUFFIX_LEN};
use crate::hash::BucketHash;

/// One record ready to be appended to a bucket's arena.
pub struct Chunk {
    /// The key this record is addressed under — the user key for the first
    /// chunk, or `user_key || be_u64(position)` for continuations.
    pub sub_key: Vec<u8>,
    /// The framed on-arena record bytes (header + payload).
    pub record: Vec<u8>,
    /// The hash of `sub_key`, precomputed so the caller need not re-hash.
    pub hash: u64,
}

/// Derive the continuation sub-key for `position` (`>= 2`) under `key`.
pub fn sub_key(key: &[u8], position: u64) -> Vec<u8> {
    let mut sk = Vec::with_capacity(key.len() + SUBKEY_SUFFIX_LEN);
    sk.extend_from_slice(key);
    sk.extend_from_slice(&position.to_be_bytes());
    sk
}

/// Does `payload` fit in a single chunk alongside `key` and the first-chunk
/// header, per §3's sizing rule?
#[inline]
pub fn fits_single_chunk(key_len: usize, payload_len: usize) -> bool {
    SLOT_HEADER + key_len + FIRST_RECORD_HEADER + payload_len < CHUNK_SIZE
}

/// Split `payload` into the ordered list of chunk records needed to store it
/// under `key` with the given `deadline_nanos` (0 = no TTL). Every record's
/// `chunk_count` byte is stamped with the final total before returning.
pub fn encode(hasher: &dyn BucketHash, key: &[u8], payload: &[u8], deadline_nanos: u64) -> Vec<Chunk> {
    if fits_single_chunk(key.len(), payload.len()) {
        let mut record = Vec::with_capacity(FIRST_RECORD_HEADER + payload.len());
        record.push(1); // position
        record.push(1); // chunk_count
        record.extend_from_slice(&deadline_nanos.to_be_bytes());
        record.extend_from_slice(payload);
        return vec![Chunk { hash: hasher.sum(key), sub_key: key.to_vec(), record }];
    }

    // Same bound is reused for every chunk, including continuations, so a
    // single arithmetic constant governs the whole split.
    let max_chunk_payload = CHUNK_SIZE - SLOT_HEADER - key.len() - FIRST_RECORD_HEADER - 1;

    let mut chunks = Vec::new();
    let (first, mut rest) = payload.split_at(max_chunk_payload.min(payload.len()));

    let mut first_record = Vec::with_capacity(FIRST_RECORD_HEADER + first.len());
    first_record.push(1);
    first_record.push(0); // stamped below
    first_record.extend_from_slice(&deadline_nanos.to_be_bytes());
    first_record.extend_from_slice(first);
    chunks.push(Chunk { hash: hasher.sum(key), sub_key: key.to_vec(), record: first_record });

    let mut position = 2u64;
    while !rest.is_empty() {
        let take = max_chunk_payload.min(rest.len());
        let (piece, remainder) = rest.split_at(take);
        rest = remainder;

        let mut record = Vec::with_capacity(CONT_RECORD_HEADER + piece.len());
        record.push(position as u8);
        record.push(0); // stamped below
        record.extend_from_slice(piece);

        let sk = sub_key(key, position);
        chunks.push(Chunk { hash: hasher.sum(&sk), sub_key: sk, record });
        position += 1;
    }

    let count = chunks.len() as u8;
    for chunk in &mut chunks {
        chunk.record[1] = count;
    }
    chunks
}

/// A decoded view over a stored record's structural fields, borrowing the
/// underlying bytes rather than copying them.
pub struct RecordView<'a> {
    pub position: u8,
    pub chunk_count: u8,
    /// Meaningful only when `position == 1`; 0 elsewhere and when unset.
    pub deadline_nanos: u64,
    pub payload: &'a [u8],
}

/// Decode a stored record's header, returning its fields and a borrowed view
/// of the payload.
pub fn decode(record: &[u8]) -> RecordView<'_> {
    let position = record[0];
    let chunk_count = record[1];
    if position == 1 {
        let deadline_nanos = u64::from_be_bytes(record[2..10].try_into().unwrap());
        RecordView { position, chunk_count, deadline_nanos, payload: &record[FIRST_RECORD_HEADER..] }
    } else {
        RecordView { position, chunk_count, deadline_nanos: 0, payload: &record[CONT_RECORD_HEADER..] }
    }
}
