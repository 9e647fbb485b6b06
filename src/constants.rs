//! Wire-level constants shared across the arena, index, bucket, codec, and
//! facade layers. Kept centralized so the packing arithmetic in `index.rs`
//! and the chunking arithmetic in `codec.rs` stay in lockstep.

/// Number of independent shards the cache dispatches keys across.
pub const BUCKET_COUNT: usize = 512;

/// Size, in bytes, of one arena allocation quantum. A single on-arena slot
/// may never straddle a `CHUNK_SIZE` boundary.
pub const CHUNK_SIZE: usize = 65_536;

/// Bits reserved for the generation half of a packed index entry.
pub const GEN_BITS: u32 = 24;

/// Bits reserved for the offset half of a packed index entry.
pub const OFFSET_BITS: u32 = 40;

/// Largest representable generation before a bucket must reset.
pub const MAX_GEN: u32 = (1 << GEN_BITS) - 1;

/// Largest single-bucket arena size representable by `OFFSET_BITS`.
pub const MAX_BUCKET_SIZE: u64 = 1 << OFFSET_BITS;

/// Longest key this cache can ever store a record under, including the
/// 8-byte continuation suffix. A key longer than this cannot fit in any
/// single chunk regardless of value size.
pub const MAX_KEY_LEN: usize = CHUNK_SIZE - 22;

/// Default total arena budget across all buckets when the caller does not
/// specify `max_bytes` explicitly.
pub const DEFAULT_MAX_BYTES: u64 = 1 << 46;

/// Fixed byte cost of the header fields that accompany a first chunk record:
/// 2-byte chunk header + 8-byte deadline.
pub const FIRST_RECORD_HEADER: usize = 10;

/// Fixed byte cost of the header fields that accompany a continuation chunk
/// record: 2-byte chunk header only (no deadline).
pub const CONT_RECORD_HEADER: usize = 2;

/// Size of the arena slot's length-prefix header (key_len << 16 | value_len).
pub const SLOT_HEADER: usize = 4;

/// Byte length of the big-endian position suffix appended to a key to form
/// the derived sub-key for continuation chunks.
pub const SUBKEY_SUFFIX_LEN: usize = 8;
