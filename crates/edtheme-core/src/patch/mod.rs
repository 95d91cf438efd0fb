// crates/edtheme-core/src/patch/mod.rs
//
// Sparse firmware patch, IPS frame:
//   "PATCH" | record* | "EOF"
//   record = offset_hi offset_mid offset_lo len_hi len_lo value{len}
// The top offset byte and the length high byte are always zero in this
// 16-bit address space; the encoder still emits them.

pub mod decode;
pub mod encode;

pub const HEADER: &[u8; 5] = b"PATCH";
pub const FOOTER: &[u8; 3] = b"EOF";

/// One sparse write parsed from (or destined for) the wire. `offset`
/// is the 24-bit firmware address; the value is as long as the record
/// says it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchRecord {
    pub offset: u32,
    pub value: Vec<u8>,
}
