pub mod short;
pub mod varint;

pub use short::{pack_short, read_short, unpack_short, MAX_SHORT};
pub use varint::{
    decode32, decode32_async, encode32, encode32_to_array, encode_i32, encoded_len32,
    Varint32Decoder, MAX_VARINT32_LEN,
};
