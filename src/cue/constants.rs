use hex_literal::hex;

// Byte order marks
pub const BOM_UTF8: [u8; 3] = hex!("EF BB BF");
pub const BOM_UTF16LE: [u8; 2] = hex!("FF FE");
pub const BOM_UTF16BE: [u8; 2] = hex!("FE FF");

pub const DEFAULT_ENCODING: &str = "utf-8";
pub const DEFAULT_FILE_TYPE: &str = "WAVE";
pub const DEFAULT_TRACK_TYPE: &str = "AUDIO";

/// Detector results that are wrong more often than not for CUE sheets.
pub const UNRELIABLE_ENCODINGS: [&str; 1] = ["x-mac-cyrillic"];

pub const TRACK_INDENT: &str = "  ";
pub const ATTRIBUTE_INDENT: &str = "    ";
