mod text_file;

pub use self::text_file::*;
