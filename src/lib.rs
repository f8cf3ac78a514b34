mod convert;
mod error;

pub use convert::{convert_to_ico, ICO_SIZES};
pub use error::ConvertError;
