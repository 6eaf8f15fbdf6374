/// Response validation failures.
///
/// Every variant is the "bad response" condition of the protocol: the reply
/// is discarded as a whole, nothing is partially decoded. The variants only
/// exist to make the rejection reason visible in logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The response length differs from the exact length this command's
    /// reply must have.
    #[error("bad response: length {actual}, expected exactly {expected}")]
    Length { expected: usize, actual: usize },

    /// The first response byte does not echo the request opcode.
    #[error("bad response: opcode {actual:#04x}, expected {expected:#04x}")]
    Opcode { expected: u8, actual: u8 },

    /// A decoded field is outside its enumerated or numeric range.
    #[error("bad response: {field} value {value:#04x} out of range")]
    Field { field: &'static str, value: u8 },
}

pub type Result<T> = std::result::Result<T, WireError>;
