pub type Result<T> = std::result::Result<T, Error>;

/// Errors at the engine's registry and configuration seams.
///
/// Everything inside a running comparison surface is total (out-of-range
/// navigation clamps, over-limit toggles no-op), so errors only arise when a
/// hosting screen wires the engine up: asking for a schema that was never
/// registered, registering one twice, or supplying a config blob that does
/// not decode.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown attribute schema: {schema_id}")]
    UnknownSchema { schema_id: String },

    #[error("Attribute schema already registered: {schema_id}")]
    DuplicateSchema { schema_id: String },

    #[error("Invalid surface config: {message}")]
    InvalidConfig { message: String },
}
