#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown handedness label: '{0}'. Must be one of: Left, Right")]
    UnknownHandedness(String),
}
