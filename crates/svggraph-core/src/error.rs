pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed graph SVG: {0}")]
    Svg(#[from] roxmltree::Error),
}
