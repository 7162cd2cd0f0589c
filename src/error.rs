use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManiclipError {
    #[error(
        "No manifest URL given.\n\nPass one as an argument or set [manifest] url in the config file."
    )]
    UrlMissing,
}
