use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverInitError {
    #[error("resolver initialization failed")]
    Init {
        #[source]
        source: std::io::Error,
    },
}

impl ResolverInitError {
    pub(crate) fn init(source: std::io::Error) -> Self {
        Self::Init { source }
    }
}
